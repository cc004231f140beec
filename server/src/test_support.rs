//! Throwaway HTTP servers for tests: a fake RAG backend and a helper to bind
//! any router on an ephemeral local port.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Json;
use axum::Router;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use serde_json::{Value, json};

use crate::config::{BackendConfig, BackendTimeouts};

/// Serve `router` on `127.0.0.1:0` and return its base URL.
pub(crate) async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server");
    });
    format!("http://{addr}")
}

pub(crate) fn backend_config(base_url: String) -> BackendConfig {
    BackendConfig { base_url, timeouts: BackendTimeouts { request_secs: 5, connect_secs: 2 } }
}

/// Backend double. `/api/query` echoes the question, `/api/historial` echoes
/// the user id, `/api/health` reports connected. A question of `"boom"`
/// yields a 503 with a `detail` body, `"crash"` a plain-text 500. Every
/// query hit bumps `hits`.
pub(crate) fn fake_backend(hits: Arc<AtomicUsize>) -> Router {
    Router::new()
        .route(
            "/api/query",
            post(move |Json(body): Json<Value>| {
                let hits = hits.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    let question = body["pregunta"].as_str().unwrap_or_default().to_owned();
                    match question.as_str() {
                        "boom" => (
                            StatusCode::SERVICE_UNAVAILABLE,
                            Json(json!({ "detail": "El índice no está disponible." })),
                        )
                            .into_response(),
                        "crash" => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response(),
                        _ => Json(json!({
                            "respuesta": format!("eco: {question}"),
                            "fuentes": [{ "documento": "doc1.pdf" }],
                            "usuario": body.get("usuario_id").cloned().unwrap_or(Value::Null),
                        }))
                        .into_response(),
                    }
                }
            }),
        )
        .route(
            "/api/historial",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                let user = params.get("usuario_id").cloned().unwrap_or_default();
                Json(json!({
                    "usuario_id": user,
                    "conversaciones": [
                        { "fecha": "2025-01-01 10:00:00", "usuario": format!("{user}: q1"), "agente": "a1" },
                        { "usuario": format!("{user}: q2"), "agente": "a2" }
                    ]
                }))
            }),
        )
        .route(
            "/api/health",
            get(|| async { Json(json!({ "status": "ok", "vector_store": "connected" })) }),
        )
}
