use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::{Value, json};

use super::*;
use crate::routes::api_routes;
use crate::test_support::{backend_config, fake_backend, spawn};
use crate::upstream::UpstreamClient;

/// Host router in front of the fake backend. Returns (host URL, backend hits).
async fn spawn_host() -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let backend = spawn(fake_backend(hits.clone())).await;
    let upstream = UpstreamClient::new(&backend_config(backend)).unwrap();
    let host = spawn(api_routes(AppState::new(upstream))).await;
    (host, hits)
}

// =============================================================================
// Pure helpers
// =============================================================================

#[test]
fn normalize_request_trims_question() {
    let req = normalize_request(QueryRequest::new("  What is X?  ").with_user("ana")).unwrap();
    assert_eq!(req.question, "What is X?");
    assert_eq!(req.user_id.as_deref(), Some("ana"));
}

#[test]
fn normalize_request_rejects_blank() {
    assert!(normalize_request(QueryRequest::new(" \n\t ")).is_none());
}

#[test]
fn upstream_error_to_status_maps_timeout() {
    let err = UpstreamError::Timeout("slow".into());
    assert_eq!(upstream_error_to_status(&err), StatusCode::GATEWAY_TIMEOUT);
}

#[test]
fn upstream_error_to_status_maps_connection_failures() {
    assert_eq!(upstream_error_to_status(&UpstreamError::Request("refused".into())), StatusCode::BAD_GATEWAY);
    assert_eq!(upstream_error_to_status(&UpstreamError::Body("cut".into())), StatusCode::BAD_GATEWAY);
}

#[test]
fn upstream_error_to_status_maps_client_build_to_internal_error() {
    let err = UpstreamError::HttpClientBuild("tls".into());
    assert_eq!(upstream_error_to_status(&err), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn passthrough_defaults_missing_content_type_to_json() {
    let resp = passthrough(UpstreamResponse { status: 200, content_type: None, body: "{}".into() });
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/json");
}

#[test]
fn source_count_tolerates_foreign_bodies() {
    assert_eq!(source_count(r#"{"respuesta":"a","fuentes":[{"documento":"x"},{"documento":"y"}]}"#), 2);
    assert_eq!(source_count("not json"), 0);
}

// =============================================================================
// Forwarding
// =============================================================================

#[tokio::test]
async fn query_forwards_and_passes_answer_through() {
    let (host, hits) = spawn_host().await;
    let resp = reqwest::Client::new()
        .post(format!("{host}/api/query"))
        .json(&json!({ "pregunta": "  What is X?  " }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["respuesta"], "eco: What is X?");
    assert_eq!(body["fuentes"][0]["documento"], "doc1.pdf");
    assert_eq!(body["usuario"], Value::Null);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn blank_question_never_reaches_backend() {
    let (host, hits) = spawn_host().await;
    let resp = reqwest::Client::new()
        .post(format!("{host}/api/query"))
        .json(&json!({ "pregunta": "   " }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 400);
    let body: ErrorDetail = resp.json().await.unwrap();
    assert_eq!(body.detail, "La pregunta no puede estar vacía.");
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn backend_error_status_and_detail_pass_through() {
    let (host, _) = spawn_host().await;
    let resp = reqwest::Client::new()
        .post(format!("{host}/api/query"))
        .json(&json!({ "pregunta": "boom" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 503);
    let body: ErrorDetail = resp.json().await.unwrap();
    assert_eq!(body.detail, "El índice no está disponible.");
}

#[tokio::test]
async fn plain_text_backend_error_keeps_its_content_type() {
    let (host, _) = spawn_host().await;
    let resp = reqwest::Client::new()
        .post(format!("{host}/api/query"))
        .json(&json!({ "pregunta": "crash" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 500);
    assert_eq!(resp.headers()[reqwest::header::CONTENT_TYPE], "text/plain; charset=utf-8");
    assert_eq!(resp.text().await.unwrap(), "Internal Server Error");
}

#[tokio::test]
async fn json_backend_reply_is_labelled_json() {
    let (host, _) = spawn_host().await;
    let resp = reqwest::Client::new()
        .post(format!("{host}/api/query"))
        .json(&json!({ "pregunta": "What is X?" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.headers()[reqwest::header::CONTENT_TYPE], "application/json");
}

#[tokio::test]
async fn historial_defaults_user_and_keeps_order() {
    let (host, _) = spawn_host().await;
    let body = reqwest::get(format!("{host}/api/historial"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    let decoded = wire::decode_historial_response(&body).unwrap();
    let users: Vec<&str> = decoded.conversations.iter().map(|c| c.user.as_str()).collect();
    assert_eq!(users, ["usuario_juan: q1", "usuario_juan: q2"]);
}

#[tokio::test]
async fn historial_forwards_explicit_user() {
    let (host, _) = spawn_host().await;
    let body = reqwest::get(format!("{host}/api/historial?usuario_id=ana"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    let decoded = wire::decode_historial_response(&body).unwrap();
    assert_eq!(decoded.conversations[0].user, "ana: q1");
}

#[tokio::test]
async fn unreachable_backend_maps_to_bad_gateway() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let upstream = UpstreamClient::new(&backend_config(format!("http://{addr}"))).unwrap();
    let host = spawn(api_routes(AppState::new(upstream))).await;
    let resp = reqwest::get(format!("{host}/api/health")).await.unwrap();

    assert_eq!(resp.status().as_u16(), 502);
    let body: ErrorDetail = resp.json().await.unwrap();
    assert_eq!(body.detail, "No se pudo contactar con el asistente.");
}

#[tokio::test]
async fn healthz_answers_without_backend() {
    let (host, hits) = spawn_host().await;
    let resp = reqwest::get(format!("{host}/healthz")).await.unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}
