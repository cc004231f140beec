//! Forwarding handlers for the page's `/api/*` calls.
//!
//! Each call is logged with endpoint, user and latency, mirroring the
//! backend's interaction log so the host's own logs can be read alone.

use std::time::Instant;

use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use wire::{DEFAULT_USER_ID, ErrorDetail, HEALTH_PATH, HISTORIAL_PATH, QUERY_PATH, QueryRequest};

use crate::state::AppState;
use crate::upstream::{UpstreamError, UpstreamResponse};

#[derive(Debug, Deserialize)]
pub struct HistorialParams {
    pub usuario_id: Option<String>,
}

/// `POST /api/query`: validate the question and forward it.
pub async fn query(State(state): State<AppState>, Json(request): Json<QueryRequest>) -> Response {
    let Some(request) = normalize_request(request) else {
        tracing::debug!(endpoint = QUERY_PATH, "rejected blank question");
        return detail_response(StatusCode::BAD_REQUEST, "La pregunta no puede estar vacía.");
    };
    let user = request.user_id.clone().unwrap_or_else(|| DEFAULT_USER_ID.to_owned());

    let started = Instant::now();
    match state.upstream.post_query(&request).await {
        Ok(resp) => {
            let latency_ms = elapsed_ms(started);
            if resp.is_success() {
                tracing::info!(
                    endpoint = QUERY_PATH,
                    %user,
                    latency_ms,
                    sources = source_count(&resp.body),
                    "question answered"
                );
            } else {
                tracing::warn!(endpoint = QUERY_PATH, %user, latency_ms, status = resp.status, "backend rejected question");
            }
            passthrough(resp)
        }
        Err(e) => upstream_failure(QUERY_PATH, &user, &e),
    }
}

/// `GET /api/historial?usuario_id=...`: forward to the backend.
pub async fn historial(State(state): State<AppState>, Query(params): Query<HistorialParams>) -> Response {
    let user = params.usuario_id.as_deref().unwrap_or(DEFAULT_USER_ID).to_owned();
    let started = Instant::now();
    match state.upstream.get_historial(Some(&user)).await {
        Ok(resp) => {
            tracing::info!(endpoint = HISTORIAL_PATH, %user, latency_ms = elapsed_ms(started), status = resp.status, "historial served");
            passthrough(resp)
        }
        Err(e) => upstream_failure(HISTORIAL_PATH, &user, &e),
    }
}

/// `GET /api/health`: forward to the backend.
pub async fn health(State(state): State<AppState>) -> Response {
    match state.upstream.get_health().await {
        Ok(resp) => passthrough(resp),
        Err(e) => upstream_failure(HEALTH_PATH, "-", &e),
    }
}

/// Trim the question; `None` when nothing is left.
pub(crate) fn normalize_request(request: QueryRequest) -> Option<QueryRequest> {
    let question = request.question.trim();
    if question.is_empty() {
        return None;
    }
    Some(QueryRequest { question: question.to_owned(), user_id: request.user_id })
}

/// `HttpClientBuild` only comes out of `UpstreamClient::new` at startup; a
/// handler never sees it, but the match stays exhaustive and treats it as a
/// host fault rather than a backend one.
pub(crate) fn upstream_error_to_status(err: &UpstreamError) -> StatusCode {
    match err {
        UpstreamError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        UpstreamError::Request(_) | UpstreamError::Body(_) => StatusCode::BAD_GATEWAY,
        UpstreamError::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn upstream_failure(endpoint: &str, user: &str, err: &UpstreamError) -> Response {
    tracing::error!(endpoint, user, error = %err, "backend call failed");
    let detail = match err {
        UpstreamError::Timeout(_) => "El asistente tardó demasiado en responder.",
        _ => "No se pudo contactar con el asistente.",
    };
    detail_response(upstream_error_to_status(err), detail)
}

/// Relay the backend reply, keeping its content type. A backend that sends
/// none gets `application/json`, the only format it is expected to speak.
fn passthrough(resp: UpstreamResponse) -> Response {
    let status = StatusCode::from_u16(resp.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = resp.content_type.unwrap_or_else(|| "application/json".to_owned());
    (status, [(header::CONTENT_TYPE, content_type)], resp.body).into_response()
}

fn detail_response(status: StatusCode, detail: &str) -> Response {
    (status, Json(ErrorDetail::new(detail))).into_response()
}

fn source_count(body: &str) -> usize {
    wire::decode_query_response(body).map_or(0, |r| r.sources.len())
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
