//! REST API helpers for the question and history endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns a tagged `Result` so the page can show a visible
//! message instead of leaving the previous view in place. Network failures,
//! non-success statuses and malformed bodies stay distinguishable.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{HistorialResponse, QueryResponse};
#[cfg(feature = "hydrate")]
use super::types::QueryRequest;

/// Failure of a client API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS, ...).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("server responded with status {status}")]
    Status { status: u16, detail: Option<String> },
    /// The body was not JSON or did not have the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Message shown to the user for this failure.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) | Self::Unavailable => {
                "No se pudo contactar con el servidor. Inténtalo de nuevo.".to_owned()
            }
            Self::Status { detail: Some(detail), .. } => detail.clone(),
            Self::Status { status, detail: None } => {
                format!("El servidor respondió con un error ({status}).")
            }
            Self::Decode(_) => "La respuesta del servidor no tiene el formato esperado.".to_owned(),
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, body: &str) -> ApiError {
    ApiError::Status { status, detail: wire::error_detail(body) }
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_error(err: &wire::DecodeError) -> ApiError {
    ApiError::Decode(err.to_string())
}

/// Submit a question via `POST /api/query`.
///
/// # Errors
///
/// Returns [`ApiError::Network`] if the request fails, [`ApiError::Status`]
/// for a non-OK status and [`ApiError::Decode`] for a malformed body.
pub async fn submit_query(question: &str) -> Result<QueryResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(wire::QUERY_PATH)
            .json(&QueryRequest::new(question))
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let ok = resp.ok();
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        if !ok {
            return Err(status_error(status, &body));
        }
        wire::decode_query_response(&body).map_err(|e| decode_error(&e))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = question;
        Err(ApiError::Unavailable)
    }
}

/// Fetch a user's full conversation history via `GET /api/historial`.
///
/// # Errors
///
/// Same classification as [`submit_query`].
pub async fn fetch_historial(user_id: &str) -> Result<HistorialResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(wire::HISTORIAL_PATH)
            .query([(wire::HISTORIAL_USER_PARAM, user_id)])
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let ok = resp.ok();
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        if !ok {
            return Err(status_error(status, &body));
        }
        wire::decode_historial_response(&body).map_err(|e| decode_error(&e))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        Err(ApiError::Unavailable)
    }
}
