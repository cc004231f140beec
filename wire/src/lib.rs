//! Shared JSON wire types for the question-answering endpoints.
//!
//! This crate owns the request/response shapes used by `client`, `server`
//! and `cli`. The backend speaks Spanish field names (`pregunta`,
//! `respuesta`, `fuentes`, ...); the Rust types keep those names on the wire
//! through serde renames and expose English field names in code.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Path of the question endpoint.
pub const QUERY_PATH: &str = "/api/query";
/// Path of the full conversation history endpoint.
pub const HISTORIAL_PATH: &str = "/api/historial";
/// Path of the backend health endpoint.
pub const HEALTH_PATH: &str = "/api/health";
/// Query-string parameter naming the user on [`HISTORIAL_PATH`].
pub const HISTORIAL_USER_PARAM: &str = "usuario_id";
/// User whose history the page shows. There is no login; every visitor is
/// this user.
pub const DEFAULT_USER_ID: &str = "usuario_juan";

/// Error returned by [`decode`] and the typed wrappers around it.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The body was not JSON, or did not match the expected shape.
    #[error("failed to decode response body: {0}")]
    Json(#[from] serde_json::Error),
}

/// Body of `POST /api/query`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    #[serde(rename = "pregunta")]
    pub question: String,
    /// Omitted from the body when `None`; the backend then uses its own
    /// default user.
    #[serde(rename = "usuario_id", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl QueryRequest {
    #[must_use]
    pub fn new(question: impl Into<String>) -> Self {
        Self { question: question.into(), user_id: None }
    }

    #[must_use]
    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }
}

/// A cited document returned alongside an answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    #[serde(rename = "documento")]
    pub document: String,
}

/// Response of `POST /api/query`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(rename = "respuesta")]
    pub answer: String,
    /// Missing or `null` decodes as an empty list.
    #[serde(rename = "fuentes", default, deserialize_with = "null_as_empty")]
    pub sources: Vec<Source>,
}

/// One stored exchange in a user's conversation history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    #[serde(rename = "usuario")]
    pub user: String,
    #[serde(rename = "agente")]
    pub agent: String,
    /// Timestamp string as stored by the backend (`YYYY-MM-DD HH:MM:SS`).
    #[serde(rename = "fecha", default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Response of `GET /api/historial`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorialResponse {
    #[serde(rename = "conversaciones", default, deserialize_with = "null_as_empty")]
    pub conversations: Vec<Conversation>,
}

/// Response of `GET /api/health`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub vector_store: String,
}

/// Error body shape used by the backend (`{"detail": "..."}`) and by the
/// host server for its own failures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    #[must_use]
    pub fn new(detail: impl Into<String>) -> Self {
        Self { detail: detail.into() }
    }
}

/// Decode a JSON body into `T`.
///
/// # Errors
///
/// Returns [`DecodeError::Json`] for malformed JSON or an unexpected shape.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, DecodeError> {
    Ok(serde_json::from_str(body)?)
}

/// Decode a `POST /api/query` response body.
///
/// # Errors
///
/// Returns [`DecodeError::Json`] when `respuesta` is missing or the body is
/// not JSON.
pub fn decode_query_response(body: &str) -> Result<QueryResponse, DecodeError> {
    decode(body)
}

/// Decode a `GET /api/historial` response body.
///
/// # Errors
///
/// Returns [`DecodeError::Json`] when the body is not a JSON object of the
/// expected shape.
pub fn decode_historial_response(body: &str) -> Result<HistorialResponse, DecodeError> {
    decode(body)
}

/// Pull the `detail` message out of an error body, if it has one.
#[must_use]
pub fn error_detail(body: &str) -> Option<String> {
    decode::<ErrorDetail>(body)
        .ok()
        .map(|e| e.detail)
        .filter(|d| !d.trim().is_empty())
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
