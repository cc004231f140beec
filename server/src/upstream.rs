//! HTTP client for the RAG backend that answers questions and stores history.
//!
//! DESIGN
//! ======
//! The host does not interpret backend responses beyond logging. Status and
//! body are handed back as-is so the browser sees exactly what the backend
//! said, including its `{"detail": ...}` error bodies.

use std::time::Duration;

use wire::{DEFAULT_USER_ID, HEALTH_PATH, HISTORIAL_PATH, HISTORIAL_USER_PARAM, QUERY_PATH, QueryRequest};

use crate::config::BackendConfig;

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The backend did not answer within the configured timeout.
    #[error("backend request timed out: {0}")]
    Timeout(String),

    /// The request could not be sent or the connection failed.
    #[error("backend request failed: {0}")]
    Request(String),

    /// The response body could not be read.
    #[error("backend response body unreadable: {0}")]
    Body(String),
}

/// Raw backend reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: u16,
    /// Backend `Content-Type`, if it sent one.
    pub content_type: Option<String>,
    pub body: String,
}

impl UpstreamResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &BackendConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| UpstreamError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.clone() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /api/query` on the backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached or its body cannot
    /// be read. Non-success statuses are returned as `Ok`.
    pub async fn post_query(&self, request: &QueryRequest) -> Result<UpstreamResponse, UpstreamError> {
        self.send(self.http.post(self.url(QUERY_PATH)).json(request))
            .await
    }

    /// `GET /api/historial?usuario_id=...` on the backend.
    ///
    /// # Errors
    ///
    /// Same as [`UpstreamClient::post_query`].
    pub async fn get_historial(&self, user_id: Option<&str>) -> Result<UpstreamResponse, UpstreamError> {
        let user_id = user_id.unwrap_or(DEFAULT_USER_ID);
        self.send(
            self.http
                .get(self.url(HISTORIAL_PATH))
                .query(&[(HISTORIAL_USER_PARAM, user_id)]),
        )
        .await
    }

    /// `GET /api/health` on the backend.
    ///
    /// # Errors
    ///
    /// Same as [`UpstreamClient::post_query`].
    pub async fn get_health(&self) -> Result<UpstreamResponse, UpstreamError> {
        self.send(self.http.get(self.url(HEALTH_PATH))).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<UpstreamResponse, UpstreamError> {
        let response = request.send().await.map_err(classify_send_error)?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = response
            .text()
            .await
            .map_err(|e| UpstreamError::Body(e.to_string()))?;
        Ok(UpstreamResponse { status, content_type, body })
    }
}

fn classify_send_error(err: reqwest::Error) -> UpstreamError {
    if err.is_timeout() {
        UpstreamError::Timeout(err.to_string())
    } else {
        UpstreamError::Request(err.to_string())
    }
}

#[cfg(test)]
#[path = "upstream_test.rs"]
mod tests;
