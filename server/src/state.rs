//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! only holds the backend client; the host keeps no per-user state of its own.

use std::sync::Arc;

use crate::upstream::UpstreamClient;

/// Clone is required by Axum; the client is shared behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<UpstreamClient>,
}

impl AppState {
    #[must_use]
    pub fn new(upstream: UpstreamClient) -> Self {
        Self { upstream: Arc::new(upstream) }
    }
}
