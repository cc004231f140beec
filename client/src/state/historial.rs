//! Full conversation history modal state.
//!
//! DESIGN
//! ======
//! Fetches are never cancelled. Each settled fetch overwrites the content,
//! so when two overlap the last one to arrive wins regardless of the order
//! they were issued in.

#[cfg(test)]
#[path = "historial_test.rs"]
mod historial_test;

use crate::net::api::ApiError;
use crate::net::types::{Conversation, HistorialResponse};
use crate::util::scroll_lock;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HistorialState {
    pub open: bool,
    /// Conversations in the order the backend returned them.
    pub conversations: Vec<Conversation>,
    /// Message for the last failed fetch, shown next to the trigger button.
    pub error: Option<String>,
}

impl HistorialState {
    /// Apply a settled fetch.
    ///
    /// Success replaces the content and opens the modal. Failure records a
    /// message and leaves the modal as it was.
    pub fn apply(&mut self, result: Result<HistorialResponse, ApiError>) {
        match result {
            Ok(resp) => {
                self.conversations = resp.conversations;
                self.error = None;
                self.open = true;
            }
            Err(e) => {
                self.error = Some(e.user_message());
            }
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Click that reached the overlay. Only a click whose target is the
    /// backdrop itself closes; clicks that started inside the content do not.
    pub fn overlay_click(&mut self, target_is_backdrop: bool) {
        if target_is_backdrop {
            self.close();
        }
    }

    /// `overflow` value `<body>` should carry for the current open state.
    #[must_use]
    pub fn overflow(&self) -> &'static str {
        scroll_lock::overflow_value(self.open)
    }
}
