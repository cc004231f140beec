//! Lifecycle state of the question form.
//!
//! DESIGN
//! ======
//! A submission moves `Idle/Answered/Failed -> Loading -> Answered|Failed`.
//! `begin` is the only way into `Loading` and `finish` is the only way out,
//! so the submit control is busy exactly while one request is outstanding.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use crate::net::api::ApiError;
use crate::net::types::QueryResponse;
use crate::state::session::HistoryEntry;

/// Where the current (or last) submission stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QueryStatus {
    #[default]
    Idle,
    Loading,
    Answered,
    Failed,
}

/// Question form state: busy flag, rendered answer, sources, error message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryState {
    pub status: QueryStatus,
    pub answer: String,
    /// Source document labels in the order the backend returned them.
    pub sources: Vec<String>,
    pub error: Option<String>,
}

impl QueryState {
    /// `true` while a request is outstanding.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.status == QueryStatus::Loading
    }

    /// Whether the answer area should be shown.
    #[must_use]
    pub fn has_answer(&self) -> bool {
        self.status == QueryStatus::Answered
    }

    /// Start a submission for raw input text.
    ///
    /// Returns the trimmed question to send, or `None` when nothing should be
    /// sent (blank input, or a request is already outstanding). On `Some`, the
    /// state is `Loading` and the previous answer and error are cleared.
    pub fn begin(&mut self, raw: &str) -> Option<String> {
        if self.is_busy() {
            return None;
        }
        let question = normalize_question(raw)?;
        self.status = QueryStatus::Loading;
        self.answer.clear();
        self.sources.clear();
        self.error = None;
        Some(question)
    }

    /// Settle the outstanding submission.
    ///
    /// Always leaves the busy state. On success, returns the entry to add to
    /// the session history.
    pub fn finish(&mut self, question: &str, result: Result<QueryResponse, ApiError>) -> Option<HistoryEntry> {
        match result {
            Ok(resp) => {
                self.status = QueryStatus::Answered;
                self.sources = resp.sources.into_iter().map(|s| s.document).collect();
                self.answer = resp.answer;
                self.error = None;
                Some(HistoryEntry::new(question, self.answer.clone()))
            }
            Err(e) => {
                self.status = QueryStatus::Failed;
                self.error = Some(e.user_message());
                None
            }
        }
    }
}

/// Trim input; blank input yields `None`.
#[must_use]
pub fn normalize_question(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
