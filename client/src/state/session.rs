//! Recent questions asked in this page session.
//!
//! Newest first, capped at [`SESSION_HISTORY_CAP`]. Lives only in memory and
//! is gone after a reload.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Maximum number of question/answer pairs kept.
pub const SESSION_HISTORY_CAP: usize = 5;

/// One answered question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub question: String,
    pub answer: String,
}

impl HistoryEntry {
    #[must_use]
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self { question: question.into(), answer: answer.into() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionHistory {
    entries: Vec<HistoryEntry>,
}

impl SessionHistory {
    /// Prepend an entry, evicting the oldest one past the cap.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(SESSION_HISTORY_CAP);
    }

    /// Entries, most recent first.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The history section stays hidden until the first answer arrives.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self.is_empty()
    }
}
