//! Feedback history and submission state for the analyzer page.
//!
//! DESIGN
//! ======
//! One struct holds the history sequence, the draft text, the in-flight
//! guard and the current error line. Every transition is a plain method so
//! the page only does `signal.update(|s| s.transition(..))` and the rules can
//! be tested without a browser.
//!
//! CONCURRENCY
//! ===========
//! `begin_submit` checks and sets `submitting` in the same call. The page
//! issues the POST only when it returns `Some`, so at most one submission is
//! ever in flight and a second attempt while pending sends nothing.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use crate::net::api::ApiError;
use crate::net::types::FeedbackRecord;

/// Shown when the initial history read fails.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load history. Is the backend running on :8080?";

/// Shown when a submission round trip fails.
pub const SUBMIT_ERROR_MESSAGE: &str = "Submit failed. Check server logs.";

/// Client-side feedback store plus draft/submission state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedbackState {
    /// Records in arrival order; see [`FeedbackState::sorted_items`] for display order.
    pub items: Vec<FeedbackRecord>,
    pub draft: String,
    pub submitting: bool,
    pub error: Option<String>,
}

impl FeedbackState {
    /// Records ordered by ascending identifier (missing ids sort as `0`).
    ///
    /// The sort is stable, so records with equal keys keep arrival order.
    pub fn sorted_items(&self) -> Vec<FeedbackRecord> {
        let mut sorted = self.items.clone();
        sorted.sort_by_key(FeedbackRecord::sort_key);
        sorted
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Apply the result of the startup history read.
    ///
    /// Success replaces the sequence; failure keeps it and sets the load
    /// error message.
    pub fn apply_history(&mut self, result: Result<Vec<FeedbackRecord>, ApiError>) {
        match result {
            Ok(records) => self.items = records,
            Err(_) => self.error = Some(LOAD_ERROR_MESSAGE.to_owned()),
        }
    }

    pub fn set_draft(&mut self, text: String) {
        self.draft = text;
    }

    pub fn clear_draft(&mut self) {
        self.draft.clear();
    }

    /// Whether a submit attempt right now would send a request.
    pub fn can_submit(&self) -> bool {
        !self.submitting && !self.draft.trim().is_empty()
    }

    /// Start a submission if the draft is non-blank and nothing is in flight.
    ///
    /// Returns the raw draft to send, or `None` when the attempt is a no-op.
    /// On `Some`, the guard is set and any previous error is cleared.
    pub fn begin_submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        self.submitting = true;
        self.error = None;
        Some(self.draft.clone())
    }

    /// Finish the in-flight submission.
    ///
    /// Success appends the new record and clears the draft. Failure keeps the
    /// draft for a retry and sets the submit error message.
    pub fn finish_submit(&mut self, result: Result<FeedbackRecord, ApiError>) {
        self.submitting = false;
        match result {
            Ok(record) => {
                self.items.push(record);
                self.draft.clear();
            }
            Err(_) => self.error = Some(SUBMIT_ERROR_MESSAGE.to_owned()),
        }
    }
}
