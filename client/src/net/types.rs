//! Wire DTOs for the sentiment backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON so serde can decode
//! `/api/feedback` responses without a translation layer. Records are
//! created by the backend only; the client never edits one in place.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Categorical sentiment label returned alongside the score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SentimentType {
    Positive,
    Negative,
    Neutral,
}

impl SentimentType {
    /// Upper-case label as sent by the backend (e.g. `"POSITIVE"`).
    pub fn label(self) -> &'static str {
        match self {
            Self::Positive => "POSITIVE",
            Self::Negative => "NEGATIVE",
            Self::Neutral => "NEUTRAL",
        }
    }
}

/// One analyzed piece of feedback.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    /// Backend-assigned identifier; absent before persistence.
    #[serde(default)]
    pub id: Option<i64>,
    /// Raw submitted text.
    pub content: String,
    /// Polarity in `[-1, 1]`.
    pub sentiment_score: f64,
    pub sentiment_type: SentimentType,
    /// Suggested reply text, if the backend produced one.
    #[serde(default)]
    pub model_response: Option<String>,
    /// Backend timestamp string, passed through untouched.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl FeedbackRecord {
    /// Identifier used for display ordering; missing identifiers sort as `0`.
    pub fn sort_key(&self) -> i64 {
        self.id.unwrap_or(0)
    }

    /// The suggested reply, only when it carries any text.
    pub fn suggested_reply(&self) -> Option<&str> {
        self.model_response.as_deref().filter(|reply| !reply.is_empty())
    }
}
