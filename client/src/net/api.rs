//! REST helpers for the sentiment backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since the
//! backend is only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure (transport, non-2xx status, undecodable body) comes back as
//! an [`ApiError`]. Callers log the detail and show their own fixed message;
//! nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::FeedbackRecord;

/// Fixed address of the sentiment backend.
pub const API_BASE_URL: &str = "http://localhost:8080";

/// Collection path for feedback records (GET lists, POST creates).
pub const FEEDBACK_PATH: &str = "/api/feedback";

/// Failure of a single backend round trip.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("backend responded with status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn feedback_endpoint() -> String {
    format!("{API_BASE_URL}{FEEDBACK_PATH}")
}

#[cfg(any(test, feature = "hydrate"))]
fn ensure_success(ok: bool, status: u16) -> Result<(), ApiError> {
    if ok { Ok(()) } else { Err(ApiError::Status(status)) }
}

/// Fetch the full feedback history via `GET /api/feedback`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the backend answers with a
/// non-OK status, or the body is not a JSON array of records.
pub async fn fetch_feedback() -> Result<Vec<FeedbackRecord>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&feedback_endpoint())
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        ensure_success(resp.ok(), resp.status())?;
        resp.json::<Vec<FeedbackRecord>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Submit raw feedback text via `POST /api/feedback` (`text/plain` body).
///
/// Returns the record the backend created, including its score, type and
/// identifier.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the backend answers with a
/// non-OK status, or the body is not a single JSON record.
pub async fn submit_feedback(content: &str) -> Result<FeedbackRecord, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&feedback_endpoint())
            .header("Content-Type", "text/plain")
            .body(content)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        ensure_success(resp.ok(), resp.status())?;
        resp.json::<FeedbackRecord>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = content;
        Err(ApiError::Unavailable)
    }
}
