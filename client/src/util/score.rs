//! Sentiment score formatting helpers.

#[cfg(test)]
#[path = "score_test.rs"]
mod score_test;

use crate::net::types::SentimentType;

/// Map a score in `[-1, 1]` to a percentage in `[0, 100]`.
///
/// Uses `round(((score + 1) / 2) * 100)`; out-of-range scores are clamped.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn to_pct(score: f64) -> u8 {
    let pct = (((score + 1.0) / 2.0) * 100.0).round().clamp(0.0, 100.0);
    pct as u8
}

/// Card score label, e.g. `0.35 (68%)`.
pub fn score_label(score: f64) -> String {
    // `+ 0.0` turns -0.0 into 0.0 so it never prints as "-0.00".
    format!("{:.2} ({}%)", score + 0.0, to_pct(score))
}

/// BEM modifier for the per-sentiment badge and card ring colors.
pub fn sentiment_modifier(kind: SentimentType) -> &'static str {
    match kind {
        SentimentType::Positive => "positive",
        SentimentType::Negative => "negative",
        SentimentType::Neutral => "neutral",
    }
}

/// Items counter shown next to the history heading.
pub fn items_label(count: usize) -> String {
    format!("{count} items")
}
