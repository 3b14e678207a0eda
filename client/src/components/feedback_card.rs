//! Card rendering one analyzed feedback record.

use leptos::prelude::*;

use crate::net::types::FeedbackRecord;
use crate::util::score::{score_label, sentiment_modifier, to_pct};

/// Sentiment badge, score bar, original text and optional suggested reply.
#[component]
pub fn FeedbackCard(record: FeedbackRecord) -> impl IntoView {
    let pct = to_pct(record.sentiment_score);
    let modifier = sentiment_modifier(record.sentiment_type);
    let reply = record.suggested_reply().map(str::to_owned);

    view! {
        <article class={format!("card feedback-card feedback-card--{modifier}")}>
            <header class="feedback-card__header">
                <h3 class="feedback-card__title">"Sentiment"</h3>
                <span class={format!("badge badge--{modifier}")}>{record.sentiment_type.label()}</span>
            </header>
            <p class="feedback-card__description">"Model confidence mapped to −1..1 → 0..100%"</p>
            <div class="feedback-card__score">
                <div class="feedback-card__score-row">
                    <span>"Score"</span>
                    <span class="feedback-card__score-value">{score_label(record.sentiment_score)}</span>
                </div>
                <div class="progress" role="progressbar" aria-valuemin="0" aria-valuemax="100" aria-valuenow={pct.to_string()}>
                    <div class="progress__bar" style={format!("width: {pct}%")}></div>
                </div>
            </div>
            <hr class="feedback-card__separator"/>
            <div>
                <div class="feedback-card__caption">"Feedback"</div>
                <p class="feedback-card__content">{record.content}</p>
            </div>
            {reply.map(|text| {
                view! {
                    <div class="feedback-card__reply">
                        <div class="feedback-card__caption">"✦ Suggested reply"</div>
                        <blockquote class="feedback-card__reply-text">{text}</blockquote>
                    </div>
                }
            })}
        </article>
    }
}
