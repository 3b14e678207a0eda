//! Analyzer page: feedback form above the sorted history.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. On mount (browser only) it reads the full history
//! once; there is no polling and no retry.

use leptos::prelude::*;

use crate::components::feedback_card::FeedbackCard;
use crate::components::feedback_form::FeedbackForm;
use crate::state::feedback::FeedbackState;
use crate::util::score::items_label;

#[component]
pub fn AnalyzerPage() -> impl IntoView {
    let feedback = expect_context::<RwSignal<FeedbackState>>();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_feedback().await;
        match &result {
            Ok(records) => log::debug!("loaded {} feedback records", records.len()),
            Err(e) => log::warn!("feedback history load failed: {e}"),
        }
        feedback.update(|s| s.apply_history(result));
    });

    view! {
        <main class="analyzer-page">
            <h1 class="analyzer-page__title">"Sentiment Analyzer"</h1>

            <FeedbackForm/>

            <div class="analyzer-page__history-header">
                <h2 class="analyzer-page__subtitle">"Feedback History"</h2>
                <span class="analyzer-page__count">
                    {move || items_label(feedback.with(FeedbackState::item_count))}
                </span>
            </div>

            <Show
                when=move || feedback.with(|s| !s.items.is_empty())
                fallback=|| {
                    view! {
                        <div class="card analyzer-page__empty">
                            "No feedback yet. Submit your first analysis above."
                        </div>
                    }
                }
            >
                <ul class="analyzer-page__cards">
                    {move || {
                        feedback
                            .with(FeedbackState::sorted_items)
                            .into_iter()
                            .map(|record| {
                                view! {
                                    <li>
                                        <FeedbackCard record=record/>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>
        </main>
    }
}
