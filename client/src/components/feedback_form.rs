//! New-feedback form: draft textarea, error line, Analyze and Clear actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads and writes the shared `RwSignal<FeedbackState>`. The POST is issued
//! only after `begin_submit` has claimed the in-flight guard.

use leptos::prelude::*;

use crate::state::feedback::FeedbackState;

const PLACEHOLDER: &str = "e.g. The app is great, but the login is slow and confusing on mobile.";

#[component]
pub fn FeedbackForm() -> impl IntoView {
    let feedback = expect_context::<RwSignal<FeedbackState>>();
    let submitting = move || feedback.with(|s| s.submitting);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !feedback.with_untracked(FeedbackState::can_submit) {
            return;
        }
        let mut pending = None;
        feedback.update(|s| pending = s.begin_submit());
        let Some(content) = pending else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::submit_feedback(&content).await;
            if let Err(e) = &result {
                log::warn!("feedback submit failed: {e}");
            }
            feedback.update(|s| s.finish_submit(result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = content;
    };

    view! {
        <section class="card feedback-form">
            <header class="feedback-form__header">
                <h2 class="feedback-form__title">"✚ New Feedback"</h2>
                <p class="feedback-form__description">"Type feedback and submit to analyze."</p>
            </header>
            <form on:submit=on_submit>
                <textarea
                    class="feedback-form__input"
                    rows="4"
                    placeholder=PLACEHOLDER
                    prop:value=move || feedback.with(|s| s.draft.clone())
                    on:input=move |ev| feedback.update(|s| s.set_draft(event_target_value(&ev)))
                ></textarea>
                <Show when=move || feedback.with(|s| s.error.is_some())>
                    <p class="feedback-form__error">{move || feedback.with(|s| s.error.clone().unwrap_or_default())}</p>
                </Show>
                <div class="feedback-form__actions">
                    <button class="btn btn--primary" type="submit" disabled=submitting>
                        <Show when=submitting fallback=|| "Analyze">
                            <span class="spinner" aria-hidden="true"></span>
                            "Analyzing…"
                        </Show>
                    </button>
                    <button
                        class="btn btn--outline"
                        type="button"
                        on:click=move |_| feedback.update(FeedbackState::clear_draft)
                    >
                        "Clear"
                    </button>
                </div>
            </form>
        </section>
    }
}
