//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the analyzer form and history cards while reading and
//! writing shared state from Leptos context providers.

pub mod feedback_card;
pub mod feedback_form;
