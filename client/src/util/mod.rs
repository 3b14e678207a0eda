//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure formatting lives here so components stay declarative and the mapping
//! rules can be unit tested natively.

pub mod score;
