//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is a plain struct provided as an `RwSignal` through Leptos context;
//! components read it and call its transition methods.

pub mod feedback;
