//! Networking modules for the sentiment backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the two REST round trips and `types` defines the wire
//! schema they exchange.

pub mod api;
pub mod types;
