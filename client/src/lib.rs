//! # sentiment-client
//!
//! Leptos + WASM frontend for the sentiment analyzer.
//!
//! This crate contains the page, components, feedback state, network types,
//! and the REST helpers that talk to the sentiment backend. The `server`
//! crate renders it with the `ssr` feature; the browser bundle is built with
//! the `hydrate` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
