//! # compass-client
//!
//! Leptos + WASM frontend for the Compass student career-guidance portal.
//!
//! This crate contains pages, components, application state, network types,
//! and the authenticated REST client. Session handling (token storage, route
//! guards, the global redirect watcher, and 401 cleanup) lives in `state`,
//! `net`, and `components` and is shared by every page.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered shell into a live app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
