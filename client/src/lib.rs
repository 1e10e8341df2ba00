//! # client
//!
//! Leptos + WASM frontend for the campus portal.
//!
//! This crate contains pages, components, the reactive auth context, the
//! browser-backed session slot and the REST client. Every access decision is
//! delegated to the `access` crate; this layer only renders the outcome.

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
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
