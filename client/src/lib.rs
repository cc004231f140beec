//! # client
//!
//! Leptos + WASM frontend for the question-answering assistant.
//!
//! This crate contains the page, its components, the page state models and
//! the HTTP helpers for `/api/query` and `/api/historial`. The `hydrate`
//! feature builds the browser bundle; `ssr` builds the server-rendered shell
//! used by the `server` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
