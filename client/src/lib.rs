//! # client
//!
//! Leptos + WASM front-end for the scripture tools portal.
//!
//! This crate contains the hash-based navigation table, pages, the shared UI
//! state, the notice queue and the session gate that verifies the stored
//! credential against the backend before guarded pages render.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
