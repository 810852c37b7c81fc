//! # shelf-sense client
//!
//! Leptos + WASM frontend for Shelf Sense: registration, login, session
//! persistence, and a protected home view listing the user's previous orders.
//!
//! The crate builds twice: with `hydrate` for the browser bundle and with
//! `ssr` for the host server that renders the HTML shell. Browser-only code
//! sits behind the `hydrate` feature so everything else runs in native tests.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;
pub mod validate;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
