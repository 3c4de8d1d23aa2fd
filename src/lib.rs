//! # facematch
//!
//! Leptos + WASM frontend for the FaceMatch photo-analysis product: upload
//! a photo, receive an AI-generated personality/compatibility report,
//! manage credits, and browse past analyses.
//!
//! All analysis, credit accounting, and payment processing live in the
//! external REST backend; this crate is the browser client. The session
//! manager in `net::session` owns the auth lifecycle (persisted token,
//! bearer header, refresh-and-replay) and everything else renders against
//! its state.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
