//! # stavlav-client
//!
//! Leptos frontend for the STAVLAV, s.r.o. company page. Rendered on the
//! server through `leptos_axum` (`ssr` feature) and hydrated in the browser
//! (`hydrate` feature).
//!
//! This crate contains the page shell, section components, the static
//! company content, the mobile menu state, and the one-time browser
//! environment setup (document title and favicon).

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrates the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
