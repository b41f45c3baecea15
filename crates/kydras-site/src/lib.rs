//! Kydras Systems landing site
//!
//! A single Leptos page, server-rendered by axum under the `ssr` feature and
//! hydrated in the browser under `hydrate`.

pub mod app;
pub mod brand;
pub mod components;
pub mod config;
pub mod error;
#[cfg(feature = "ssr")]
pub mod fileserv;
pub mod pages;
#[cfg(feature = "ssr")]
pub mod server;

pub use error::{SiteError, SiteResult};

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    leptos::mount_to_body(app::App);
}
