//! # gamershop
//!
//! Leptos + WASM storefront client: a genre-filterable, paginated game
//! catalog fetched from a remote API, plus a shopping cart persisted in
//! browser `localStorage`.
//!
//! There is no server component. The browser build (`csr` feature) mounts
//! the app client-side; native builds compile the same modules with every
//! browser path no-opping, which keeps state and helper logic unit-testable.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(crate::app::App);
}
