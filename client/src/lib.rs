//! # bookshelf-client
//!
//! Leptos + WASM frontend for the book manager.
//!
//! This crate contains the page, components, application state, the book
//! wire types, and the REST client for the remote books collection. The
//! `server` crate renders the shell over SSR; the browser hydrates it through
//! `hydrate`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
