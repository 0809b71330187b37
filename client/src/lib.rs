//! # client
//!
//! Leptos + WASM frontend for the Seeker Adventure trip marketplace.
//!
//! This crate contains pages, components, the authentication controller and
//! session store, network types, and the REST client for the backend API.
//! The `server` crate renders it with SSR; the `hydrate` feature builds the
//! browser bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs console logging and hydrates the SSR body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
