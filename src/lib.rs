//! # coursehub-web
//!
//! Leptos + WASM frontend for the course marketplace: landing pages, course
//! curriculum viewers, the admin course list, and the route guards that gate
//! navigation on session state.
//!
//! Guard decisions live in plain functions (`util::auth`, `state::auth`,
//! `util::token`) so they can be tested without a browser; the Leptos
//! components in `components::guards` only wire those decisions into the
//! router.

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
