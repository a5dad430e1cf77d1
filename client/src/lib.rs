//! # client
//!
//! Leptos + WASM frontend for WaveMinder, a community marine-conservation
//! tracker. Users sign in, log marine-life sightings, file beach condition
//! reports, record conservation actions, and see community totals.
//!
//! This crate contains pages, components, session and list state, the REST
//! client for the WaveMinder backend, and pure helpers for form coercion and
//! display formatting. The host binary renders it with `ssr`; the browser
//! bundle is built with `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
