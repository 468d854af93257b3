//! # pitchside
//!
//! Leptos + WASM client for the PitchSide sports news site: featured media
//! galleries, reader comment threads, and the schedule-agent admin screen.
//!
//! This crate contains pages, components, application state, the REST API
//! client, and display utilities. The backend API and the scraping jobs the
//! admin screen configures live elsewhere; everything here is presentation.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging + panic reporting, then hydrate the
/// server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
