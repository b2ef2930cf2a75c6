//! # hrms-client
//!
//! Leptos + WASM frontend for the HRMS platform.
//!
//! This crate binds the `access` core to the browser: `localStorage`
//! persistence, the HTTP auth client, the reactive session context, route
//! gating, and the role-aware layout. Business screens talk to the remote
//! HR API and are mounted behind the same gate.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let config = config::ClientConfig::from_build_env();
    let _ = console_log::init_with_level(config.log_level);
    log::info!("hrms client starting against {}", config.api_base_url);
    leptos::mount::mount_to_body(app::App);
}
