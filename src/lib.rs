//! # portfolio
//!
//! Leptos + WASM behavior layer for a single-page personal portfolio.
//!
//! The crate splits every feature into a pure state holder (`state`,
//! `content`, `net::relay` request building) and a thin browser shim
//! (`util`, `components`). Only the shims touch the DOM, and they compile to
//! no-ops without the `csr` feature so the state machines test natively.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log_level(option_env!("PORTFOLIO_LOG_LEVEL")));
    leptos::mount::mount_to_body(app::App);
}

/// Resolve the console log level from the compile-time setting.
#[cfg(feature = "csr")]
fn log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|value| value.trim().parse::<log::Level>().ok())
        .unwrap_or(log::Level::Info)
}
