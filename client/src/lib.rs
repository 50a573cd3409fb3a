//! Course catalog web client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Compiled twice: as the SSR library linked into the host binary (`ssr`)
//! and as the WASM bundle that hydrates the server-rendered page
//! (`hydrate`). Browser-only code is gated behind `hydrate`; everything else
//! is shared so server and client render identical markup.
//!
//! LAYOUT
//! ======
//! - `state`: session, roles and session persistence
//! - `guard` + `routes`: route metadata and the navigation guard policy
//! - `net`: course API calls and JWT payload decoding
//! - `pages` / `components`: views
//! - `config` / `theme` / `util`: ambient settings and browser helpers

pub mod app;
pub mod components;
pub mod config;
pub mod guard;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod theme;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"console logger already installed".into());
    }
    leptos::mount::hydrate_body(app::App);
}
