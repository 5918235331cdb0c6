#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod carousel;
pub mod config;
pub mod contact;
pub mod content;
pub mod filter;
pub mod reveal;
pub mod section;
#[cfg(feature = "ssr")]
pub mod telemetry;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(err) = console_log::init_with_level(level) {
        leptos::logging::warn!("console logger unavailable: {err}");
    }
    leptos::mount::hydrate_body(App);
}
