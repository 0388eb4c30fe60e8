#[cfg(any(feature = "ssr", feature = "hydrate", feature = "export"))]
pub mod app;
pub mod clock;
pub mod config;
pub mod content;
#[cfg(feature = "export")]
pub mod export;
#[cfg(any(feature = "ssr", feature = "export"))]
pub mod logging;
pub mod style;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
