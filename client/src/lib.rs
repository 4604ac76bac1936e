//! # client
//!
//! Leptos + WASM frontend for the metro map application: the diagram
//! surface, the add-station flow, the news and cat pages, and the bridge
//! to the embedded chat widget.
//!
//! Pure geometry and render-model code lives in the `diagram` crate; this
//! crate owns pages, components, application state, and network types.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point, invoked by the hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
