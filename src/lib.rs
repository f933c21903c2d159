//! Cordon - enterprise data intelligence landing site
//!
//! A server-rendered, hydrated marketing page built with Leptos. The only
//! nontrivial client logic is the scroll-stack layout engine in [`core`];
//! the server adds a small proxy for the chat demo's text generation.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
