//! Epic Adventures by Jen - travel site client
//!
//! Scroll-reveal animations and page interactivity for the agency's
//! marketing site, built with Leptos and WebAssembly. Domain logic lives in
//! [`core`] and is testable without a browser; [`ui`] binds it to the DOM.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
