//! Portfolio - single-page personal portfolio
//!
//! Scroll-animated sections, a navbar that follows the theme of the section
//! on screen, and a contact form backed by a third-party form relay.
//! Built with Leptos: rendered on the server, hydrated in the browser.

#![recursion_limit = "512"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();

    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.class_list().add_1(crate::core::reveal::REVEAL_READY_CLASS);
    }

    leptos::mount::hydrate_body(App);
}
