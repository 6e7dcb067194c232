//! Neonstage - themed landing page with a rotating 3D card carousel
//!
//! Server-rendered with Leptos and hydrated in the browser, where the
//! carousel controller is driven by animation frames and pointer input.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    let config = embedded_config();
    leptos::mount::hydrate_body(move || {
        provide_context(config);
        view! { <App/> }
    });
}
