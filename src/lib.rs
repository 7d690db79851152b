//! CloverVille WASM - Client-Side Page Core
//!
//! Loads `village.json` and renders the CloverVille community page:
//! - Green actions, trade offers, and communal tasks into their containers
//! - Community-points progress bar and decorative CO₂ pie
//! - Mobile navigation toggle
//!
//! A load failure of any kind leaves the page in its static markup defaults;
//! the condition is logged to the browser console and never shown to the
//! viewer.
//!
//! ## Usage in JavaScript
//!
//! ```javascript
//! import init from 'cloverville-wasm';
//!
//! // Module start wires the navigation and kicks off the data load.
//! await init();
//! ```
//!
//! ## Build
//!
//! ```bash
//! wasm-pack build --target web --out-dir pkg
//! ```

pub mod escape;
pub mod loader;
pub mod model;
pub mod render;
pub mod widgets;

#[cfg(target_arch = "wasm32")]
pub mod dom;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

// Initialize panic hook for better error messages in browser console
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Entry point: runs once when the module is instantiated, after the host
/// document has finished parsing.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    init_page();
}

/// Wire the page: navigation first, then the async load-and-render pipeline.
///
/// Exported separately for host pages that instantiate the module without
/// running the start hook. Calling it again re-runs the whole pipeline;
/// rendering is idempotent for identical data.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn init_page() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };

    dom::wire_navigation(&document);

    wasm_bindgen_futures::spawn_local(async move {
        // The single suspension point of the page; everything after it runs
        // to completion without interleaving.
        let outcome = loader::try_load_village_data().await;
        dom::apply_outcome(&document, outcome);
    });
}

/// Get the WASM module version
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
