//! WebAssembly bindings for the portfolio page behaviors
//!
//! This crate wires the state machines from `folio-core` to the browser DOM:
//! the header navigation, the hero typewriter, scroll reveal, stat counters,
//! the project carousel and the photo lightbox.
//!
//! # Example Usage (JavaScript)
//!
//! ```javascript
//! import loadWasm, { initWithConfig } from './folio_wasm.js';
//!
//! await loadWasm();
//! initWithConfig({
//!     typewriter: { phrases: ['Software Engineer', 'Photographer'] },
//!     lightbox: { swipeThresholdPx: 40 },
//! });
//! ```
//!
//! Every behavior looks up its elements through the configured selectors and
//! stays dormant when they are missing, so one bundle serves every page.

#![warn(missing_docs)]

mod dom;
mod features;
mod frame;
mod lock;
mod site;
mod viewport;

use folio_core::SiteConfig;
use gloo::events::EventListener;
use wasm_bindgen::prelude::*;

pub use features::{CarouselControls, LightboxControls, Navigation, RevealEffect, TypewriterEffect};
pub use site::Site;

/// Install the panic hook and route `tracing` output to the browser console.
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
}

/// Wire every page behavior with the default configuration.
#[wasm_bindgen]
pub fn init() -> Result<(), JsValue> {
    schedule(SiteConfig::default())
}

/// Wire every page behavior with a partial configuration object.
///
/// Omitted fields keep their defaults; `undefined` and `null` mean "all
/// defaults".
#[wasm_bindgen(js_name = initWithConfig)]
pub fn init_with_config(config: JsValue) -> Result<(), JsValue> {
    let config = if config.is_undefined() || config.is_null() {
        SiteConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Invalid site config: {e}")))?
    };
    schedule(config)
}

/// Whether the page behaviors have been wired.
#[wasm_bindgen(js_name = isInitialized)]
pub fn is_initialized() -> bool {
    site::is_installed()
}

/// Install now, or once the DOM is parsed if the document is still loading.
fn schedule(config: SiteConfig) -> Result<(), JsValue> {
    let doc = dom::document()?;
    if doc.ready_state() != "loading" {
        return site::install_once(&config);
    }
    tracing::debug!("document loading, deferring until DOMContentLoaded");
    EventListener::once(&doc, "DOMContentLoaded", move |_| {
        if let Err(err) = site::install_once(&config) {
            tracing::error!("deferred init failed: {err:?}");
        }
    })
    .forget();
    Ok(())
}
