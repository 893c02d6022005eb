//! # widget
//!
//! Client side of the embeddable chat widget: the conversation controller,
//! launcher/panel state, display text normalization, the relay transport,
//! and host-page signaling for the iframe embedding.
//!
//! Everything that needs a browser is gated behind the `hydrate` feature;
//! the rest is plain state that renders the same under any UI layer.

pub mod net;
pub mod state;
pub mod util;

/// Install the browser panic hook and console logger when the WASM module
/// loads.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn init_browser() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::warn!("widget: console logger already installed");
    }
}
