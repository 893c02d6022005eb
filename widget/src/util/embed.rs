//! Host-page signaling for the iframe embedding.
//!
//! The widget tells the page embedding it when to close, collapse, expand, or
//! resize the iframe by posting an [`EmbedEvent`] to `window.parent`. The
//! channel is one-directional; the widget never listens for host messages.
//! Requires a browser environment.

use wire::EmbedEvent;

/// Post `event` to the parent window with target origin `*`.
///
/// Returns whether the event was handed to the host. Always `false` outside
/// the browser or when the widget is not framed.
pub fn post_to_host(event: EmbedEvent) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let Ok(Some(parent)) = window.parent() else {
            return false;
        };
        let Ok(json) = serde_json::to_string(&event) else {
            return false;
        };
        let Ok(payload) = js_sys::JSON::parse(&json) else {
            return false;
        };
        if parent.post_message(&payload, "*").is_err() {
            log::warn!("embed: postMessage to host failed for {json}");
            return false;
        }
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::debug!("embed: no host window for {event:?}");
        false
    }
}

/// Forward an optional shell transition event to the host.
///
/// Returns whether an event was delivered.
pub fn notify_host(event: Option<EmbedEvent>) -> bool {
    event.is_some_and(post_to_host)
}

#[cfg(all(test, not(feature = "hydrate")))]
#[path = "embed_test.rs"]
mod embed_test;
