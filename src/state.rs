//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! is immutable after construction: the relay config and the webhook client
//! are fixed at startup and every request is handled independently.

use std::sync::Arc;

use crate::config::RelayConfig;
use crate::webhook::Webhook;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub webhook: Arc<dyn Webhook>,
}

impl AppState {
    #[must_use]
    pub fn new(config: RelayConfig, webhook: Arc<dyn Webhook>) -> Self {
        Self { config: Arc::new(config), webhook }
    }
}


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
