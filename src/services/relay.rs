//! Relay service: widget conversation → webhook input → display reply.
//!
//! DESIGN
//! ======
//! The widget posts its whole conversation, but the workflow behind the
//! webhook is single-turn: only the latest message's content is forwarded as
//! `{ "input": ... }`. Whatever comes back is normalized into one string.
//!
//! ERROR HANDLING
//! ==============
//! Only an empty conversation and transport failures are errors. Odd reply
//! shapes are absorbed by normalization. A non-2xx webhook status is logged
//! and normalized anyway unless the relay runs with `strict_status`.

use tracing::{debug, info, warn};
use wire::{RelayRequest, RelayResponse, WireError};

use crate::normalize::normalize_reply;
use crate::webhook::{Webhook, WebhookError};

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("malformed request: {0}")]
    Malformed(#[from] WireError),
    #[error("webhook unavailable: {0}")]
    Webhook(#[from] WebhookError),
    #[error("webhook returned status {status}")]
    WebhookStatus { status: u16 },
    /// The request body could not be read, e.g. it exceeded the size limit.
    #[error("request body rejected: {message}")]
    BodyRejected { status: u16, message: String },
}

/// Forward the latest message to the webhook and normalize its reply.
///
/// # Errors
///
/// Returns [`RelayError::Malformed`] for an empty conversation,
/// [`RelayError::Webhook`] when the webhook cannot be reached, and
/// [`RelayError::WebhookStatus`] for non-2xx replies when `strict_status`
/// is set.
pub async fn relay(
    webhook: &dyn Webhook,
    request: &RelayRequest,
    strict_status: bool,
) -> Result<RelayResponse, RelayError> {
    let Some(input) = request.latest_content() else {
        return Err(WireError::EmptyConversation.into());
    };
    info!(history_len = request.messages.len(), input_len = input.len(), "relay: forwarding to webhook");

    let reply = webhook.post_input(input).await.inspect_err(|e| {
        warn!(error = %e, "relay: webhook call failed");
    })?;
    info!(status = reply.status, body_len = reply.body.len(), "relay: webhook replied");
    debug!(body = %reply.body, "relay: raw webhook body");

    if !reply.is_success() {
        if strict_status {
            return Err(RelayError::WebhookStatus { status: reply.status });
        }
        warn!(status = reply.status, "relay: webhook error status; normalizing body anyway");
    }

    let content = normalize_reply(&reply.body);
    debug!(content_len = content.len(), "relay: normalized reply");
    Ok(RelayResponse::assistant(content))
}

#[cfg(test)]
#[path = "relay_test.rs"]
mod tests;
