//! Shared wire model for the chat relay.
//!
//! This crate owns the JSON shapes exchanged by the `widget` client, the
//! relay server, and the embedding host page. Everything here is plain data;
//! transport and normalization live with their callers.

use serde::{Deserialize, Serialize};

/// Error returned by [`decode_request`].
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// The body was not valid JSON or did not match the request shape.
    #[error("malformed request body: {0}")]
    Json(#[from] serde_json::Error),
    /// The request carried no messages, so there is nothing to relay.
    #[error("conversation is empty")]
    EmptyConversation,
}

// =============================================================================
// MESSAGES
// =============================================================================

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One entry in a conversation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Session-unique identifier such as `user-0` or `assistant-1`.
    ///
    /// Optional on input: the relay only reads `content`.
    #[serde(default)]
    pub id: String,
    pub role: Role,
    pub content: String,
}

impl Message {
    #[must_use]
    pub fn new(id: impl Into<String>, role: Role, content: impl Into<String>) -> Self {
        Self { id: id.into(), role, content: content.into() }
    }
}

// =============================================================================
// RELAY EXCHANGE
// =============================================================================

/// Body of `POST /api/chat`: the full conversation so far.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayRequest {
    pub messages: Vec<Message>,
}

impl RelayRequest {
    /// Content of the most recent message, which is the only part relayed.
    #[must_use]
    pub fn latest_content(&self) -> Option<&str> {
        self.messages.last().map(|m| m.content.as_str())
    }
}

/// Successful relay reply. `role` is always [`Role::Assistant`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayResponse {
    pub role: Role,
    pub content: String,
}

impl RelayResponse {
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }
}

/// Failure body returned alongside a non-success status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

/// Payload sent to the external workflow webhook.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookInput<'a> {
    pub input: &'a str,
}

/// Decode and validate a relay request body.
///
/// # Errors
///
/// Returns [`WireError::Json`] for bodies that are not a `RelayRequest` and
/// [`WireError::EmptyConversation`] when `messages` is empty.
pub fn decode_request(bytes: &[u8]) -> Result<RelayRequest, WireError> {
    let request: RelayRequest = serde_json::from_slice(bytes)?;
    if request.messages.is_empty() {
        return Err(WireError::EmptyConversation);
    }
    Ok(request)
}

// =============================================================================
// EMBED EVENTS
// =============================================================================

/// Notification posted from the widget iframe to its host page.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EmbedEvent {
    Close,
    Expand,
    Collapse,
    Resize { height: f64 },
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
