//! Conversation controller for the chat panel.
//!
//! DESIGN
//! ======
//! One `Conversation` per mounted widget. It owns the message list, the
//! draft input, and the busy flag for the single in-flight turn:
//!
//! ```text
//! Idle --begin_submit--> Sending --complete--> Idle
//! ```
//!
//! A turn is split into `begin_submit` and `complete` so a UI can hold the
//! state in a signal or `RefCell` without keeping it borrowed across the
//! network call. [`submit`] drives both halves over a `RefCell`.
//!
//! Failures never escape: a transport error or an error status becomes a
//! visible assistant apology, and the busy flag is cleared on every path.

#[cfg(test)]
#[path = "conversation_test.rs"]
mod conversation_test;

use std::cell::RefCell;

use serde_json::Value;
use wire::{Message, RelayRequest, Role};

use crate::net::relay::{RelayReply, RelayTransport, TransportError};

/// Shown when the relay answered but no reply field carried any text.
pub const REPLY_FALLBACK: &str = "Sorry, I couldn't process that request.";

/// Shown when the relay could not be reached or reported a failure.
pub const CONNECTIVITY_APOLOGY: &str =
    "I apologize, but I'm having trouble connecting right now. Please try again in a moment.";

/// Reply body fields checked, in order, for the assistant's text.
pub const REPLY_FIELDS: [&str; 5] = ["content", "output", "response", "message", "text"];

/// Message list and request lifecycle for one widget session.
#[derive(Debug, Default)]
pub struct Conversation {
    messages: Vec<Message>,
    input: String,
    busy: bool,
    next_seq: u64,
}

impl Conversation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// `true` while a turn is in flight; input should be disabled.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Whether the panel shows the typing dots under the user's message.
    #[must_use]
    pub fn show_typing_indicator(&self) -> bool {
        self.busy && self.messages.last().is_some_and(|m| m.role == Role::User)
    }

    /// Start a turn for `text`.
    ///
    /// Returns `None` without touching state when `text` is blank or a turn
    /// is already in flight. Otherwise appends the user message, clears the
    /// draft, marks the conversation busy, and returns the request carrying
    /// the whole conversation.
    pub fn begin_submit(&mut self, text: &str) -> Option<RelayRequest> {
        if self.busy || text.trim().is_empty() {
            return None;
        }

        let id = self.next_id("user");
        self.messages.push(Message::new(id, Role::User, text));
        self.input.clear();
        self.busy = true;

        Some(RelayRequest { messages: self.messages.clone() })
    }

    /// Finish the in-flight turn with the relay's outcome.
    ///
    /// Returns the appended assistant message, or `None` if no turn was in
    /// flight.
    pub fn complete(&mut self, outcome: Result<RelayReply, TransportError>) -> Option<&Message> {
        if !self.busy {
            log::warn!("conversation: completion without a pending turn ignored");
            return None;
        }

        let message = match outcome {
            Ok(reply) if reply.is_success() => {
                let content = reply_content(&reply.body).unwrap_or(REPLY_FALLBACK);
                Message::new(self.next_id("assistant"), Role::Assistant, content)
            }
            Ok(reply) => {
                let error = reply.body.get("error").and_then(Value::as_str).unwrap_or("");
                log::warn!("conversation: relay returned status {}: {error}", reply.status);
                self.apology()
            }
            Err(e) => {
                log::warn!("conversation: relay unreachable: {e}");
                self.apology()
            }
        };

        self.busy = false;
        self.messages.push(message);
        self.messages.last()
    }

    fn apology(&mut self) -> Message {
        Message::new(self.next_id("error"), Role::Assistant, CONNECTIVITY_APOLOGY)
    }

    fn next_id(&mut self, prefix: &str) -> String {
        let id = format!("{prefix}-{}", self.next_seq);
        self.next_seq += 1;
        id
    }
}

/// First non-empty string among [`REPLY_FIELDS`] in a relay reply body.
#[must_use]
pub fn reply_content(body: &Value) -> Option<&str> {
    REPLY_FIELDS
        .iter()
        .filter_map(|field| body.get(*field).and_then(Value::as_str))
        .find(|text| !text.is_empty())
}

/// Run one full turn for `text` against `transport`.
///
/// Returns `false` when the submission was rejected (blank text or a turn
/// already in flight). The `RefCell` is never borrowed across the await, so
/// the UI can keep reading the conversation while the request is pending.
pub async fn submit<T>(conversation: &RefCell<Conversation>, transport: &T, text: &str) -> bool
where
    T: RelayTransport + ?Sized,
{
    let Some(request) = conversation.borrow_mut().begin_submit(text) else {
        return false;
    };

    let outcome = transport.send(&request).await;
    conversation.borrow_mut().complete(outcome);
    true
}
