//! Transport from the widget to the relay endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Elsewhere: [`HttpRelay`] reports [`TransportError::Unavailable`], and
//! callers supply their own [`RelayTransport`].
//!
//! ERROR HANDLING
//! ==============
//! A reply with an error status is still `Ok`; the conversation decides what
//! a non-2xx status means. Only failures to reach the relay or to read its
//! JSON body are errors.

#![allow(clippy::unused_async)]

use serde_json::Value;
use wire::RelayRequest;

/// Default relay path, relative to the page hosting the widget.
pub const DEFAULT_ENDPOINT: &str = "/api/chat";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("relay request failed: {0}")]
    Request(String),
    #[error("relay response was not JSON: {0}")]
    Decode(String),
    #[error("relay transport unavailable outside the browser")]
    Unavailable,
}

/// Status and decoded JSON body of a relay reply.
#[derive(Clone, Debug, PartialEq)]
pub struct RelayReply {
    pub status: u16,
    pub body: Value,
}

impl RelayReply {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One round trip to the relay endpoint.
#[async_trait::async_trait(?Send)]
pub trait RelayTransport {
    async fn send(&self, request: &RelayRequest) -> Result<RelayReply, TransportError>;
}

/// [`RelayTransport`] that POSTs JSON to the relay over HTTP.
#[derive(Clone, Debug)]
pub struct HttpRelay {
    endpoint: String,
}

impl HttpRelay {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpRelay {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[async_trait::async_trait(?Send)]
impl RelayTransport for HttpRelay {
    async fn send(&self, request: &RelayRequest) -> Result<RelayReply, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .json(request)
                .map_err(|e| TransportError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| TransportError::Request(e.to_string()))?;
            let status = resp.status();
            let body = resp
                .json::<Value>()
                .await
                .map_err(|e| TransportError::Decode(e.to_string()))?;
            Ok(RelayReply { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(TransportError::Unavailable)
        }
    }
}

#[cfg(test)]
#[path = "relay_test.rs"]
mod relay_test;
