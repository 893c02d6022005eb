//! Outbound client for the external workflow webhook.
//!
//! The webhook takes `{ "input": <text> }` and answers with an arbitrary
//! body. This layer only moves bytes: it reports the status and raw text and
//! leaves interpretation to [`crate::normalize`]. Only transport-level
//! problems are errors here; an HTTP error status is still a reply.

use std::time::Duration;

use wire::WebhookInput;

use crate::config::{DEFAULT_WEBHOOK_MAX_BODY_BYTES, WebhookTimeouts};

/// Errors produced while talking to the webhook.
#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request could not be sent or timed out before a response arrived.
    #[error("webhook request failed: {0}")]
    Request(String),

    /// The response arrived but its body could not be read.
    #[error("webhook body read failed: {0}")]
    ReadBody(String),

    /// The response body grew past the configured limit.
    #[error("webhook body exceeds {limit} bytes")]
    BodyTooLarge { limit: usize },
}

/// Status and raw body of a webhook reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookReply {
    pub status: u16,
    pub body: String,
}

impl WebhookReply {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Single-turn call into the workflow engine.
#[async_trait::async_trait]
pub trait Webhook: Send + Sync {
    async fn post_input(&self, input: &str) -> Result<WebhookReply, WebhookError>;
}

/// [`Webhook`] backed by `reqwest`.
pub struct ReqwestWebhook {
    http: reqwest::Client,
    url: String,
    max_body_bytes: usize,
}

impl ReqwestWebhook {
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(url: impl Into<String>, timeouts: WebhookTimeouts) -> Result<Self, WebhookError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| WebhookError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, url: url.into(), max_body_bytes: DEFAULT_WEBHOOK_MAX_BODY_BYTES })
    }

    /// Cap the reply body size; longer replies fail with
    /// [`WebhookError::BodyTooLarge`].
    #[must_use]
    pub fn with_max_body_bytes(mut self, limit: usize) -> Self {
        self.max_body_bytes = limit;
        self
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl Webhook for ReqwestWebhook {
    async fn post_input(&self, input: &str) -> Result<WebhookReply, WebhookError> {
        let response = self
            .http
            .post(&self.url)
            .json(&WebhookInput { input })
            .send()
            .await
            .map_err(|e| WebhookError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let body = read_capped(response, self.max_body_bytes).await?;
        Ok(WebhookReply { status, body })
    }
}

/// Read the reply body chunk by chunk, failing as soon as it passes `limit`.
async fn read_capped(mut response: reqwest::Response, limit: usize) -> Result<String, WebhookError> {
    let too_large = WebhookError::BodyTooLarge { limit };
    if response
        .content_length()
        .is_some_and(|len| usize::try_from(len).map_or(true, |len| len > limit))
    {
        return Err(too_large);
    }

    let mut bytes = Vec::new();
    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| WebhookError::ReadBody(e.to_string()))?
    {
        if bytes.len() + chunk.len() > limit {
            return Err(too_large);
        }
        bytes.extend_from_slice(&chunk);
    }
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
#[path = "webhook_test.rs"]
mod tests;
