//! Relay configuration parsed from environment variables.
//!
//! `main` reads the environment once and hands the resulting [`RelayConfig`]
//! to `AppState`; nothing else in the crate touches `std::env`.

pub const DEFAULT_WEBHOOK_URL: &str =
    "https://techlo-design-solutions.app.n8n.cloud/webhook/9cd82bc0-b150-4c28-b814-c779aa005d2f";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_WEBHOOK_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_WEBHOOK_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_WEBHOOK_MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("N8N_WEBHOOK_URL is set but empty")]
    EmptyWebhookUrl,
    #[error("invalid boolean for {var}: {value:?}")]
    InvalidBool { var: String, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WebhookTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for WebhookTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_WEBHOOK_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_WEBHOOK_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub webhook_url: String,
    pub port: u16,
    pub timeouts: WebhookTimeouts,
    /// Reject non-2xx webhook replies instead of normalizing their bodies.
    pub strict_status: bool,
    /// Largest webhook reply body read before the call is treated as failed.
    pub max_reply_bytes: usize,
}

impl RelayConfig {
    /// Config pointing at `webhook_url` with every other setting at its default.
    #[must_use]
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            port: DEFAULT_PORT,
            timeouts: WebhookTimeouts::default(),
            strict_status: false,
            max_reply_bytes: DEFAULT_WEBHOOK_MAX_BODY_BYTES,
        }
    }

    /// Build typed relay config from environment variables.
    ///
    /// Optional:
    /// - `N8N_WEBHOOK_URL`: built-in workflow URL when absent
    /// - `PORT`: default 3000
    /// - `WEBHOOK_REQUEST_TIMEOUT_SECS`: default 30
    /// - `WEBHOOK_CONNECT_TIMEOUT_SECS`: default 10
    /// - `WEBHOOK_STRICT_STATUS`: default false
    /// - `WEBHOOK_MAX_BODY_BYTES`: default 1 MiB
    ///
    /// # Errors
    ///
    /// Returns an error if the webhook URL is blank or the strict flag is not
    /// a recognizable boolean.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`RelayConfig::from_env`] but reading through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`RelayConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let webhook_url = match lookup("N8N_WEBHOOK_URL") {
            Some(raw) if raw.trim().is_empty() => return Err(ConfigError::EmptyWebhookUrl),
            Some(raw) => raw.trim().to_string(),
            None => DEFAULT_WEBHOOK_URL.to_string(),
        };

        let port = parse_or(&lookup, "PORT", DEFAULT_PORT);
        let timeouts = WebhookTimeouts {
            request_secs: parse_or(&lookup, "WEBHOOK_REQUEST_TIMEOUT_SECS", DEFAULT_WEBHOOK_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_or(&lookup, "WEBHOOK_CONNECT_TIMEOUT_SECS", DEFAULT_WEBHOOK_CONNECT_TIMEOUT_SECS),
        };

        let max_reply_bytes = parse_or(&lookup, "WEBHOOK_MAX_BODY_BYTES", DEFAULT_WEBHOOK_MAX_BODY_BYTES);

        let strict_status = match lookup("WEBHOOK_STRICT_STATUS") {
            None => false,
            Some(raw) => {
                parse_bool(&raw).ok_or_else(|| ConfigError::InvalidBool { var: "WEBHOOK_STRICT_STATUS".into(), value: raw })?
            }
        };

        Ok(Self { port, timeouts, strict_status, max_reply_bytes, ..Self::new(webhook_url) })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    lookup(key)
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
