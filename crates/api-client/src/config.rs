//! Client configuration.
//!
//! A [`ClientConfig`] is fixed when the client is built and never changes
//! afterwards. Construction is the only place configuration is validated.

use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Request deadline used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Errors raised while building a client.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The base URL is not an absolute `http`/`https` URL.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The rejected value.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The request timeout is zero.
    #[error("timeout must be greater than zero")]
    ZeroTimeout,

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),
}

/// Immutable connection settings for an [`crate::EmotionClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    timeout: Duration,
}

impl ClientConfig {
    /// Creates a configuration, stripping trailing slashes from `base_url`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidBaseUrl`] if `base_url` does not parse as an
    /// absolute `http` or `https` URL; [`ConfigError::ZeroTimeout`] if
    /// `timeout` is zero.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ConfigError> {
        let raw = base_url.into();
        let base_url = raw.trim().trim_end_matches('/').to_string();

        let parsed = Url::parse(&base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                url: raw,
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        if timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(Self { base_url, timeout })
    }

    /// Returns the base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the per-request deadline.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Joins `path` (which starts with `/`) onto the base URL.
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
