//! Error taxonomy and retry-policy types for emotion analysis.
//!
//! [`EmotionError`] is the single failure channel of every analysis call. It is
//! a closed set of five variants: a caller either sent bad input, was rate
//! limited, got a non-success HTTP status, ran out of time, or hit a transport
//! problem.
//!
//! [`RetryPolicy`] is advisory. The client never retries on its own; callers
//! that want back-off read it from the error and schedule the next attempt.

use std::error::Error as StdError;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Retry semantics
// ---------------------------------------------------------------------------

/// Whether an error condition is safe to retry and, if so, after what delay.
///
/// ## Rules
///
/// - `Retryable`: rate-limit responses, timeouts, transport failures, and
///   `5xx` API errors.
/// - `NonRetryable`: validation failures and `4xx` API errors other than `429`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RetryPolicy {
    /// The operation may be retried.
    Retryable {
        /// Minimum back-off before the next attempt, derived from the
        /// `Retry-After` header. `None` means apply the caller's own schedule.
        after: Option<Duration>,
    },
    /// Retrying with the same input will fail the same way.
    NonRetryable,
}

// ---------------------------------------------------------------------------
// Error kinds
// ---------------------------------------------------------------------------

/// Payload-free tag for an [`EmotionError`] variant.
///
/// Handy for logging fields, metrics labels, and exit-code mapping where the
/// variant payload is irrelevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// See [`EmotionError::Validation`].
    Validation,
    /// See [`EmotionError::RateLimit`].
    RateLimit,
    /// See [`EmotionError::Api`].
    Api,
    /// See [`EmotionError::Timeout`].
    Timeout,
    /// See [`EmotionError::Network`].
    Network,
}

impl ErrorKind {
    /// Returns the snake_case name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::RateLimit => "rate_limit",
            Self::Api => "api",
            Self::Timeout => "timeout",
            Self::Network => "network",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Every way an emotion analysis call can fail.
#[derive(Debug, Error)]
pub enum EmotionError {
    /// Caller input violates a client-side constraint.
    ///
    /// Produced before any network traffic; the request is never sent.
    #[error("{message}")]
    Validation {
        /// Name of the offending input field (`"text"` or `"texts"`).
        field: String,
        /// Human-readable description of the violation.
        message: String,
    },

    /// The server answered `429 Too Many Requests`.
    #[error("{message}")]
    RateLimit {
        /// Seconds to wait, from an integer `Retry-After` header.
        retry_after: Option<u64>,
        /// Human-readable description.
        message: String,
    },

    /// The server answered with any other non-success status.
    #[error("{message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body (may be empty).
        body: String,
        /// Message extracted from the body, or a generic status message.
        message: String,
    },

    /// No response arrived within the configured deadline.
    #[error("request timed out after {}ms", .timeout.as_millis())]
    Timeout {
        /// The configured deadline.
        timeout: Duration,
    },

    /// Transport failure or any other failure not classified above.
    #[error("{message}")]
    Network {
        /// Human-readable description.
        message: String,
        /// Underlying cause, when one is available.
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
}

impl EmotionError {
    /// Creates a [`EmotionError::Validation`] for `field`.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates a [`EmotionError::Network`] wrapping `source`.
    pub fn network<E>(message: impl Into<String>, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Network {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Returns the payload-free kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } => ErrorKind::Validation,
            Self::RateLimit { .. } => ErrorKind::RateLimit,
            Self::Api { .. } => ErrorKind::Api,
            Self::Timeout { .. } => ErrorKind::Timeout,
            Self::Network { .. } => ErrorKind::Network,
        }
    }

    /// Returns the human-readable message.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Returns the offending field of a validation error.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Returns the HTTP status code of an API or rate-limit error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::RateLimit { .. } => Some(429),
            _ => None,
        }
    }

    /// Returns the `Retry-After` seconds of a rate-limit error.
    pub fn retry_after(&self) -> Option<u64> {
        match self {
            Self::RateLimit { retry_after, .. } => *retry_after,
            _ => None,
        }
    }

    /// Returns the configured deadline of a timeout error, in milliseconds.
    pub fn timeout_ms(&self) -> Option<u64> {
        match self {
            Self::Timeout { timeout } => Some(timeout.as_millis() as u64),
            _ => None,
        }
    }

    /// Classifies this error for callers implementing their own retry loop.
    pub fn retry_policy(&self) -> RetryPolicy {
        match self {
            Self::Validation { .. } => RetryPolicy::NonRetryable,
            Self::RateLimit { retry_after, .. } => RetryPolicy::Retryable {
                after: retry_after.map(Duration::from_secs),
            },
            Self::Api { status, .. } if *status >= 500 => RetryPolicy::Retryable { after: None },
            Self::Api { .. } => RetryPolicy::NonRetryable,
            Self::Timeout { .. } | Self::Network { .. } => RetryPolicy::Retryable { after: None },
        }
    }
}
