//! Single-shot HTTP request execution.
//!
//! [`RequestExecutor::post_json`] sends one JSON `POST`, bounds it with the
//! configured deadline, and turns every outcome into either the decoded body
//! or an [`EmotionError`]. Nothing here retries.

use std::time::Instant;

use emotion::{EmotionError, RequestId};
use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info_span, warn, Instrument};

use crate::ClientConfig;

/// Body fields consulted, in order, for a server-supplied error message.
const ERROR_MESSAGE_FIELDS: [&str; 3] = ["detail", "message", "error"];

#[derive(Debug, Clone)]
pub(crate) struct RequestExecutor {
    http: reqwest::Client,
    config: ClientConfig,
}

impl RequestExecutor {
    pub(crate) fn new(http: reqwest::Client, config: ClientConfig) -> Self {
        Self { http, config }
    }

    pub(crate) fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Posts `payload` as JSON to `path` and decodes the success body as `R`.
    ///
    /// The send and the body read share one deadline. When it expires the
    /// request future is dropped, which aborts the connection and releases the
    /// timer together.
    pub(crate) async fn post_json<P, R>(&self, path: &str, payload: &P) -> Result<R, EmotionError>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request_id = RequestId::new_random();
        let span = info_span!("emotion_request", %request_id, endpoint = path);

        async move {
            let url = self.config.endpoint_url(path);
            let timeout = self.config.timeout();
            let started = Instant::now();
            debug!(%url, timeout_ms = timeout.as_millis() as u64, "dispatching request");

            let outcome = match tokio::time::timeout(timeout, self.exchange(&url, payload)).await {
                Ok(result) => result,
                Err(_elapsed) => Err(EmotionError::Timeout { timeout }),
            };

            let elapsed_ms = started.elapsed().as_millis() as u64;
            match &outcome {
                Ok(_) => debug!(elapsed_ms, "request completed"),
                Err(err) => warn!(elapsed_ms, kind = %err.kind(), error = %err, "request failed"),
            }
            outcome
        }
        .instrument(span)
        .await
    }

    async fn exchange<P, R>(&self, url: &str, payload: &P) -> Result<R, EmotionError>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        // `json` sets `Content-Type: application/json`.
        let response = self
            .http
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(rate_limit_error(response.headers()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status, body));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;
        serde_json::from_slice(&bytes)
            .map_err(|e| EmotionError::network(format!("failed to parse response body: {e}"), e))
    }

    fn transport_error(&self, err: reqwest::Error) -> EmotionError {
        if err.is_timeout() {
            return EmotionError::Timeout {
                timeout: self.config.timeout(),
            };
        }

        let context = if err.is_connect() {
            "connection failed"
        } else if err.is_body() || err.is_decode() {
            "failed to read response body"
        } else {
            "request failed"
        };
        EmotionError::network(format!("{context}: {err}"), err)
    }
}

fn rate_limit_error(headers: &HeaderMap) -> EmotionError {
    let retry_after = headers
        .get(RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok());

    let message = match retry_after {
        Some(seconds) => format!("rate limit exceeded, retry after {seconds} seconds"),
        None => "rate limit exceeded".to_string(),
    };
    EmotionError::RateLimit {
        retry_after,
        message,
    }
}

fn api_error(status: StatusCode, body: String) -> EmotionError {
    let message = error_message_from_body(&body)
        .unwrap_or_else(|| format!("request failed with status {}", status.as_u16()));
    EmotionError::Api {
        status: status.as_u16(),
        body,
        message,
    }
}

/// Pulls the first usable message out of a JSON error body.
///
/// Strings are taken as-is; structured values (e.g. a list of field errors in
/// `detail`) are rendered as compact JSON. Nulls and empty strings are skipped.
fn error_message_from_body(body: &str) -> Option<String> {
    let parsed: Value = serde_json::from_str(body).ok()?;
    ERROR_MESSAGE_FIELDS
        .iter()
        .filter_map(|field| parsed.get(field))
        .find_map(|value| match value {
            Value::Null => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        })
}
