//! Emotion API HTTP adapter.
//!
//! Implements the [`emotion::EmotionAnalyzer`] trait over the remote
//! emotion-classification REST service.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** URL construction, JSON request formatting, response
//! parsing, deadline handling, and HTTP status classification all live here.
//! The [`emotion`] crate sees only [`emotion::EmotionAnalyzer`].
//!
//! ## Endpoints
//!
//! | Operation | Endpoint | Request | Response |
//! |-----------|----------|---------|----------|
//! | [`EmotionClient::analyze`] | `POST /api/v1/analyze` | `{text}` | `{primary_emotion, confidence, all_emotions}` |
//! | [`EmotionClient::analyze_batch`] | `POST /api/v1/analyze/batch` | `{texts}` | `{results, count}` |
//!
//! ## Failure mapping
//!
//! | Outcome | Error |
//! |---------|-------|
//! | Input rejected locally | [`emotion::EmotionError::Validation`] |
//! | `429` | [`emotion::EmotionError::RateLimit`] (integer `Retry-After` attached) |
//! | Any other non-`2xx` | [`emotion::EmotionError::Api`] |
//! | Deadline expired | [`emotion::EmotionError::Timeout`] |
//! | Transport failure or undecodable body | [`emotion::EmotionError::Network`] |
//!
//! The client never retries; see [`emotion::EmotionError::retry_policy`].

mod client;
mod config;
mod executor;
mod wire;

pub use client::{EmotionClient, EmotionClientBuilder, ANALYZE_BATCH_PATH, ANALYZE_PATH};
pub use config::{ClientConfig, ConfigError, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
