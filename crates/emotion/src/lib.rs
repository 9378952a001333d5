//! Domain types for emotion analysis.
//!
//! This crate contains the result types, the client-side input rules, the error
//! taxonomy, and the [`EmotionAnalyzer`] port trait. Infrastructure crates
//! implement the trait; they never add domain rules.
//!
//! ## Architectural Layer
//!
//! **Business logic + port definitions.** This crate has no I/O dependencies.
//! It defines *what* an analysis call accepts and returns; `api-client`
//! defines *how* the remote service is reached.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | Result value types (`EmotionScore`, `EmotionResult`, `BatchEmotionResult`) |
//! | [`validation`] | Word-count and batch-size checks |
//! | [`errors`] | `EmotionError`, `ErrorKind`, and `RetryPolicy` |
//! | [`identifiers`] | Per-request `RequestId` |
//! | [`analyzer`] | The `EmotionAnalyzer` port trait |

pub mod analyzer;
pub mod errors;
pub mod identifiers;
pub mod types;
pub mod validation;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use analyzer::EmotionAnalyzer;
pub use errors::{EmotionError, ErrorKind, RetryPolicy};
pub use identifiers::RequestId;
pub use types::{BatchEmotionResult, EmotionResult, EmotionScore};
pub use validation::{
    require_text, validate_batch, validate_text, word_count, MAX_BATCH_SIZE, MAX_WORDS_PER_TEXT,
};
