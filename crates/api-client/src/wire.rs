//! Wire schema of the remote service and its mapping onto the public types.
//!
//! The service speaks snake_case (`primary_emotion`, `all_emotions`). The
//! mapping is one-directional: wire responses become [`EmotionResult`]s, never
//! the reverse.

use emotion::{BatchEmotionResult, EmotionResult, EmotionScore};
use serde::{Deserialize, Serialize};
use tracing::warn;

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub(crate) struct AnalyzeRequest<'a> {
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct BatchAnalyzeRequest<'a> {
    pub texts: &'a [&'a str],
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// Score items share the public shape, so they deserialise straight into
/// [`EmotionScore`].
#[derive(Debug, Deserialize)]
pub(crate) struct AnalyzeResponse {
    pub primary_emotion: String,
    pub confidence: f64,
    pub all_emotions: Vec<EmotionScore>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BatchAnalyzeResponse {
    pub results: Vec<AnalyzeResponse>,
    #[serde(default)]
    pub count: Option<usize>,
}

impl From<AnalyzeResponse> for EmotionResult {
    fn from(wire: AnalyzeResponse) -> Self {
        Self {
            primary_emotion: wire.primary_emotion,
            confidence: wire.confidence,
            all_emotions: wire.all_emotions,
        }
    }
}

impl From<BatchAnalyzeResponse> for BatchEmotionResult {
    fn from(wire: BatchAnalyzeResponse) -> Self {
        let reported = wire.count;
        let batch = Self::new(wire.results.into_iter().map(EmotionResult::from).collect());
        if let Some(reported) = reported.filter(|&n| n != batch.count) {
            warn!(
                reported,
                actual = batch.count,
                "batch count reported by service does not match results"
            );
        }
        batch
    }
}
