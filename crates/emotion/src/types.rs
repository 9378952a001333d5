//! Result value types for emotion analysis.
//!
//! These are the public shapes callers receive. They serialise with camelCase
//! field names (`primaryEmotion`, `allEmotions`) so JSON output matches the
//! documented public result shape rather than the remote service's wire schema.
//!
//! `confidence` and `score` are expected to lie in `[0.0, 1.0]`. The values come
//! from the remote service and are not range-checked here.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Single-text results
// ---------------------------------------------------------------------------

/// One emotion label and its score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionScore {
    /// Emotion label (e.g. `"joy"`, `"sadness"`).
    pub emotion: String,
    /// Score in `[0.0, 1.0]`.
    pub score: f64,
}

impl EmotionScore {
    /// Creates a new [`EmotionScore`].
    pub fn new(emotion: impl Into<String>, score: f64) -> Self {
        Self {
            emotion: emotion.into(),
            score,
        }
    }
}

impl std::fmt::Display for EmotionScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {:.4}", self.emotion, self.score)
    }
}

// ---------------------------------------------------------------------------

/// Analysis result for one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionResult {
    /// The highest-confidence emotion label.
    pub primary_emotion: String,
    /// Confidence of the primary emotion, in `[0.0, 1.0]`.
    pub confidence: f64,
    /// Every scored emotion, in the order the service returned them.
    pub all_emotions: Vec<EmotionScore>,
}

// ---------------------------------------------------------------------------
// Batch results
// ---------------------------------------------------------------------------

/// Analysis results for a batch of texts.
///
/// `results[i]` belongs to the `i`-th input text. `count` always equals
/// `results.len()`; the only constructor enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchEmotionResult {
    /// Per-text results, in input order.
    pub results: Vec<EmotionResult>,
    /// Number of results.
    pub count: usize,
}

impl BatchEmotionResult {
    /// Creates a batch result, deriving `count` from `results`.
    pub fn new(results: Vec<EmotionResult>) -> Self {
        let count = results.len();
        Self { results, count }
    }

    /// Returns `true` if the batch holds no results.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
