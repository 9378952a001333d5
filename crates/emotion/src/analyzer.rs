//! The analyzer port.
//!
//! [`EmotionAnalyzer`] is what consumers depend on. The HTTP implementation
//! lives in the `api-client` crate; tests and alternative backends supply
//! their own.

use async_trait::async_trait;

use crate::{BatchEmotionResult, EmotionError, EmotionResult};

/// Classifies the emotional content of text.
///
/// Implementations validate input with [`crate::validation`] before doing any
/// work, and report every failure through [`EmotionError`].
#[async_trait]
pub trait EmotionAnalyzer: Send + Sync {
    /// Analyzes one text.
    async fn analyze(&self, text: &str) -> Result<EmotionResult, EmotionError>;

    /// Analyzes up to [`crate::validation::MAX_BATCH_SIZE`] texts in one call.
    ///
    /// Results are returned in input order.
    async fn analyze_batch(&self, texts: &[String]) -> Result<BatchEmotionResult, EmotionError>;
}
