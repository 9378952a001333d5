//! Client-side input validation.
//!
//! These checks run before any request is built. A failure here never reaches
//! the network. Texts are trimmed before they are counted, and the trimmed
//! slices are what callers should transmit.

use tracing::debug;

use crate::EmotionError;

/// Maximum number of whitespace-delimited words per text.
pub const MAX_WORDS_PER_TEXT: usize = 100;

/// Maximum number of texts per batch request.
pub const MAX_BATCH_SIZE: usize = 10;

const TEXT_FIELD: &str = "text";
const TEXTS_FIELD: &str = "texts";

/// Counts the non-empty whitespace-separated tokens in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Rejects a missing text.
///
/// Used by callers whose input is optional (e.g. a command-line argument)
/// before handing the value to [`validate_text`].
pub fn require_text(text: Option<&str>) -> Result<&str, EmotionError> {
    text.ok_or_else(|| EmotionError::validation(TEXT_FIELD, "text is required"))
}

/// Validates a single text and returns it trimmed.
///
/// # Errors
///
/// [`EmotionError::Validation`] with field `"text"` if the trimmed text is
/// empty or has more than [`MAX_WORDS_PER_TEXT`] words.
pub fn validate_text(text: &str) -> Result<&str, EmotionError> {
    check_text(text).map_err(|message| reject(TEXT_FIELD, message))
}

/// Validates a batch of texts and returns them trimmed, in input order.
///
/// Stops at the first invalid element; its zero-based index prefixes the
/// error message.
///
/// # Errors
///
/// [`EmotionError::Validation`] with field `"texts"` if the batch is empty or
/// larger than [`MAX_BATCH_SIZE`], or with field `"text"` for the first
/// element that fails [`validate_text`].
pub fn validate_batch<S: AsRef<str>>(texts: &[S]) -> Result<Vec<&str>, EmotionError> {
    if texts.is_empty() {
        return Err(reject(TEXTS_FIELD, "texts must not be empty".to_string()));
    }
    if texts.len() > MAX_BATCH_SIZE {
        return Err(reject(
            TEXTS_FIELD,
            format!(
                "texts exceeds maximum batch size: {} items (max {})",
                texts.len(),
                MAX_BATCH_SIZE
            ),
        ));
    }

    texts
        .iter()
        .enumerate()
        .map(|(index, text)| {
            check_text(text.as_ref())
                .map_err(|message| reject(TEXT_FIELD, format!("text at index {index}: {message}")))
        })
        .collect()
}

fn check_text(text: &str) -> Result<&str, String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err("text must not be empty".to_string());
    }

    let words = word_count(trimmed);
    if words > MAX_WORDS_PER_TEXT {
        return Err(format!(
            "text exceeds maximum word count: {words} words (max {MAX_WORDS_PER_TEXT})"
        ));
    }

    Ok(trimmed)
}

fn reject(field: &str, message: String) -> EmotionError {
    debug!(field, %message, "input rejected");
    EmotionError::validation(field, message)
}
