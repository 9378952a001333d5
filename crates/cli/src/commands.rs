//! Command handlers.
//!
//! Handlers take the analyzer as a trait object so they run unchanged against
//! the HTTP client or a test double.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use emotion::{require_text, EmotionAnalyzer, EmotionError, ErrorKind};
use tracing::info;

use crate::args::OutputFormat;
use crate::render::{render_batch, render_result};

/// Analyzes one text and returns the rendered output.
///
/// `None` means the text was not supplied; the caller has already tried stdin.
pub async fn analyze(
    analyzer: &dyn EmotionAnalyzer,
    text: Option<&str>,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let text = require_text(text)?;
    let result = analyzer.analyze(text).await?;
    info!(primary = %result.primary_emotion, confidence = result.confidence, "text analyzed");
    Ok(render_result(&result, format)?)
}

/// Analyzes a batch of texts and returns the rendered output.
pub async fn batch(
    analyzer: &dyn EmotionAnalyzer,
    texts: &[String],
    format: OutputFormat,
) -> anyhow::Result<String> {
    let batch = analyzer.analyze_batch(texts).await?;
    info!(count = batch.count, "batch analyzed");
    Ok(render_batch(&batch, format)?)
}

/// Resolves the `analyze` input: the argument itself, or stdin when the
/// argument is absent or `-`. Blank stdin counts as absent.
pub fn resolve_text(arg: Option<String>, mut stdin: impl Read) -> anyhow::Result<Option<String>> {
    match arg {
        Some(text) if text != "-" => Ok(Some(text)),
        _ => {
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .context("failed to read text from stdin")?;
            Ok(Some(buf).filter(|s| !s.trim().is_empty()))
        }
    }
}

/// Loads batch texts from a file, one per non-blank line.
pub fn read_texts_file(path: &Path) -> anyhow::Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read texts from {}", path.display()))?;
    Ok(parse_texts(&contents))
}

fn parse_texts(contents: &str) -> Vec<String> {
    contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Maps a failure to the process exit code.
///
/// Analysis failures get one code per [`ErrorKind`]; anything else (I/O,
/// configuration) exits with `1`.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<EmotionError>().map(EmotionError::kind) {
        Some(ErrorKind::Validation) => 2,
        Some(ErrorKind::RateLimit) => 3,
        Some(ErrorKind::Api) => 4,
        Some(ErrorKind::Timeout) => 5,
        Some(ErrorKind::Network) => 6,
        None => 1,
    }
}
