//! Output rendering for analysis results.

use std::fmt::Write as _;

use emotion::{BatchEmotionResult, EmotionResult};

use crate::args::OutputFormat;

pub fn render_result(result: &EmotionResult, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(result),
        OutputFormat::Text => {
            let mut out = String::new();
            write_result(&mut out, result, "");
            Ok(out)
        }
    }
}

pub fn render_batch(batch: &BatchEmotionResult, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(batch),
        OutputFormat::Text => {
            let mut out = String::new();
            for (index, result) in batch.results.iter().enumerate() {
                let _ = writeln!(out, "[{index}]");
                write_result(&mut out, result, "  ");
            }
            let noun = if batch.count == 1 { "result" } else { "results" };
            let _ = write!(out, "{} {noun}", batch.count);
            Ok(out)
        }
    }
}

fn write_result(out: &mut String, result: &EmotionResult, indent: &str) {
    let _ = writeln!(
        out,
        "{indent}primary: {} (confidence {:.4})",
        result.primary_emotion, result.confidence
    );
    let width = result
        .all_emotions
        .iter()
        .map(|s| s.emotion.len())
        .max()
        .unwrap_or(0);
    for score in &result.all_emotions {
        let _ = writeln!(
            out,
            "{indent}  {:<width$}  {:.4}",
            score.emotion, score.score
        );
    }
}
