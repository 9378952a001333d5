use std::path::PathBuf;

use api_client::DEFAULT_BASE_URL;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// Pretty-printed JSON in the public result shape
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable log lines
    Pretty,
    /// One JSON object per event
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "emotion")]
#[command(about = "Classify the emotional content of text with the remote emotion API", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Base URL of the emotion API service
    #[arg(long, env = "EMOTION_API_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// Request timeout in milliseconds
    #[arg(
        long,
        env = "EMOTION_API_TIMEOUT_MS",
        default_value_t = 30_000,
        value_parser = clap::value_parser!(u64).range(1..),
        global = true
    )]
    pub timeout_ms: u64,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub output: OutputFormat,

    /// Log format (logs go to stderr; filter with RUST_LOG)
    #[arg(long, value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a single text
    Analyze {
        /// Text to analyze; reads stdin when omitted or `-`
        text: Option<String>,
    },

    /// Analyze up to 10 texts in one request
    Batch {
        /// Texts to analyze
        #[arg(conflicts_with = "file")]
        texts: Vec<String>,

        /// Read texts from a file, one per non-blank line
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}
