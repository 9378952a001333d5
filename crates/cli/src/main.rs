//! Emotion CLI entry point.
//!
//! This binary is the composition root. Responsibilities:
//!
//! 1. **Parse configuration**: flags with `EMOTION_API_URL` /
//!    `EMOTION_API_TIMEOUT_MS` environment fallbacks.
//! 2. **Wire observability**: configure `tracing-subscriber` with an
//!    `EnvFilter` (`RUST_LOG`, default `warn`) and a pretty or JSON formatter.
//!    All `tracing` spans and events emitted by every crate in the workspace
//!    flow through this layer. Logs go to stderr; results go to stdout.
//! 3. **Construct infrastructure**: build the [`api_client::EmotionClient`]
//!    and hand it to the command handlers as an [`emotion::EmotionAnalyzer`].
//! 4. **Report the outcome**: each [`emotion::ErrorKind`] exits with its own
//!    status code so scripts can tell a rate limit from a bad input.

mod args;
mod commands;
mod render;

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use api_client::EmotionClient;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::args::{Cli, Commands, LogFormat};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    match run(cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(commands::exit_code(&err))
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<String> {
    let client = EmotionClient::builder()
        .base_url(cli.base_url)
        .timeout(Duration::from_millis(cli.timeout_ms))
        .build()
        .context("invalid client configuration")?;
    tracing::debug!(base_url = client.config().base_url(), "client ready");

    match cli.command {
        Commands::Analyze { text } => {
            let text = commands::resolve_text(text, std::io::stdin().lock())?;
            commands::analyze(&client, text.as_deref(), cli.output).await
        }
        Commands::Batch { texts, file } => {
            let texts = match file {
                Some(path) => commands::read_texts_file(&path)?,
                None => texts,
            };
            commands::batch(&client, &texts, cli.output).await
        }
    }
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}
