//! The public client facade.

use std::time::Duration;

use async_trait::async_trait;
use emotion::{
    validate_batch, validate_text, BatchEmotionResult, EmotionAnalyzer, EmotionError,
    EmotionResult,
};
use tracing::debug;

use crate::executor::RequestExecutor;
use crate::wire::{AnalyzeRequest, AnalyzeResponse, BatchAnalyzeRequest, BatchAnalyzeResponse};
use crate::{ClientConfig, ConfigError, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

/// Path of the single-text endpoint, relative to the base URL.
pub const ANALYZE_PATH: &str = "/api/v1/analyze";

/// Path of the batch endpoint, relative to the base URL.
pub const ANALYZE_BATCH_PATH: &str = "/api/v1/analyze/batch";

const DEFAULT_USER_AGENT: &str = concat!("emotion-api-client/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the remote emotion-classification service.
///
/// Cloning is cheap and clones share the underlying connection handle. Calls
/// are independent of each other; the only shared state is the immutable
/// [`ClientConfig`].
#[derive(Debug, Clone)]
pub struct EmotionClient {
    executor: RequestExecutor,
}

impl EmotionClient {
    /// Creates a client from an already-validated configuration.
    ///
    /// # Errors
    ///
    /// [`ConfigError::HttpClient`] if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        Self::with_user_agent(config, DEFAULT_USER_AGENT)
    }

    /// Returns a builder starting from the default configuration.
    pub fn builder() -> EmotionClientBuilder {
        EmotionClientBuilder::default()
    }

    fn with_user_agent(config: ClientConfig, user_agent: &str) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(ConfigError::HttpClient)?;
        Ok(Self {
            executor: RequestExecutor::new(http, config),
        })
    }

    /// Returns the configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        self.executor.config()
    }

    /// Analyzes one text.
    ///
    /// The text is validated and trimmed before it is sent.
    ///
    /// # Errors
    ///
    /// Any [`EmotionError`] variant; validation failures are raised before a
    /// request is made.
    pub async fn analyze(&self, text: &str) -> Result<EmotionResult, EmotionError> {
        let text = validate_text(text)?;
        debug!(chars = text.len(), "analyzing text");

        let response: AnalyzeResponse = self
            .executor
            .post_json(ANALYZE_PATH, &AnalyzeRequest { text })
            .await?;
        Ok(response.into())
    }

    /// Analyzes up to [`emotion::MAX_BATCH_SIZE`] texts in one request.
    ///
    /// Every text is validated and trimmed before the request is sent; the
    /// first invalid text aborts the call. Results are in input order.
    ///
    /// # Errors
    ///
    /// Any [`EmotionError`] variant; validation failures are raised before a
    /// request is made.
    pub async fn analyze_batch<S: AsRef<str>>(
        &self,
        texts: &[S],
    ) -> Result<BatchEmotionResult, EmotionError> {
        let texts = validate_batch(texts)?;
        debug!(count = texts.len(), "analyzing batch");

        let response: BatchAnalyzeResponse = self
            .executor
            .post_json(ANALYZE_BATCH_PATH, &BatchAnalyzeRequest { texts: &texts })
            .await?;
        Ok(response.into())
    }
}

#[async_trait]
impl EmotionAnalyzer for EmotionClient {
    async fn analyze(&self, text: &str) -> Result<EmotionResult, EmotionError> {
        EmotionClient::analyze(self, text).await
    }

    async fn analyze_batch(&self, texts: &[String]) -> Result<BatchEmotionResult, EmotionError> {
        EmotionClient::analyze_batch(self, texts).await
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Builder for [`EmotionClient`].
///
/// ```no_run
/// use std::time::Duration;
///
/// # fn main() -> Result<(), api_client::ConfigError> {
/// let client = api_client::EmotionClient::builder()
///     .base_url("https://emotions.example.com/")
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// assert_eq!(client.config().base_url(), "https://emotions.example.com");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmotionClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl EmotionClientBuilder {
    /// Sets the service base URL. Trailing slashes are stripped.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the per-request deadline.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Overrides the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Validates the settings and builds the client.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`].
    pub fn build(self) -> Result<EmotionClient, ConfigError> {
        let config = ClientConfig::new(
            self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
            self.timeout.unwrap_or(DEFAULT_TIMEOUT),
        )?;
        let user_agent = self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
        EmotionClient::with_user_agent(config, user_agent)
    }
}
