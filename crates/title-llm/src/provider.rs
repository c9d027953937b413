use async_trait::async_trait;
use thiserror::Error;
use title_core::Prompt;

#[derive(Error, Debug)]
pub enum LLMError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Provider returned no completion choices")]
    EmptyResponse,
}

pub type Result<T> = std::result::Result<T, LLMError>;

/// Sampling knobs for a single completion. `None` leaves the provider default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompletionOptions {
    pub model: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

impl CompletionOptions {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Run a single non-streaming completion and return the raw text.
    ///
    /// # Arguments
    /// * `prompt` - System instructions and user turn
    /// * `options` - Model override, temperature and output length cap
    async fn complete(&self, prompt: &Prompt, options: &CompletionOptions) -> Result<String>;
}
