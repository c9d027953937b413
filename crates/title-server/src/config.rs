//! Configuration for the title service
//!
//! Values come from command-line flags with environment variable fallbacks
//! (a `.env` file is loaded first by the binary). The resulting
//! [`ServerConfig`] is built once before the listener starts and is never
//! mutated afterwards.

use std::fmt;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;
use title_core::prompt::{DEFAULT_STYLE, DEFAULT_SYSTEM_TEMPLATE, DEFAULT_USER_TEMPLATE};
use title_core::{PromptTemplate, DEFAULT_MIN_TITLE_LEN};
use title_llm::providers::openai::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use title_llm::CompletionOptions;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_LANGUAGE: &str = "English";
pub const DEFAULT_TITLE_COUNT: u32 = 10;
pub const DEFAULT_MAX_TITLE_COUNT: u32 = 50;
pub const DEFAULT_TEMPERATURE: f32 = 0.8;
pub const DEFAULT_MAX_TOKENS: u32 = 200;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing required configuration: OPENAI_API_KEY")]
    MissingApiKey,

    #[error("Invalid configuration for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Parser, Clone)]
#[command(name = "title-server")]
#[command(about = "HTTP service that generates short titles for a topic")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, env = "DEBUG", default_value = "false")]
    pub debug: bool,

    /// Listen address
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Listen port
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Provider API key
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// OpenAI-compatible API base URL
    #[arg(long, env = "LLM_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub llm_base_url: String,

    /// Model identifier
    #[arg(long, env = "LLM_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Sampling temperature
    #[arg(long, env = "LLM_TEMPERATURE", default_value_t = DEFAULT_TEMPERATURE)]
    pub temperature: f32,

    /// Maximum output tokens per completion
    #[arg(long, env = "LLM_MAX_TOKENS", default_value_t = DEFAULT_MAX_TOKENS)]
    pub max_tokens: u32,

    /// Seconds to wait for the model before giving up
    #[arg(long, env = "LLM_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Shared secret clients must present (header X-Api-Secret or body field `secret`)
    #[arg(long, env = "SHARED_SECRET", hide_env_values = true)]
    pub shared_secret: Option<String>,

    /// Language used when a request does not name one
    #[arg(long, env = "DEFAULT_LANGUAGE", default_value = DEFAULT_LANGUAGE)]
    pub default_language: String,

    /// Title count used when a request does not give one
    #[arg(long, env = "DEFAULT_TITLE_COUNT", default_value_t = DEFAULT_TITLE_COUNT)]
    pub default_count: u32,

    /// Largest count a request may ask for
    #[arg(long, env = "MAX_TITLE_COUNT", default_value_t = DEFAULT_MAX_TITLE_COUNT)]
    pub max_count: u32,

    /// Lines shorter than this are dropped from the model output
    #[arg(long, env = "MIN_TITLE_LENGTH", default_value_t = DEFAULT_MIN_TITLE_LEN)]
    pub min_title_len: usize,

    /// Title style inserted for `{style}`
    #[arg(long, env = "TITLE_STYLE", default_value = DEFAULT_STYLE)]
    pub style: String,

    /// System prompt template
    #[arg(long, env = "SYSTEM_PROMPT", default_value = DEFAULT_SYSTEM_TEMPLATE)]
    pub system_prompt: String,

    /// User prompt template
    #[arg(long, env = "USER_PROMPT", default_value = DEFAULT_USER_TEMPLATE)]
    pub user_prompt: String,
}

#[derive(Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub api_key: String,
    pub llm_base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub request_timeout: Duration,
    pub shared_secret: Option<String>,
    pub default_language: String,
    pub default_count: u32,
    pub max_count: u32,
    pub min_title_len: usize,
    pub prompt: PromptTemplate,
}

impl ServerConfig {
    /// Defaults for everything except the API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            api_key: api_key.into(),
            llm_base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            shared_secret: None,
            default_language: DEFAULT_LANGUAGE.to_string(),
            default_count: DEFAULT_TITLE_COUNT,
            max_count: DEFAULT_MAX_TITLE_COUNT,
            min_title_len: DEFAULT_MIN_TITLE_LEN,
            prompt: PromptTemplate::default(),
        }
    }

    pub fn with_shared_secret(mut self, secret: impl Into<String>) -> Self {
        self.shared_secret = Some(secret.into());
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn completion_options(&self) -> CompletionOptions {
        CompletionOptions::default()
            .with_model(self.model.clone())
            .with_temperature(self.temperature)
            .with_max_tokens(self.max_tokens)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        if self.default_count == 0 {
            return Err(invalid("default_count", "must be at least 1"));
        }
        if self.default_count > self.max_count {
            return Err(invalid(
                "default_count",
                format!("{} exceeds max_count {}", self.default_count, self.max_count),
            ));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(invalid("temperature", "must be between 0.0 and 2.0"));
        }
        if self.request_timeout.is_zero() {
            return Err(invalid("timeout", "must be greater than zero"));
        }
        if self.user_prompt_is_blank() {
            return Err(invalid("user_prompt", "must not be empty"));
        }
        Ok(())
    }

    fn user_prompt_is_blank(&self) -> bool {
        self.prompt.user.trim().is_empty()
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl TryFrom<Cli> for ServerConfig {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let api_key = non_blank(cli.api_key).ok_or(ConfigError::MissingApiKey)?;

        let config = ServerConfig {
            host: cli.host,
            port: cli.port,
            api_key,
            llm_base_url: cli.llm_base_url,
            model: cli.model,
            temperature: cli.temperature,
            max_tokens: cli.max_tokens,
            request_timeout: Duration::from_secs(cli.timeout_secs),
            shared_secret: non_blank(cli.shared_secret),
            default_language: cli.default_language,
            default_count: cli.default_count,
            max_count: cli.max_count,
            min_title_len: cli.min_title_len,
            prompt: PromptTemplate {
                system: cli.system_prompt,
                user: cli.user_prompt,
                style: cli.style,
            },
        };
        config.validate()?;
        Ok(config)
    }
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("api_key", &"[MASKED]")
            .field("llm_base_url", &self.llm_base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("request_timeout", &self.request_timeout)
            .field(
                "shared_secret",
                &self.shared_secret.as_ref().map(|_| "[MASKED]"),
            )
            .field("default_language", &self.default_language)
            .field("default_count", &self.default_count)
            .field("max_count", &self.max_count)
            .field("min_title_len", &self.min_title_len)
            .field("prompt", &self.prompt)
            .finish()
    }
}
