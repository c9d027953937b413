use std::sync::Arc;

use title_llm::{LLMProvider, OpenAIProvider};

use crate::config::ServerConfig;

pub struct AppState {
    pub llm: Arc<dyn LLMProvider>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig, llm: Arc<dyn LLMProvider>) -> Self {
        Self {
            llm,
            config: Arc::new(config),
        }
    }

    /// State backed by the OpenAI-compatible provider described by `config`.
    pub fn from_config(config: ServerConfig) -> Self {
        tracing::info!(
            base_url = %config.llm_base_url,
            model = %config.model,
            "Creating LLM provider"
        );

        let llm: Arc<dyn LLMProvider> = Arc::new(
            OpenAIProvider::new(config.api_key.clone())
                .with_base_url(config.llm_base_url.clone())
                .with_model(config.model.clone()),
        );

        Self::new(config, llm)
    }
}
