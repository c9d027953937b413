use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use title_core::Prompt;

use crate::masking::mask_secret;
use crate::provider::{CompletionOptions, LLMError, LLMProvider, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

// ============================================================================
// Wire types (OpenAI-compatible chat completions, non-streaming)
// ============================================================================

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

// ============================================================================
// Provider
// ============================================================================

pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAIProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_body<'a>(
        &'a self,
        prompt: &'a Prompt,
        options: &'a CompletionOptions,
    ) -> ChatCompletionRequest<'a> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = prompt.system.as_deref() {
            messages.push(ChatMessage {
                role: "system",
                content: system,
            });
        }
        messages.push(ChatMessage {
            role: "user",
            content: &prompt.user,
        });

        ChatCompletionRequest {
            model: options.model.as_deref().unwrap_or(&self.model),
            messages,
            temperature: options.temperature,
            max_tokens: options.max_tokens,
        }
    }

    fn error_for_status(&self, status: StatusCode, body: &str) -> LLMError {
        let message = serde_json::from_str::<ApiErrorEnvelope>(body)
            .map(|envelope| envelope.error.message)
            .unwrap_or_else(|_| body.trim().to_string());
        let message = mask_secret(&message, &self.api_key);

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => LLMError::Auth(message),
            StatusCode::TOO_MANY_REQUESTS => LLMError::RateLimited(message),
            _ => LLMError::Api {
                status: status.as_u16(),
                message,
            },
        }
    }
}

#[async_trait]
impl LLMProvider for OpenAIProvider {
    async fn complete(&self, prompt: &Prompt, options: &CompletionOptions) -> Result<String> {
        let body = self.build_body(prompt, options);

        if options.model.is_some() {
            log::debug!(
                "OpenAI provider using override model '{}' (default: '{}')",
                body.model,
                self.model
            );
        }

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let error = self.error_for_status(status, &text);
            log::warn!("OpenAI completion failed: {}", error);
            return Err(error);
        }

        let completion: ChatCompletionResponse = serde_json::from_str(&text)?;

        // A choice with null or blank content is a valid, empty completion.
        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or(LLMError::EmptyResponse)?;

        Ok(choice.message.content.unwrap_or_default())
    }
}
