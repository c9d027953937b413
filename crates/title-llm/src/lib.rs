pub mod masking;
pub mod provider;
pub mod providers;

pub use provider::{CompletionOptions, LLMError, LLMProvider, Result};
pub use providers::OpenAIProvider;
pub use title_core::Prompt;
