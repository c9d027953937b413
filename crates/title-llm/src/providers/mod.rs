//! LLM Providers
//!
//! Implementations of [`LLMProvider`](crate::LLMProvider) for concrete APIs.

pub mod openai;

pub use openai::OpenAIProvider;
