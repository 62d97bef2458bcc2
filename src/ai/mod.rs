//! AI Integration Layer
//!
//! Everything that talks to the remote model: providers, prompt building,
//! response validation, and the bounded retry/timeout wrapper that turns
//! them into one `StructuredClient::complete` call.

pub mod client;
pub mod prompt;
pub mod provider;
pub mod retry;
pub mod timeout;
pub mod validation;

pub use client::StructuredClient;
pub use prompt::{PromptBuilder, PromptSection};
pub use provider::{
    CompletionRequest, ErrorCategory, ErrorClassifier, LlmError, LlmProvider, LlmResponse,
    OllamaProvider, OpenAiProvider, ProviderConfig, SharedProvider, TokenUsage, create_provider,
};
pub use retry::{RetryPolicy, retry_with_backoff};
pub use timeout::with_timeout;
pub use validation::{extract_json_from_response, validate_response};
