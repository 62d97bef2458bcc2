//! Structured completion client
//!
//! The single boundary to the remote model: send a prompt pair with a target
//! schema, validate what comes back, and retry within the configured bound.
//! Every call is fresh; nothing is cached between calls.

use std::time::Duration;
use tracing::debug;

use super::provider::{CompletionRequest, SharedProvider};
use super::retry::{RetryPolicy, retry_with_backoff};
use super::timeout::with_timeout;
use super::validation::validate_response;
use crate::constants::{llm as llm_constants, network as net_constants};
use crate::schema::StructuredOutput;
use crate::types::Result;

/// Read-only client handle; safe to share across concurrent requests
#[derive(Clone)]
pub struct StructuredClient {
    provider: SharedProvider,
    temperature: f32,
    retry: RetryPolicy,
    timeout: Duration,
}

impl StructuredClient {
    pub fn new(provider: SharedProvider) -> Self {
        Self {
            provider,
            temperature: llm_constants::DEFAULT_TEMPERATURE,
            retry: RetryPolicy::default(),
            timeout: Duration::from_secs(net_constants::DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Request an instance of `T`. Each attempt re-issues the full prompt.
    pub async fn complete<T: StructuredOutput>(&self, system: &str, user: &str) -> Result<T> {
        let schema = T::json_schema();
        let request = CompletionRequest {
            system,
            user,
            schema: &schema,
            schema_name: T::NAME,
            temperature: self.temperature,
        };
        let operation = format!("{} completion", T::NAME);

        retry_with_backoff(&self.retry, &operation, || async {
            let response = with_timeout(self.timeout, self.provider.complete(&request), &operation)
                .await?;

            debug!(
                "{} from {}/{}: {} tokens in {}ms",
                T::NAME,
                response.metadata.provider,
                response.metadata.model,
                response.usage.total(),
                response.timing.total_ms
            );

            validate_response::<T>(response.content)
        })
        .await
    }
}
