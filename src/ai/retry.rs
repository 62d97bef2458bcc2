//! Bounded retry with exponential backoff.
//!
//! One combinator shared by every stage: run the operation up to
//! `max_attempts` times, sleeping between attempts, and stop early on errors
//! that another attempt cannot fix.

use backon::{ExponentialBuilder, Retryable};
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::warn;

use crate::constants::retry as retry_constants;
use crate::types::{ArchError, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    /// Total attempts, first call included
    pub max_attempts: usize,
    pub base_delay: Duration,
    pub max_delay: Duration,
    pub jitter: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: retry_constants::DEFAULT_MAX_ATTEMPTS,
            base_delay: Duration::from_millis(retry_constants::BASE_DELAY_MS),
            max_delay: Duration::from_millis(retry_constants::MAX_DELAY_MS),
            jitter: true,
        }
    }
}

impl RetryPolicy {
    fn backoff(&self) -> ExponentialBuilder {
        let builder = ExponentialBuilder::default()
            .with_min_delay(self.base_delay)
            .with_max_delay(self.max_delay)
            .with_factor(retry_constants::BACKOFF_FACTOR)
            .with_max_times(self.max_attempts.saturating_sub(1));

        if self.jitter {
            builder.with_jitter()
        } else {
            builder
        }
    }
}

/// Run `op` under `policy`.
///
/// Returns the first success. A recoverable error that survives every attempt
/// is wrapped in `ArchError::RetriesExhausted`; a non-recoverable error is
/// returned as-is after the attempt that produced it.
pub async fn retry_with_backoff<T, F, Fut>(
    policy: &RetryPolicy,
    operation: &str,
    mut op: F,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let attempts = AtomicUsize::new(0);

    let result = (|| {
        attempts.fetch_add(1, Ordering::Relaxed);
        op()
    })
    .retry(policy.backoff())
    .sleep(tokio::time::sleep)
    .when(|e: &ArchError| e.is_recoverable())
    .notify(|err: &ArchError, delay: Duration| {
        warn!(
            "{} attempt {} failed: {}. Retrying in {:?}",
            operation,
            attempts.load(Ordering::Relaxed),
            err,
            delay
        );
    })
    .await;

    match result {
        Ok(value) => Ok(value),
        Err(err) if err.is_recoverable() => Err(ArchError::RetriesExhausted {
            operation: operation.to_string(),
            attempts: attempts.load(Ordering::Relaxed),
            last_error: Box::new(err),
        }),
        Err(err) => Err(err),
    }
}
