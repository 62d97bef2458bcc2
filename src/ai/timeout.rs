//! Per-attempt timeouts for remote calls.
//!
//! Every completion attempt is bounded so that a hanging endpoint turns into
//! a retryable `ArchError::Timeout` instead of blocking the pipeline.
//!
//! ```ignore
//! use crate::ai::timeout::with_timeout;
//!
//! let response = with_timeout(
//!     Duration::from_secs(120),
//!     provider.complete(&request),
//!     "ArchitectureResult completion",
//! ).await?;
//! ```

use std::future::Future;
use std::time::Duration;

use crate::types::{ArchError, Result};

/// Execute an async operation with a timeout
pub async fn with_timeout<T, F>(timeout: Duration, future: F, operation_name: &str) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(timeout, future).await {
        Ok(result) => result,
        Err(_) => Err(ArchError::timeout(operation_name, timeout)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_with_timeout_success() {
        let result = with_timeout(
            Duration::from_secs(1),
            async { Ok::<_, ArchError>(42) },
            "test operation",
        )
        .await;
        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_with_timeout_expires() {
        let result = with_timeout(
            Duration::from_millis(10),
            async {
                tokio::time::sleep(Duration::from_secs(1)).await;
                Ok::<_, ArchError>(42)
            },
            "slow operation",
        )
        .await;
        let err = result.unwrap_err();
        assert!(matches!(err, ArchError::Timeout { .. }));
        assert!(err.is_recoverable());
    }

    #[tokio::test]
    async fn test_with_timeout_passes_inner_error() {
        let result: Result<()> = with_timeout(
            Duration::from_secs(1),
            async { Err(ArchError::Config("bad".into())) },
            "config",
        )
        .await;
        assert!(matches!(result.unwrap_err(), ArchError::Config(_)));
    }
}
