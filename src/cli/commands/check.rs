//! Check Command
//!
//! Validates configuration and pings the configured provider.

use std::time::Duration;
use tokio::runtime::Runtime;

use crate::ai::{create_provider, with_timeout};
use crate::cli::ui::Output;
use crate::cli::util::{ConfigOverrides, load_config};
use crate::constants::network::HEALTH_CHECK_TIMEOUT_SECS;
use crate::types::{ArchError, ErrorCategory, LlmError, Result};

pub fn run(overrides: &ConfigOverrides) -> Result<()> {
    let out = Output::new();

    let config = load_config(overrides)?;
    out.success("Configuration is valid");

    let provider = create_provider(&config.llm.provider_config())?;
    out.info(&format!(
        "Provider: {} / {}",
        provider.name(),
        provider.model()
    ));

    let rt = Runtime::new()?;
    let healthy = rt.block_on(with_timeout(
        Duration::from_secs(HEALTH_CHECK_TIMEOUT_SECS),
        provider.health_check(),
        "provider health check",
    ))?;

    if !healthy {
        return Err(ArchError::Llm(LlmError::with_provider(
            ErrorCategory::Network,
            "endpoint did not report healthy",
            provider.name(),
        )));
    }

    out.success("Provider is reachable");
    Ok(())
}
