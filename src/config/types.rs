//! Configuration Types
//!
//! All configuration structures with sensible defaults.
//! Supports global (platform config dir) and project (.archscope/) level configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::ai::{ProviderConfig, RetryPolicy};
use crate::constants::{budget, llm as llm_constants, network, report, retry};
use crate::types::{ArchError, Result};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// LLM provider settings
    pub llm: LlmConfig,

    /// Stage execution settings
    pub analysis: AnalysisConfig,

    /// Report output settings
    pub output: OutputConfig,
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    /// Returns `ArchError::Config` on validation failure.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(ArchError::Config(format!(
                "LLM temperature must be between 0.0 and 2.0, got {}",
                self.llm.temperature
            )));
        }

        if self.llm.timeout_secs == 0 {
            return Err(ArchError::Config(
                "LLM timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.llm.model.trim().is_empty() {
            return Err(ArchError::Config("LLM model must not be empty".to_string()));
        }

        if self.analysis.max_attempts == 0 {
            return Err(ArchError::Config(
                "analysis.max_attempts must be at least 1".to_string(),
            ));
        }

        if self.analysis.max_subject_chars == 0 || self.analysis.max_comparison_chars == 0 {
            return Err(ArchError::Config(
                "analysis character budgets must be greater than 0".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.analysis.confidence_level) {
            return Err(ArchError::Config(format!(
                "analysis.confidence_level must be between 0.0 and 1.0, got {}",
                self.analysis.confidence_level
            )));
        }

        Ok(())
    }
}

// =============================================================================
// LLM Configuration
// =============================================================================

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Provider name: "openai" or "ollama"
    pub provider: String,

    pub model: String,

    /// API key; never written back out. Falls back to OPENAI_API_KEY.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// Custom endpoint base URL
    pub api_base: Option<String>,

    /// Per-attempt request timeout in seconds
    pub timeout_secs: u64,

    pub temperature: f32,

    pub max_tokens: usize,
}

impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_base", &self.api_base)
            .field("timeout_secs", &self.timeout_secs)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: llm_constants::DEFAULT_PROVIDER.to_string(),
            model: llm_constants::DEFAULT_MODEL.to_string(),
            api_key: None,
            api_base: None,
            timeout_secs: network::DEFAULT_TIMEOUT_SECS,
            temperature: llm_constants::DEFAULT_TEMPERATURE,
            max_tokens: llm_constants::DEFAULT_MAX_TOKENS,
        }
    }
}

impl LlmConfig {
    pub fn provider_config(&self) -> ProviderConfig {
        ProviderConfig {
            provider: self.provider.clone(),
            model: self.model.clone(),
            timeout_secs: self.timeout_secs,
            api_key: self.api_key.clone(),
            api_base: self.api_base.clone(),
            max_tokens: self.max_tokens,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

// =============================================================================
// Analysis Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Attempts per structured completion, first call included
    pub max_attempts: usize,

    pub retry_base_delay_ms: u64,

    pub retry_max_delay_ms: u64,

    pub retry_jitter: bool,

    /// Character budget for single-subject prompts
    pub max_subject_chars: usize,

    /// Character budget for each subject of a comparison
    pub max_comparison_chars: usize,

    /// Confidence attached to comprehensive reports
    pub confidence_level: f64,

    /// Language the model is asked to write its findings in
    pub output_language: String,

    pub analyst_notes: Option<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_attempts: retry::DEFAULT_MAX_ATTEMPTS,
            retry_base_delay_ms: retry::BASE_DELAY_MS,
            retry_max_delay_ms: retry::MAX_DELAY_MS,
            retry_jitter: true,
            max_subject_chars: budget::MAX_SUBJECT_CHARS,
            max_comparison_chars: budget::MAX_COMPARISON_CHARS,
            confidence_level: report::DEFAULT_CONFIDENCE,
            output_language: "English".to_string(),
            analyst_notes: None,
        }
    }
}

impl AnalysisConfig {
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts,
            base_delay: Duration::from_millis(self.retry_base_delay_ms),
            max_delay: Duration::from_millis(self.retry_max_delay_ms),
            jitter: self.retry_jitter,
        }
    }
}

// =============================================================================
// Output Configuration
// =============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "md",
            OutputFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Unknown output format: {}. Valid values: markdown, json",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Report file path
    pub path: PathBuf,

    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(report::DEFAULT_OUTPUT_FILE),
            format: OutputFormat::Markdown,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
