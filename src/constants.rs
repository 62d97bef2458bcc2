//! Global Constants
//!
//! Centralized constants for configuration and tuning.
//! All magic numbers should be defined here with documentation.

/// Subject text budgets (characters, not bytes)
pub mod budget {
    /// Maximum characters of subject text embedded in a single-subject prompt
    pub const MAX_SUBJECT_CHARS: usize = 90_000;

    /// Maximum characters of each subject in a comparative prompt
    pub const MAX_COMPARISON_CHARS: usize = 45_000;
}

/// Retry constants for structured completions
pub mod retry {
    /// Attempts per structured completion (first call included)
    pub const DEFAULT_MAX_ATTEMPTS: usize = 3;

    /// Base delay for exponential backoff (milliseconds)
    pub const BASE_DELAY_MS: u64 = 500;

    /// Maximum delay between retries (milliseconds)
    pub const MAX_DELAY_MS: u64 = 8_000;

    /// Backoff multiplier
    pub const BACKOFF_FACTOR: f32 = 2.0;
}

/// Network constants
pub mod network {
    /// Default timeout for one completion request (seconds)
    pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

    /// Default timeout for health checks (seconds)
    pub const HEALTH_CHECK_TIMEOUT_SECS: u64 = 15;
}

/// Report constants
pub mod report {
    /// Confidence attached to a successful comprehensive report.
    /// Not derived from any signal; configurable via `analysis.confidence_level`.
    pub const DEFAULT_CONFIDENCE: f64 = 0.94;

    /// Default subject file read by `archscope analyze`
    pub const DEFAULT_INPUT_FILE: &str = "Session_details.txt";

    /// Default report file written by `archscope analyze`
    pub const DEFAULT_OUTPUT_FILE: &str = "System_Architecture_Analysis.md";
}

/// LLM defaults
pub mod llm {
    pub const DEFAULT_PROVIDER: &str = "openai";
    pub const DEFAULT_MODEL: &str = "gpt-4o";
    pub const DEFAULT_TEMPERATURE: f32 = 0.2;
    pub const DEFAULT_MAX_TOKENS: usize = 8192;
}
