//! CLI Common Utilities
//!
//! Configuration overrides, service construction and file I/O shared by the
//! command handlers.

use std::fs;
use std::path::{Path, PathBuf};

use crate::ai::{StructuredClient, create_provider};
use crate::analysis::{AnalysisService, ArchitectureAnalyst, ReportComposer, SubjectText};
use crate::config::{Config, ConfigLoader, OutputFormat};
use crate::types::{ArchError, Result};

/// Flags that override the loaded configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub provider: Option<String>,
    pub model: Option<String>,
    pub notes: Option<String>,
}

/// Load configuration and apply command-line overrides
pub fn load_config(overrides: &ConfigOverrides) -> Result<Config> {
    let mut config = ConfigLoader::load()?;

    if let Some(ref provider) = overrides.provider {
        config.llm.provider = provider.clone();
    }
    if let Some(ref model) = overrides.model {
        config.llm.model = model.clone();
    }
    if let Some(ref notes) = overrides.notes {
        config.analysis.analyst_notes = Some(notes.clone());
    }

    config.validate()?;
    Ok(config)
}

/// Wire provider, client, analyst and composer from configuration
pub fn build_service(config: &Config) -> Result<AnalysisService> {
    let provider = create_provider(&config.llm.provider_config())?;
    let client = StructuredClient::new(provider)
        .with_temperature(config.llm.temperature)
        .with_retry(config.analysis.retry_policy())
        .with_timeout(config.llm.timeout());
    let analyst = ArchitectureAnalyst::new(client, &config.analysis);
    let composer = ReportComposer::new(analyst, &config.analysis)?;

    Ok(AnalysisService::new(composer))
}

/// Read a subject file as bytes and decode it
pub fn read_subject(path: &Path) -> Result<SubjectText> {
    let bytes = fs::read(path).map_err(|e| {
        ArchError::MalformedInput(format!("cannot read {}: {}", path.display(), e))
    })?;
    SubjectText::from_bytes(bytes)
}

/// Output path for a run: explicit flag, else the configured path with the
/// extension of the chosen format
pub fn resolve_output_path(
    explicit: Option<PathBuf>,
    configured: &Path,
    format: OutputFormat,
) -> PathBuf {
    explicit.unwrap_or_else(|| configured.with_extension(format.extension()))
}

pub fn write_document(path: &Path, content: &str) -> Result<()> {
    let write_error = |source| ArchError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(path, content).map_err(write_error)
}
