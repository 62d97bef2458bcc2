//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. Global config (platform config dir, e.g. ~/.config/archscope/config.toml)
//! 3. Project config (.archscope/config.toml)
//! 4. Environment variables (ARCHSCOPE_* prefix)

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::types::Config;
use crate::types::{ArchError, Result};

const APP_NAME: &str = "archscope";
const ENV_PREFIX: &str = "ARCHSCOPE_";

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with full resolution chain using Figment:
    /// defaults → global → project → env vars
    pub fn load() -> Result<Config> {
        let config: Config = Self::figment()
            .extract()
            .map_err(|e| ArchError::Config(format!("Configuration error: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a specific file only
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .extract()
            .map_err(|e| ArchError::Config(format!("Configuration error: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn figment() -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            debug!("Loading global config from: {}", global_path.display());
            figment = figment.merge(Toml::file(&global_path));
        }

        let project_path = Self::project_config_path();
        if project_path.exists() {
            debug!("Loading project config from: {}", project_path.display());
            figment = figment.merge(Toml::file(&project_path));
        }

        // ARCHSCOPE_LLM_TIMEOUT_SECS -> llm.timeout_secs
        figment.merge(
            Env::prefixed(ENV_PREFIX).map(|key| key.as_str().replacen('_', ".", 1).into()),
        )
    }

    // =========================================================================
    // Path Management
    // =========================================================================

    /// Get path to global config directory
    pub fn global_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get path to global config file
    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_dir().map(|dir| dir.join("config.toml"))
    }

    /// Get project data directory
    pub fn project_dir() -> PathBuf {
        PathBuf::from(".archscope")
    }

    /// Get path to project config file
    pub fn project_config_path() -> PathBuf {
        Self::project_dir().join("config.toml")
    }

    // =========================================================================
    // Config Commands
    // =========================================================================

    /// Render the effective configuration as toml, json or yaml
    pub fn render(config: &Config, format: &str) -> Result<String> {
        match format {
            "json" => Ok(serde_json::to_string_pretty(config)?),
            "yaml" => serde_yaml::to_string(config).map_err(|e| ArchError::Config(e.to_string())),
            "toml" => toml::to_string_pretty(config).map_err(|e| ArchError::Config(e.to_string())),
            other => Err(ArchError::Config(format!(
                "Unknown config format: {}. Valid values: toml, json, yaml",
                other
            ))),
        }
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Write a default config file; returns the path written.
    /// Existing files are kept unless `force` is set.
    pub fn init(global: bool, force: bool) -> Result<PathBuf> {
        let config_path = if global {
            Self::global_config_path().ok_or_else(|| {
                ArchError::Config("Cannot determine global config directory".to_string())
            })?
        } else {
            Self::project_config_path()
        };

        if config_path.exists() && !force {
            info!("Config exists: {}", config_path.display());
            return Ok(config_path);
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_path, Self::default_config_toml())?;
        info!("Created config: {}", config_path.display());

        Ok(config_path)
    }

    // =========================================================================
    // Internal
    // =========================================================================

    fn default_config_toml() -> &'static str {
        r#"# archscope configuration
# Project settings in .archscope/config.toml override the global file.
# Environment variables (ARCHSCOPE_LLM_MODEL, ...) override both.

[llm]
provider = "openai"
model = "gpt-4o"
timeout_secs = 120
temperature = 0.2
max_tokens = 8192
# api_key is read from OPENAI_API_KEY when unset
# api_base = "https://api.openai.com/v1"

[analysis]
max_attempts = 3
retry_base_delay_ms = 500
retry_max_delay_ms = 8000
retry_jitter = true
max_subject_chars = 90000
max_comparison_chars = 45000
confidence_level = 0.94
output_language = "English"

[output]
path = "System_Architecture_Analysis.md"
format = "markdown"
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use figment::Jail;

    fn load_in_jail() -> figment::error::Result<Config> {
        ConfigLoader::load().map_err(|e| e.to_string().into())
    }

    #[test]
    fn test_load_defaults() {
        Jail::expect_with(|_jail| {
            let config = load_in_jail()?;
            assert_eq!(config.analysis.max_attempts, 3);
            assert_eq!(config.output.format, OutputFormat::Markdown);
            Ok(())
        });
    }

    #[test]
    fn test_project_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_dir(".archscope")?;
            jail.create_file(
                ".archscope/config.toml",
                r#"
                [llm]
                model = "gpt-4o-mini"

                [analysis]
                output_language = "Arabic"
                "#,
            )?;

            let config = load_in_jail()?;
            assert_eq!(config.llm.model, "gpt-4o-mini");
            assert_eq!(config.analysis.output_language, "Arabic");
            assert_eq!(config.llm.provider, "openai");
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_project_file() {
        Jail::expect_with(|jail| {
            jail.create_dir(".archscope")?;
            jail.create_file(".archscope/config.toml", "[llm]\nmodel = \"from-file\"\n")?;
            jail.set_env("ARCHSCOPE_LLM_MODEL", "from-env");
            jail.set_env("ARCHSCOPE_LLM_TIMEOUT_SECS", "30");
            jail.set_env("ARCHSCOPE_ANALYSIS_MAX_ATTEMPTS", "5");

            let config = load_in_jail()?;
            assert_eq!(config.llm.model, "from-env");
            assert_eq!(config.llm.timeout_secs, 30);
            assert_eq!(config.analysis.max_attempts, 5);
            Ok(())
        });
    }

    #[test]
    fn test_invalid_values_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("ARCHSCOPE_ANALYSIS_CONFIDENCE_LEVEL", "1.7");
            assert!(ConfigLoader::load().is_err());
            Ok(())
        });
    }

    #[test]
    fn test_init_project_writes_loadable_file() {
        Jail::expect_with(|_jail| {
            let path = ConfigLoader::init(false, false).map_err(|e| e.to_string())?;
            assert_eq!(path, PathBuf::from(".archscope/config.toml"));

            let config = ConfigLoader::load_from_file(&path).map_err(|e| e.to_string())?;
            assert_eq!(config.llm.model, "gpt-4o");
            assert_eq!(
                config.output.path,
                PathBuf::from("System_Architecture_Analysis.md")
            );
            Ok(())
        });
    }

    #[test]
    fn test_init_keeps_existing_without_force() {
        Jail::expect_with(|jail| {
            jail.create_dir(".archscope")?;
            jail.create_file(".archscope/config.toml", "[llm]\nmodel = \"mine\"\n")?;

            ConfigLoader::init(false, false).map_err(|e| e.to_string())?;
            let config = load_in_jail()?;
            assert_eq!(config.llm.model, "mine");
            Ok(())
        });
    }

    #[test]
    fn test_render_formats() {
        let config = Config::default();
        assert!(ConfigLoader::render(&config, "toml").unwrap().contains("[llm]"));
        assert!(ConfigLoader::render(&config, "json").unwrap().contains("\"llm\""));
        assert!(ConfigLoader::render(&config, "yaml").unwrap().contains("llm:"));
        assert!(ConfigLoader::render(&config, "ini").is_err());
    }
}
