//! Analyze Command
//!
//! Reads the subject transcript, runs one stage (or the comprehensive
//! report) and writes the rendered document.
//!
//! Usage:
//!   archscope analyze [--stage basic] [--input FILE] [--compare FILE]
//!                     [--output FILE | --stdout] [--format json]

use std::path::PathBuf;
use tokio::runtime::Runtime;
use tracing::info;

use crate::analysis::Stage;
use crate::cli::ui::Output;
use crate::cli::util::{
    ConfigOverrides, build_service, load_config, read_subject, resolve_output_path,
    write_document,
};
use crate::config::OutputFormat;
use crate::types::{ArchError, Result};

#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    pub stage: String,
    pub input: PathBuf,
    pub compare: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub stdout: bool,
    pub format: Option<OutputFormat>,
    pub overrides: ConfigOverrides,
}

pub fn run(options: AnalyzeOptions) -> Result<()> {
    let stage: Stage = options.stage.parse()?;
    let out = Output::new();

    let config = load_config(&options.overrides)?;
    let format = options.format.unwrap_or(config.output.format);

    let text = read_subject(&options.input)?;
    let comparison = options.compare.as_deref().map(read_subject).transpose()?;
    if stage.requires_comparison() && comparison.is_none() {
        return Err(ArchError::MalformedInput(
            "the comparative stage needs --compare <FILE>".to_string(),
        ));
    }

    let service = build_service(&config)?;

    if !options.stdout {
        out.header(&format!("Starting {} analysis", stage));
        out.info(&format!(
            "Input: {} ({} chars)",
            options.input.display(),
            text.char_count()
        ));
        out.info(&format!(
            "Provider: {} / {}",
            config.llm.provider, config.llm.model
        ));
    }

    let rt = Runtime::new()?;
    let document = rt.block_on(service.run_stage(
        stage.as_str(),
        text.as_str(),
        comparison.as_ref().map(|c| c.as_str()),
        format,
    ))?;

    if options.stdout {
        println!("{}", document.content);
        return Ok(());
    }

    let path = resolve_output_path(options.output, &config.output.path, format);
    write_document(&path, &document.content)?;
    info!(
        "Wrote {} bytes to {}",
        document.content.len(),
        path.display()
    );

    out.success(&format!("Report saved to {}", path.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ErrorClass;

    fn options(stage: &str) -> AnalyzeOptions {
        AnalyzeOptions {
            stage: stage.to_string(),
            input: PathBuf::from("does-not-exist.txt"),
            compare: None,
            output: None,
            stdout: true,
            format: None,
            overrides: ConfigOverrides::default(),
        }
    }

    #[test]
    fn test_unknown_stage_fails_before_reading_input() {
        let err = run(options("security")).unwrap_err();
        assert_eq!(err.class(), ErrorClass::UnknownStage);
    }
}
