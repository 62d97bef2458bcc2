//! Report rendering
//!
//! Turns a validated stage result into the document handed to the output
//! sink, as markdown or pretty-printed JSON.

pub mod markdown;

use serde::Serialize;

use crate::analysis::Stage;
use crate::config::OutputFormat;
use crate::schema::{
    ArchitectureResult, ComprehensiveArchitectureReport, FailureAnalysisResult, IntegrationReport,
    PerformanceAnalysis, SystemComparison,
};
use crate::types::Result;

/// Validated result of one stage run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StageOutput {
    Basic(ArchitectureResult),
    Failure(FailureAnalysisResult),
    Integration(IntegrationReport),
    Performance(PerformanceAnalysis),
    Comparative(SystemComparison),
    Comprehensive(Box<ComprehensiveArchitectureReport>),
}

impl StageOutput {
    pub fn stage(&self) -> Stage {
        match self {
            StageOutput::Basic(_) => Stage::Basic,
            StageOutput::Failure(_) => Stage::Failure,
            StageOutput::Integration(_) => Stage::Integration,
            StageOutput::Performance(_) => Stage::Performance,
            StageOutput::Comparative(_) => Stage::Comparative,
            StageOutput::Comprehensive(_) => Stage::Comprehensive,
        }
    }

    pub fn to_markdown(&self) -> String {
        match self {
            StageOutput::Basic(data) => markdown::render_basic(data),
            StageOutput::Failure(data) => markdown::render_failure(data),
            StageOutput::Integration(data) => markdown::render_integration(data),
            StageOutput::Performance(data) => markdown::render_performance(data),
            StageOutput::Comparative(data) => markdown::render_comparison(data),
            StageOutput::Comprehensive(report) => markdown::render_report(report),
        }
    }
}

/// Rendered document ready for a file or stdout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub stage: Stage,
    pub format: OutputFormat,
    pub content: String,
}

pub fn render(output: &StageOutput, format: OutputFormat) -> Result<RenderedDocument> {
    let content = match format {
        OutputFormat::Markdown => output.to_markdown(),
        OutputFormat::Json => serde_json::to_string_pretty(output)?,
    };

    Ok(RenderedDocument {
        stage: output.stage(),
        format,
        content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::fixtures;

    #[test]
    fn test_render_markdown() {
        let doc = render(
            &StageOutput::Integration(fixtures::integration()),
            OutputFormat::Markdown,
        )
        .unwrap();

        assert_eq!(doc.stage, Stage::Integration);
        assert_eq!(doc.format, OutputFormat::Markdown);
        assert!(doc.content.starts_with("### System: System X"));
    }

    #[test]
    fn test_render_json_is_the_bare_instance() {
        let doc = render(
            &StageOutput::Performance(fixtures::performance()),
            OutputFormat::Json,
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&doc.content).unwrap();
        assert_eq!(value["system_name"], "System X");
        assert_eq!(value["scalability_metrics"][0]["scalability_factor"], 4.0);
        assert!(value.get("expected_tps").is_none());
    }

    #[test]
    fn test_render_twice_is_identical() {
        let output = StageOutput::Basic(fixtures::architecture());
        let first = render(&output, OutputFormat::Markdown).unwrap();
        let second = render(&output, OutputFormat::Markdown).unwrap();
        assert_eq!(first, second);
    }
}
