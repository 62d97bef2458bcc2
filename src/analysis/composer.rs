//! Report composer
//!
//! Runs the single-subject stages in a fixed order against the same text,
//! appends the comparison step when a second subject is given, and assembles
//! the composite. The first failing stage aborts the run; no partial report
//! is ever returned.

use chrono::Utc;
use std::future::Future;
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

use super::analyst::ArchitectureAnalyst;
use super::stage::{Stage, SubjectText};
use crate::config::AnalysisConfig;
use crate::schema::{ComprehensiveArchitectureReport, ReportParts, Score};
use crate::types::{ArchError, Result, capitalize_first};

/// Stage order of a comprehensive run
pub fn plan(with_comparison: bool) -> Vec<Stage> {
    let mut steps = vec![
        Stage::Basic,
        Stage::Failure,
        Stage::Integration,
        Stage::Performance,
    ];
    if with_comparison {
        steps.push(Stage::Comparative);
    }
    steps
}

#[derive(Clone)]
pub struct ReportComposer {
    analyst: ArchitectureAnalyst,
    confidence_level: Score,
    analyst_notes: Option<String>,
}

impl ReportComposer {
    /// Fails with a configuration error when the confidence level is outside `[0, 1]`
    pub fn new(analyst: ArchitectureAnalyst, config: &AnalysisConfig) -> Result<Self> {
        let confidence_level = Score::new("analysis.confidence_level", config.confidence_level)
            .map_err(|e| ArchError::Config(e.to_string()))?;
        Ok(Self {
            analyst,
            confidence_level,
            analyst_notes: config.analyst_notes.clone(),
        })
    }

    pub fn analyst(&self) -> &ArchitectureAnalyst {
        &self.analyst
    }

    pub async fn generate_comprehensive_report(
        &self,
        text: &SubjectText,
        comparison: Option<&SubjectText>,
    ) -> Result<ComprehensiveArchitectureReport> {
        let run_id = Uuid::new_v4();
        let span = info_span!("comprehensive_report", %run_id);

        async move {
            let steps = plan(comparison.is_some());
            let total = steps.len();
            info!(
                "Generating comprehensive report ({} stages, {} chars)",
                total,
                text.char_count()
            );

            let analyst = &self.analyst;
            let basic = step(Stage::Basic, total, analyst.analyze_basic(text)).await?;
            let failure = step(Stage::Failure, total, analyst.analyze_failure_points(text)).await?;
            let integration =
                step(Stage::Integration, total, analyst.analyze_integration(text)).await?;
            let performance =
                step(Stage::Performance, total, analyst.analyze_performance(text)).await?;

            let comparison = match comparison {
                Some(other) => Some(
                    step(
                        Stage::Comparative,
                        total,
                        analyst.compare_architectures(text, other),
                    )
                    .await?,
                ),
                None => None,
            };

            let report = ComprehensiveArchitectureReport::assemble(
                ReportParts {
                    basic,
                    failure,
                    integration,
                    performance,
                    comparison,
                },
                self.confidence_level,
                self.analyst_notes.clone(),
                Utc::now(),
            );

            info!("✓ Comprehensive report generation complete");
            Ok(report)
        }
        .instrument(span)
        .await
    }
}

/// Run one planned stage, tagging any failure with the stage name
async fn step<T, F>(stage: Stage, total: usize, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    let position = plan(true)
        .iter()
        .position(|s| *s == stage)
        .map_or(0, |p| p + 1);
    info!(
        "[{}/{}] {} stage",
        position,
        total,
        capitalize_first(stage.as_str())
    );

    fut.await.map_err(|e| e.in_stage(stage.as_str()))
}
