//! Stage runner exposed to collaborators (CLI, front-ends).
//!
//! Unknown stage names and malformed subjects are rejected here, before any
//! remote call is made.

use super::composer::ReportComposer;
use super::stage::{Stage, SubjectText};
use crate::config::OutputFormat;
use crate::report::{RenderedDocument, StageOutput, render};
use crate::types::{ArchError, ErrorClass, Result};

#[derive(Clone)]
pub struct AnalysisService {
    composer: ReportComposer,
}

impl AnalysisService {
    pub fn new(composer: ReportComposer) -> Self {
        Self { composer }
    }

    /// Run one stage and return its validated result
    pub async fn run(
        &self,
        stage: Stage,
        text: &SubjectText,
        comparison: Option<&SubjectText>,
    ) -> Result<StageOutput> {
        let analyst = self.composer.analyst();

        let output = match stage {
            Stage::Basic => StageOutput::Basic(analyst.analyze_basic(text).await?),
            Stage::Failure => StageOutput::Failure(analyst.analyze_failure_points(text).await?),
            Stage::Performance => {
                StageOutput::Performance(analyst.analyze_performance(text).await?)
            }
            Stage::Integration => {
                StageOutput::Integration(analyst.analyze_integration(text).await?)
            }
            Stage::Comparative => {
                let other = comparison.ok_or_else(|| {
                    ArchError::MalformedInput(
                        "comparative stage requires a second subject text".to_string(),
                    )
                })?;
                StageOutput::Comparative(analyst.compare_architectures(text, other).await?)
            }
            Stage::Comprehensive => StageOutput::Comprehensive(Box::new(
                self.composer
                    .generate_comprehensive_report(text, comparison)
                    .await?,
            )),
        };

        Ok(output)
    }

    /// Validate the request, run the stage and render the result
    pub async fn run_stage(
        &self,
        stage_name: &str,
        text: &str,
        comparison: Option<&str>,
        format: OutputFormat,
    ) -> Result<RenderedDocument> {
        let stage: Stage = stage_name.parse()?;
        let text = SubjectText::new(text)?;
        let comparison = comparison.map(SubjectText::new).transpose()?;

        if stage.requires_comparison() && comparison.is_none() {
            return Err(ArchError::MalformedInput(
                "comparative stage requires a second subject text".to_string(),
            ));
        }

        let output = self
            .run(stage, &text, comparison.as_ref())
            .await
            .map_err(|e| match e {
                ArchError::Stage { .. } => e,
                e if e.class() == ErrorClass::RemoteCall => e.in_stage(stage.as_str()),
                e => e,
            })?;

        render(&output, format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::provider::testing::ScriptedProvider;
    use crate::ai::{RetryPolicy, StructuredClient};
    use crate::analysis::{ArchitectureAnalyst, fixtures};
    use crate::config::AnalysisConfig;
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;

    fn service(provider: Arc<ScriptedProvider>) -> AnalysisService {
        let config = AnalysisConfig::default();
        let client = StructuredClient::new(provider).with_retry(RetryPolicy {
            max_attempts: 3,
            base_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(1),
            jitter: false,
        });
        let analyst = ArchitectureAnalyst::new(client, &config);
        AnalysisService::new(ReportComposer::new(analyst, &config).unwrap())
    }

    #[tokio::test]
    async fn test_basic_stage_end_to_end() {
        let provider = Arc::new(ScriptedProvider::new().reply(json!({
            "winning_system_name": "System X",
            "core_components": [{
                "name": "Gateway",
                "type": "Gateway",
                "responsibility": "Routes requests",
                "technologies": ["REST"],
                "criticality": "medium"
            }],
            "data_flows": [{
                "source": "Gateway",
                "target": "Database",
                "protocol": "REST",
                "data_type": "Records"
            }],
            "decision_engine": {
                "negotiation_protocol": "None",
                "optimization_metric": "Latency"
            },
            "key_innovations": [],
            "implementation_challenges": []
        })));

        let document = service(provider.clone())
            .run_stage(
                "basic",
                "System X uses a Gateway component routing via REST to a Database",
                None,
                OutputFormat::Markdown,
            )
            .await
            .unwrap();

        assert_eq!(document.stage, Stage::Basic);
        assert!(document.content.contains("| Gateway | Gateway | medium |"));
        assert!(document.content.contains("Gateway → Database"));
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_unknown_stage_rejected_before_remote_call() {
        let provider = Arc::new(ScriptedProvider::new().reply(fixtures::architecture_json()));

        let err = service(provider.clone())
            .run_stage("security", "System X", None, OutputFormat::Markdown)
            .await
            .unwrap_err();

        assert_eq!(err.class(), ErrorClass::UnknownStage);
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_subject_rejected_before_remote_call() {
        let provider = Arc::new(ScriptedProvider::new().reply(fixtures::architecture_json()));

        let err = service(provider.clone())
            .run_stage("basic", "   ", None, OutputFormat::Markdown)
            .await
            .unwrap_err();

        assert_eq!(err.class(), ErrorClass::MalformedInput);
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_comparative_requires_second_subject() {
        let provider = Arc::new(ScriptedProvider::new().reply(fixtures::comparison_json()));

        let err = service(provider.clone())
            .run_stage("comparative", "System X", None, OutputFormat::Markdown)
            .await
            .unwrap_err();

        assert_eq!(err.class(), ErrorClass::MalformedInput);
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_comparative_stage_json() {
        let provider = Arc::new(ScriptedProvider::new().reply(fixtures::comparison_json()));

        let document = service(provider)
            .run_stage(
                "comparative",
                "System X",
                Some("System Y"),
                OutputFormat::Json,
            )
            .await
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&document.content).unwrap();
        assert_eq!(value["recommendation"], "Adopt System X");
    }

    #[tokio::test]
    async fn test_remote_failure_is_classified() {
        let provider = Arc::new(
            ScriptedProvider::new()
                .reply(json!({}))
                .reply(json!({}))
                .reply(json!({})),
        );

        let err = service(provider)
            .run_stage("performance", "System X", None, OutputFormat::Markdown)
            .await
            .unwrap_err();

        assert_eq!(err.class(), ErrorClass::RemoteCall);
        assert!(err.to_string().starts_with("performance stage failed"));
    }
}
