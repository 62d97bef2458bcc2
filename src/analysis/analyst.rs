//! Stage analyzers
//!
//! Five independent operations with the same shape: build the stage prompt,
//! request the stage schema from the structured client, return the
//! validated instance. Errors propagate unchanged.

use tracing::info;

use super::prompts::PromptFactory;
use super::stage::SubjectText;
use crate::ai::StructuredClient;
use crate::config::AnalysisConfig;
use crate::schema::{
    ArchitectureResult, FailureAnalysisResult, IntegrationReport, PerformanceAnalysis,
    StructuredOutput, SystemComparison,
};
use crate::types::Result;

#[derive(Clone)]
pub struct ArchitectureAnalyst {
    client: StructuredClient,
    prompts: PromptFactory,
}

impl ArchitectureAnalyst {
    pub fn new(client: StructuredClient, config: &AnalysisConfig) -> Self {
        Self {
            client,
            prompts: PromptFactory::new(config),
        }
    }

    pub async fn analyze_basic(&self, text: &SubjectText) -> Result<ArchitectureResult> {
        let prompt = self.prompts.basic(text.as_str());
        self.request("Basic architecture", &prompt.system, &prompt.user)
            .await
    }

    pub async fn analyze_failure_points(
        &self,
        text: &SubjectText,
    ) -> Result<FailureAnalysisResult> {
        let prompt = self.prompts.failure(text.as_str());
        self.request("Failure point", &prompt.system, &prompt.user)
            .await
    }

    pub async fn analyze_integration(&self, text: &SubjectText) -> Result<IntegrationReport> {
        let prompt = self.prompts.integration(text.as_str());
        self.request("Integration & compatibility", &prompt.system, &prompt.user)
            .await
    }

    pub async fn analyze_performance(&self, text: &SubjectText) -> Result<PerformanceAnalysis> {
        let prompt = self.prompts.performance(text.as_str());
        self.request("Performance & scalability", &prompt.system, &prompt.user)
            .await
    }

    pub async fn compare_architectures(
        &self,
        system_a: &SubjectText,
        system_b: &SubjectText,
    ) -> Result<SystemComparison> {
        let prompt = self.prompts.comparison(system_a.as_str(), system_b.as_str());
        self.request("Comparative", &prompt.system, &prompt.user)
            .await
    }

    async fn request<T: StructuredOutput>(
        &self,
        label: &str,
        system: &str,
        user: &str,
    ) -> Result<T> {
        info!("Starting {} analysis", label);
        let result = self.client.complete::<T>(system, user).await?;
        info!("✓ {} analysis complete", label);
        Ok(result)
    }
}
