//! Composite report assembled from the individual stage results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    ArchitectureResult, FailureAnalysisResult, IntegrationReport, PerformanceAnalysis, Score,
    SystemComparison,
};

/// Validated stage results awaiting assembly
#[derive(Debug, Clone)]
pub struct ReportParts {
    pub basic: ArchitectureResult,
    pub failure: FailureAnalysisResult,
    pub integration: IntegrationReport,
    pub performance: PerformanceAnalysis,
    pub comparison: Option<SystemComparison>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComprehensiveArchitectureReport {
    pub basic_analysis: ArchitectureResult,
    pub failure_analysis: FailureAnalysisResult,
    pub integration_analysis: IntegrationReport,
    pub performance_analysis: PerformanceAnalysis,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparative_analysis: Option<SystemComparison>,
    pub generated_at: DateTime<Utc>,
    pub confidence_level: Score,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analyst_notes: Option<String>,
}

impl ComprehensiveArchitectureReport {
    pub fn assemble(
        parts: ReportParts,
        confidence_level: Score,
        analyst_notes: Option<String>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            basic_analysis: parts.basic,
            failure_analysis: parts.failure,
            integration_analysis: parts.integration,
            performance_analysis: parts.performance,
            comparative_analysis: parts.comparison,
            generated_at,
            confidence_level,
            analyst_notes,
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::schema::{
        ComponentCategory, Criticality, DataFlow, DecisionEngineSpec, DeprecationRisk,
        Probability, RiskAssessment, ScalabilityMetric, ScalingFactor, Severity,
        SystemComponent, TechStackAnalysis,
    };

    pub fn architecture() -> ArchitectureResult {
        ArchitectureResult {
            winning_system_name: "System X".to_string(),
            core_components: vec![SystemComponent {
                name: "Gateway".to_string(),
                category: ComponentCategory::Gateway,
                responsibility: "Routes client traffic".to_string(),
                technologies: vec!["Envoy".to_string(), "Lua".to_string()],
                criticality: Criticality::Medium,
            }],
            data_flows: vec![DataFlow {
                source: "Gateway".to_string(),
                target: "Database".to_string(),
                protocol: "REST".to_string(),
                data_type: "Orders".to_string(),
                throughput: None,
            }],
            decision_engine: DecisionEngineSpec {
                negotiation_protocol: "Contract Net Protocol".to_string(),
                optimization_metric: "Latency".to_string(),
                decision_latency: Some("< 200ms".to_string()),
            },
            key_innovations: vec!["Adaptive routing".to_string()],
            implementation_challenges: vec!["Schema drift".to_string()],
        }
    }

    pub fn failure() -> FailureAnalysisResult {
        FailureAnalysisResult {
            system_name: "System X".to_string(),
            critical_vulnerabilities: vec![RiskAssessment {
                failure_point: "Single database primary".to_string(),
                probability: Probability::Medium,
                severity: Severity::Catastrophic,
                mitigation_strategy: "Synchronous replica".to_string(),
                fallback_option: None,
            }],
            single_points_of_failure: vec!["Database".to_string()],
            recovery_time_objective: "15 minutes".to_string(),
            redundancy_requirements: vec!["Multi-AZ".to_string()],
            disaster_recovery_plan: None,
        }
    }

    pub fn integration() -> IntegrationReport {
        IntegrationReport {
            system_name: "System X".to_string(),
            tech_stack_analysis: vec![TechStackAnalysis {
                technology: "PostgreSQL".to_string(),
                version_range: "14-16".to_string(),
                compatibility_issues: vec![],
                integration_points: vec!["Gateway".to_string()],
                deprecation_risk: DeprecationRisk::Low,
            }],
            integration_patterns_used: vec!["API Gateway".to_string()],
            api_compatibility_score: Score::try_from(0.87).unwrap(),
            migration_path: None,
            deprecated_technologies: vec![],
            security_compliance: vec!["TLS 1.3".to_string()],
        }
    }

    pub fn performance() -> PerformanceAnalysis {
        PerformanceAnalysis {
            system_name: "System X".to_string(),
            throughput_estimate: "5k req/s".to_string(),
            latency_profile: "p99 80ms".to_string(),
            scalability_metrics: vec![ScalabilityMetric {
                metric_name: "Requests".to_string(),
                current_capacity: "5k req/s".to_string(),
                scalability_factor: ScalingFactor::try_from(4.0).unwrap(),
                bottleneck: Some("Database writes".to_string()),
            }],
            recommended_scaling_strategy: "Horizontal".to_string(),
            load_balancing_approach: "Least connections".to_string(),
            caching_strategy: "Read-through".to_string(),
            optimization_opportunities: vec!["Connection pooling".to_string()],
            expected_tps: None,
        }
    }

    pub fn comparison() -> SystemComparison {
        SystemComparison {
            system_a: "System X".to_string(),
            system_b: "System Y".to_string(),
            performance_differential: "X sustains twice the throughput".to_string(),
            complexity_ratio: 1.25,
            cost_efficiency_comparison: "Y costs 30% less to run".to_string(),
            recommendation: "Adopt System X".to_string(),
            decision_factors: vec!["Throughput headroom".to_string()],
            trade_offs: vec!["Higher operating cost".to_string()],
        }
    }

    pub fn parts() -> ReportParts {
        ReportParts {
            basic: architecture(),
            failure: failure(),
            integration: integration(),
            performance: performance(),
            comparison: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn report(confidence: f64, at: DateTime<Utc>) -> ComprehensiveArchitectureReport {
        let confidence = Score::new("confidence_level", confidence).unwrap();
        ComprehensiveArchitectureReport::assemble(fixtures::parts(), confidence, None, at)
    }

    #[test]
    fn test_assemble_keeps_parts() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let report = report(0.94, at);

        assert_eq!(report.basic_analysis.winning_system_name, "System X");
        assert_eq!(report.generated_at, at);
        assert_eq!(report.confidence_level.get(), 0.94);
        assert!(report.comparative_analysis.is_none());
    }

    #[test]
    fn test_deserialize_rejects_confidence_out_of_range() {
        let report = report(0.5, Utc::now());
        let mut value = serde_json::to_value(&report).unwrap();
        let parse = |v: &serde_json::Value| {
            serde_json::from_value::<ComprehensiveArchitectureReport>(v.clone())
        };

        value["confidence_level"] = serde_json::json!(1.2);
        assert!(parse(&value).is_err());
        value["confidence_level"] = serde_json::json!(-0.1);
        assert!(parse(&value).is_err());
        value["confidence_level"] = serde_json::json!(0.5);
        assert_eq!(parse(&value).unwrap(), report);
    }
}
