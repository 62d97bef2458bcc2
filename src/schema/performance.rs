//! Performance and scalability schema.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::bounded::ScalingFactor;
use super::{StructuredOutput, string_array};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalabilityMetric {
    pub metric_name: String,
    pub current_capacity: String,
    pub scalability_factor: ScalingFactor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottleneck: Option<String>,
}

impl ScalabilityMetric {
    fn schema() -> Value {
        json!({
            "type": "object",
            "required": ["metric_name", "current_capacity", "scalability_factor"],
            "properties": {
                "metric_name": {"type": "string"},
                "current_capacity": {"type": "string"},
                "scalability_factor": {"type": "number", "minimum": 1.0},
                "bottleneck": {"type": "string", "description": "Likely bottleneck"}
            }
        })
    }
}

/// Output of the performance stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceAnalysis {
    pub system_name: String,
    pub throughput_estimate: String,
    pub latency_profile: String,
    pub scalability_metrics: Vec<ScalabilityMetric>,
    pub recommended_scaling_strategy: String,
    pub load_balancing_approach: String,
    pub caching_strategy: String,
    pub optimization_opportunities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_tps: Option<f64>,
}

impl StructuredOutput for PerformanceAnalysis {
    const NAME: &'static str = "PerformanceAnalysis";

    fn json_schema() -> Value {
        json!({
            "type": "object",
            "description": "Throughput, latency and scaling assessment of the architecture",
            "required": [
                "system_name", "throughput_estimate", "latency_profile", "scalability_metrics",
                "recommended_scaling_strategy", "load_balancing_approach", "caching_strategy",
                "optimization_opportunities"
            ],
            "properties": {
                "system_name": {"type": "string"},
                "throughput_estimate": {"type": "string"},
                "latency_profile": {"type": "string"},
                "scalability_metrics": {"type": "array", "items": ScalabilityMetric::schema()},
                "recommended_scaling_strategy": {"type": "string"},
                "load_balancing_approach": {"type": "string"},
                "caching_strategy": {"type": "string"},
                "optimization_opportunities": string_array("Concrete optimization opportunities"),
                "expected_tps": {
                    "type": "number",
                    "description": "Expected transactions per second"
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::parse_instance;
    use crate::types::ValidationErrorKind;

    fn analysis_json(factor: f64) -> Value {
        json!({
            "system_name": "X",
            "throughput_estimate": "10k req/s",
            "latency_profile": "p99 < 50ms",
            "scalability_metrics": [{
                "metric_name": "Agents",
                "current_capacity": "100",
                "scalability_factor": factor
            }],
            "recommended_scaling_strategy": "Horizontal",
            "load_balancing_approach": "Round robin",
            "caching_strategy": "Read-through",
            "optimization_opportunities": []
        })
    }

    #[test]
    fn test_factor_at_least_one() {
        assert!(parse_instance::<PerformanceAnalysis>(analysis_json(1.0)).is_ok());

        let err = parse_instance::<PerformanceAnalysis>(analysis_json(0.5)).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::Range);
        assert!(err.message.contains("scalability_factor"));

        assert!(serde_json::from_value::<PerformanceAnalysis>(analysis_json(0.5)).is_err());
    }

    #[test]
    fn test_expected_tps_is_not_bounded() {
        let mut value = analysis_json(2.0);
        value["expected_tps"] = json!(-5.0);
        let analysis = parse_instance::<PerformanceAnalysis>(value).unwrap();
        assert_eq!(analysis.expected_tps, Some(-5.0));
    }
}
