//! Integration and compatibility schema.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::bounded::Score;
use super::levels::DeprecationRisk;
use super::{StructuredOutput, string_array};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechStackAnalysis {
    pub technology: String,
    pub version_range: String,
    #[serde(default)]
    pub compatibility_issues: Vec<String>,
    #[serde(default)]
    pub integration_points: Vec<String>,
    #[serde(default)]
    pub deprecation_risk: DeprecationRisk,
}

impl TechStackAnalysis {
    fn schema() -> Value {
        json!({
            "type": "object",
            "required": ["technology", "version_range"],
            "properties": {
                "technology": {"type": "string"},
                "version_range": {"type": "string", "description": "Supported version range"},
                "compatibility_issues": string_array("Known compatibility issues"),
                "integration_points": string_array("Where the technology integrates"),
                "deprecation_risk": {
                    "type": "string",
                    "enum": DeprecationRisk::wire_values(),
                    "default": "none"
                }
            }
        })
    }
}

/// Output of the integration stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrationReport {
    pub system_name: String,
    pub tech_stack_analysis: Vec<TechStackAnalysis>,
    pub integration_patterns_used: Vec<String>,
    pub api_compatibility_score: Score,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migration_path: Option<String>,
    pub deprecated_technologies: Vec<String>,
    pub security_compliance: Vec<String>,
}

impl StructuredOutput for IntegrationReport {
    const NAME: &'static str = "IntegrationReport";

    fn json_schema() -> Value {
        json!({
            "type": "object",
            "description": "Technology stack compatibility and integration assessment",
            "required": [
                "system_name", "tech_stack_analysis", "integration_patterns_used",
                "api_compatibility_score", "deprecated_technologies", "security_compliance"
            ],
            "properties": {
                "system_name": {"type": "string"},
                "tech_stack_analysis": {"type": "array", "items": TechStackAnalysis::schema()},
                "integration_patterns_used": string_array("Integration patterns in use"),
                "api_compatibility_score": {"type": "number", "minimum": 0, "maximum": 1},
                "migration_path": {"type": "string", "description": "Future migration path"},
                "deprecated_technologies": string_array("Technologies already deprecated"),
                "security_compliance": string_array("Security and regulatory compliance statements")
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::parse_instance;
    use crate::types::ValidationErrorKind;

    fn report_json(score: f64) -> Value {
        json!({
            "system_name": "X",
            "tech_stack_analysis": [{"technology": "Kafka", "version_range": "3.x"}],
            "integration_patterns_used": ["Event sourcing"],
            "api_compatibility_score": score,
            "deprecated_technologies": [],
            "security_compliance": ["SOC 2"]
        })
    }

    #[test]
    fn test_score_in_range_accepted() {
        let report = parse_instance::<IntegrationReport>(report_json(0.87)).unwrap();
        assert_eq!(
            report.tech_stack_analysis[0].deprecation_risk,
            DeprecationRisk::None
        );
        assert!(report.tech_stack_analysis[0].compatibility_issues.is_empty());
    }

    #[test]
    fn test_score_out_of_range_rejected() {
        let err = parse_instance::<IntegrationReport>(report_json(1.5)).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::Range);
        assert_eq!(err.field.as_deref(), Some("IntegrationReport"));
        assert!(err.message.contains("[0, 1]"));

        assert!(parse_instance::<IntegrationReport>(report_json(-0.2)).is_err());
    }

    #[test]
    fn test_out_of_range_score_cannot_be_built() {
        assert!(serde_json::from_value::<IntegrationReport>(report_json(1.5)).is_err());
        assert!(Score::new("api_compatibility_score", 1.5).is_err());

        let report: IntegrationReport = serde_json::from_value(report_json(0.87)).unwrap();
        assert_eq!(report.api_compatibility_score.get(), 0.87);
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["api_compatibility_score"], 0.87);
    }
}
