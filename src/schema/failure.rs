//! Failure-point analysis schema.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::levels::{Probability, Severity};
use super::{StructuredOutput, string_array};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub failure_point: String,
    #[serde(default)]
    pub probability: Probability,
    #[serde(default)]
    pub severity: Severity,
    pub mitigation_strategy: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_option: Option<String>,
}

impl RiskAssessment {
    fn schema() -> Value {
        json!({
            "type": "object",
            "required": ["failure_point", "mitigation_strategy"],
            "properties": {
                "failure_point": {"type": "string", "description": "Potential point of failure"},
                "probability": {"type": "string", "enum": Probability::wire_values(), "default": "medium"},
                "severity": {"type": "string", "enum": Severity::wire_values(), "default": "critical"},
                "mitigation_strategy": {"type": "string", "description": "How the risk is mitigated"},
                "fallback_option": {"type": "string", "description": "Fallback if mitigation fails"}
            }
        })
    }
}

/// Output of the failure stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureAnalysisResult {
    pub system_name: String,
    pub critical_vulnerabilities: Vec<RiskAssessment>,
    pub single_points_of_failure: Vec<String>,
    pub recovery_time_objective: String,
    pub redundancy_requirements: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disaster_recovery_plan: Option<String>,
}

impl StructuredOutput for FailureAnalysisResult {
    const NAME: &'static str = "FailureAnalysisResult";

    fn json_schema() -> Value {
        json!({
            "type": "object",
            "description": "Failure points, risks and recovery requirements of the architecture",
            "required": [
                "system_name", "critical_vulnerabilities", "single_points_of_failure",
                "recovery_time_objective", "redundancy_requirements"
            ],
            "properties": {
                "system_name": {"type": "string"},
                "critical_vulnerabilities": {"type": "array", "items": RiskAssessment::schema()},
                "single_points_of_failure": string_array("Components whose loss stops the system"),
                "recovery_time_objective": {"type": "string", "description": "Recovery time objective (RTO)"},
                "redundancy_requirements": string_array("Required redundancy measures"),
                "disaster_recovery_plan": {"type": "string", "description": "Disaster recovery narrative"}
            }
        })
    }
}
