//! Stage Output Schemas
//!
//! Typed shapes each analysis stage must produce. Every shape carries:
//! - a JSON schema descriptor sent to the model alongside the prompt
//! - serde (de)serialization enforcing types, required fields and enums
//! - bounded numeric newtypes that reject out-of-range values on construction
//!
//! Instances are immutable values produced once per request.

mod architecture;
mod bounded;
mod comparison;
mod failure;
mod integration;
mod levels;
mod performance;
mod report;

pub use architecture::{ArchitectureResult, DataFlow, DecisionEngineSpec, SystemComponent};
pub use bounded::{ScalingFactor, Score};
pub use comparison::SystemComparison;
pub use failure::{FailureAnalysisResult, RiskAssessment};
pub use integration::{IntegrationReport, TechStackAnalysis};
pub use levels::{ComponentCategory, Criticality, DeprecationRisk, Probability, Severity};
pub use performance::{PerformanceAnalysis, ScalabilityMetric};
pub use report::{ComprehensiveArchitectureReport, ReportParts};

#[cfg(test)]
pub(crate) use report::fixtures;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::types::{ValidationError, ValidationErrorKind};

/// A structured completion target
pub trait StructuredOutput: DeserializeOwned + Serialize + Send + Sync + 'static {
    /// Schema name reported to the provider and in logs
    const NAME: &'static str;

    /// JSON schema descriptor for the model
    fn json_schema() -> Value;
}

/// Turn a raw model value into a validated instance of `T`
pub fn parse_instance<T: StructuredOutput>(value: Value) -> Result<T, ValidationError> {
    serde_json::from_value(value).map_err(|e| {
        let message = e.to_string();
        let kind = if message.starts_with("missing field") {
            ValidationErrorKind::MissingField
        } else if message.contains(ValidationError::OUT_OF_RANGE) {
            ValidationErrorKind::Range
        } else {
            ValidationErrorKind::Schema
        };
        ValidationError::new(kind, message).with_field(T::NAME)
    })
}

/// JSON schema for an array of strings
pub(crate) fn string_array(description: &str) -> Value {
    serde_json::json!({
        "type": "array",
        "description": description,
        "items": {"type": "string"}
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_instance_missing_field() {
        let err = parse_instance::<SystemComparison>(json!({"system_a": "A"})).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::MissingField);
        assert_eq!(err.field.as_deref(), Some("SystemComparison"));
    }

    #[test]
    fn test_parse_instance_type_mismatch() {
        let err = parse_instance::<SystemComparison>(json!({
            "system_a": "A",
            "system_b": "B",
            "performance_differential": "A is faster",
            "complexity_ratio": "twice",
            "cost_efficiency_comparison": "similar",
            "recommendation": "A",
            "decision_factors": [],
            "trade_offs": []
        }))
        .unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::Schema);
    }

    #[test]
    fn test_every_schema_is_an_object_with_required_fields() {
        for schema in [
            ArchitectureResult::json_schema(),
            FailureAnalysisResult::json_schema(),
            IntegrationReport::json_schema(),
            PerformanceAnalysis::json_schema(),
            SystemComparison::json_schema(),
        ] {
            assert_eq!(schema["type"], "object");
            assert!(!schema["required"].as_array().unwrap().is_empty());
        }
    }
}
