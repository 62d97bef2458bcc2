//! Response validation
//!
//! Turns raw model output into a schema instance in two steps:
//! 1. extract JSON from the response text, repairing common format issues
//! 2. deserialize and bounds-check against the target schema
//!
//! Either step failing yields `ArchError::Validation`, which the structured
//! client treats as retryable.

mod json_repair;

pub use json_repair::{JsonRepairer, extract_json_from_response};

use serde_json::Value;

use crate::schema::{StructuredOutput, parse_instance};
use crate::types::Result;

/// Validate provider content against the schema of `T`
pub fn validate_response<T: StructuredOutput>(content: Value) -> Result<T> {
    Ok(parse_instance::<T>(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SystemComparison;
    use crate::types::ArchError;
    use serde_json::json;

    #[test]
    fn test_validate_response_ok() {
        let comparison: SystemComparison = validate_response(json!({
            "system_a": "A",
            "system_b": "B",
            "performance_differential": "A handles 2x load",
            "complexity_ratio": 1.5,
            "cost_efficiency_comparison": "B is cheaper",
            "recommendation": "A",
            "decision_factors": ["throughput"],
            "trade_offs": ["cost"]
        }))
        .unwrap();
        assert_eq!(comparison.complexity_ratio, 1.5);
    }

    #[test]
    fn test_validate_response_missing_field_is_recoverable() {
        let err = validate_response::<SystemComparison>(json!({
            "system_a": "A",
            "system_b": "B",
            "performance_differential": "",
            "cost_efficiency_comparison": "",
            "recommendation": "",
            "decision_factors": [],
            "trade_offs": []
        }))
        .unwrap_err();
        assert!(matches!(err, ArchError::Validation(_)));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_validate_response_accepts_negative_ratio() {
        let comparison: SystemComparison = validate_response(json!({
            "system_a": "A",
            "system_b": "B",
            "performance_differential": "",
            "complexity_ratio": -1.0,
            "cost_efficiency_comparison": "",
            "recommendation": "",
            "decision_factors": [],
            "trade_offs": []
        }))
        .unwrap();
        assert_eq!(comparison.complexity_ratio, -1.0);
    }
}
