//! Two-system comparison schema.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::{StructuredOutput, string_array};

/// Output of the comparative stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemComparison {
    pub system_a: String,
    pub system_b: String,
    pub performance_differential: String,
    /// Complexity of A relative to B
    pub complexity_ratio: f64,
    pub cost_efficiency_comparison: String,
    pub recommendation: String,
    pub decision_factors: Vec<String>,
    pub trade_offs: Vec<String>,
}

impl StructuredOutput for SystemComparison {
    const NAME: &'static str = "SystemComparison";

    fn json_schema() -> Value {
        json!({
            "type": "object",
            "description": "Side-by-side comparison of two system architectures",
            "required": [
                "system_a", "system_b", "performance_differential", "complexity_ratio",
                "cost_efficiency_comparison", "recommendation", "decision_factors", "trade_offs"
            ],
            "properties": {
                "system_a": {"type": "string"},
                "system_b": {"type": "string"},
                "performance_differential": {"type": "string"},
                "complexity_ratio": {
                    "type": "number",
                    "description": "Complexity of system A divided by system B"
                },
                "cost_efficiency_comparison": {"type": "string"},
                "recommendation": {"type": "string"},
                "decision_factors": string_array("Factors that drive the decision"),
                "trade_offs": string_array("Trade-offs between the two systems")
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::parse_instance;

    #[test]
    fn test_ratio_is_not_bounded() {
        let comparison = parse_instance::<SystemComparison>(json!({
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
