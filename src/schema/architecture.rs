//! Basic architecture analysis schema.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::levels::{ComponentCategory, Criticality};
use super::{StructuredOutput, string_array};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemComponent {
    pub name: String,
    #[serde(rename = "type")]
    pub category: ComponentCategory,
    pub responsibility: String,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub criticality: Criticality,
}

impl SystemComponent {
    fn schema() -> Value {
        json!({
            "type": "object",
            "required": ["name", "type", "responsibility", "technologies"],
            "properties": {
                "name": {"type": "string", "description": "Component name (e.g. 'Orchestrator Agent', 'Knowledge Graph')"},
                "type": {"type": "string", "enum": ComponentCategory::wire_values()},
                "responsibility": {"type": "string", "description": "Technical responsibility of the component"},
                "technologies": string_array("Proposed technologies (e.g. 'Neo4j', 'FastAPI')"),
                "criticality": {"type": "string", "enum": Criticality::wire_values(), "default": "medium"}
            }
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataFlow {
    pub source: String,
    pub target: String,
    /// Transport, e.g. gRPC, REST, Pub/Sub, WebSocket
    pub protocol: String,
    pub data_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub throughput: Option<String>,
}

impl DataFlow {
    fn schema() -> Value {
        json!({
            "type": "object",
            "required": ["source", "target", "protocol", "data_type"],
            "properties": {
                "source": {"type": "string", "description": "Component the data leaves"},
                "target": {"type": "string", "description": "Component the data reaches"},
                "protocol": {"type": "string", "description": "Communication protocol (gRPC, REST, Pub/Sub, WebSocket)"},
                "data_type": {"type": "string", "description": "Kind of data transferred"},
                "throughput": {"type": "string", "description": "Expected throughput"}
            }
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionEngineSpec {
    pub negotiation_protocol: String,
    pub optimization_metric: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision_latency: Option<String>,
}

impl DecisionEngineSpec {
    fn schema() -> Value {
        json!({
            "type": "object",
            "required": ["negotiation_protocol", "optimization_metric"],
            "properties": {
                "negotiation_protocol": {"type": "string", "description": "Negotiation protocol (e.g. Contract Net Protocol)"},
                "optimization_metric": {"type": "string", "description": "Primary metric the engine optimizes"},
                "decision_latency": {"type": "string", "description": "Expected decision latency"}
            }
        })
    }
}

/// Output of the basic stage: the winning system's architecture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchitectureResult {
    pub winning_system_name: String,
    pub core_components: Vec<SystemComponent>,
    pub data_flows: Vec<DataFlow>,
    pub decision_engine: DecisionEngineSpec,
    pub key_innovations: Vec<String>,
    pub implementation_challenges: Vec<String>,
}

impl StructuredOutput for ArchitectureResult {
    const NAME: &'static str = "ArchitectureResult";

    fn json_schema() -> Value {
        json!({
            "type": "object",
            "description": "Architecture of the winning system extracted from a design session",
            "required": [
                "winning_system_name", "core_components", "data_flows",
                "decision_engine", "key_innovations", "implementation_challenges"
            ],
            "properties": {
                "winning_system_name": {"type": "string"},
                "core_components": {"type": "array", "items": SystemComponent::schema()},
                "data_flows": {"type": "array", "items": DataFlow::schema()},
                "decision_engine": DecisionEngineSpec::schema(),
                "key_innovations": string_array("Key innovations of the design"),
                "implementation_challenges": string_array("Expected implementation challenges")
            }
        })
    }
}
