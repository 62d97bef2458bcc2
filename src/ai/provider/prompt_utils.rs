//! Prompt building utilities for LLM providers.
//!
//! Shared utilities for embedding a JSON schema into prompts.

use serde_json::Value;

fn schema_block(schema: &Value) -> String {
    serde_json::to_string_pretty(schema).unwrap_or_default()
}

/// System message for chat-style providers: the stage instruction followed
/// by the schema the answer must match.
pub fn build_schema_system_prompt(system: &str, schema_name: &str, schema: &Value) -> String {
    if schema.is_null() {
        return format!("{}\n\nAlways respond with valid JSON.", system);
    }

    format!(
        "{}\n\nRespond with a single JSON object named {} matching this schema:\n\n```json\n{}\n```\n\nRespond ONLY with valid JSON, no explanation.",
        system,
        schema_name,
        schema_block(schema)
    )
}

/// Single prompt for completion-style providers (Ollama).
///
/// Returns the prompt unchanged if schema is null.
pub fn build_schema_prompt(user_prompt: &str, schema: &Value) -> String {
    if schema.is_null() {
        return user_prompt.to_string();
    }

    format!(
        "{}\n\n---\n\nRespond with valid JSON matching this schema:\n```json\n{}\n```\n\nRespond ONLY with valid JSON, no explanation.",
        user_prompt,
        schema_block(schema)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_schema_prompt_null_schema() {
        let prompt = "Analyze this architecture";
        let result = build_schema_prompt(prompt, &Value::Null);
        assert_eq!(result, prompt);
    }

    #[test]
    fn test_build_schema_prompt_with_schema() {
        let prompt = "Analyze this architecture";
        let schema = json!({"type": "object", "properties": {"result": {"type": "string"}}});
        let result = build_schema_prompt(prompt, &schema);

        assert!(result.contains(prompt));
        assert!(result.contains("\"result\""));
        assert!(result.contains("ONLY with valid JSON"));
    }

    #[test]
    fn test_build_schema_system_prompt_names_schema() {
        let schema = json!({"type": "object"});
        let result =
            build_schema_system_prompt("You are an architect.", "ArchitectureResult", &schema);

        assert!(result.starts_with("You are an architect."));
        assert!(result.contains("ArchitectureResult"));
        assert!(result.contains("```json"));
    }
}
