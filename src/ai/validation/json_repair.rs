//! JSON extraction for model responses.
//!
//! Models asked for JSON still occasionally answer with:
//! - Markdown code fence wrapping (```json ... ```)
//! - Trailing commas before a closer
//! - Missing closing braces/brackets at the end of the output
//! - A sentence of prose before or after the object
//!
//! Anything that survives these repairs still has to pass schema
//! validation in the structured client.

use serde_json::Value;
use tracing::{debug, warn};

use crate::types::{Result, ValidationError, ValidationErrorKind};

const PREVIEW_CHARS: usize = 200;

/// Extract and parse the JSON object from a model response
pub fn extract_json_from_response(content: &str) -> Result<Value> {
    JsonRepairer.parse_or_repair(content)
}

/// Stateless repair strategies, applied in increasing order of intrusiveness
pub struct JsonRepairer;

impl JsonRepairer {
    pub fn parse_or_repair(&self, raw: &str) -> Result<Value> {
        let cleaned = preprocess(raw);

        if let Ok(value) = serde_json::from_str::<Value>(&cleaned) {
            return Ok(value);
        }

        debug!("Initial JSON parse failed, attempting repair");

        let repaired = balance_brackets(&fix_trailing_commas(&cleaned));
        if let Ok(value) = serde_json::from_str::<Value>(&repaired) {
            warn!("Model response needed JSON repair");
            return Ok(value);
        }

        if let Some(extracted) = extract_embedded_object(&cleaned) {
            let extracted = fix_trailing_commas(extracted);
            if let Ok(value) = serde_json::from_str::<Value>(&extracted) {
                warn!("JSON extracted from surrounding prose");
                return Ok(value);
            }
        }

        Err(ValidationError::new(
            ValidationErrorKind::Format,
            format!(
                "response is not valid JSON. Content preview: {}...",
                cleaned.chars().take(PREVIEW_CHARS).collect::<String>()
            ),
        )
        .into())
    }
}

fn preprocess(raw: &str) -> String {
    let s = raw.trim().trim_start_matches('\u{feff}');
    strip_code_fences(s).trim().to_string()
}

fn strip_code_fences(s: &str) -> &str {
    let mut result = s;

    if result.starts_with("```")
        && let Some(first_newline) = result.find('\n')
    {
        result = &result[first_newline + 1..];
    }

    if let Some(stripped) = result.trim_end().strip_suffix("```") {
        result = stripped.trim_end();
    }

    result
}

/// Drop commas that directly precede `]` or `}` outside strings
fn fix_trailing_commas(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len());
    let mut in_string = false;
    let mut escape = false;

    for (i, &ch) in chars.iter().enumerate() {
        if escape {
            escape = false;
            result.push(ch);
            continue;
        }

        match ch {
            '\\' if in_string => escape = true,
            '"' => in_string = !in_string,
            ',' if !in_string => {
                let next = chars[i + 1..].iter().find(|c| !c.is_whitespace());
                if matches!(next, Some(']') | Some('}')) {
                    continue;
                }
            }
            _ => {}
        }
        result.push(ch);
    }

    result
}

/// Close an unterminated string and append missing closers in nesting order
fn balance_brackets(s: &str) -> String {
    let mut stack = Vec::new();
    let mut in_string = false;
    let mut escape = false;

    for ch in s.chars() {
        if escape {
            escape = false;
            continue;
        }

        match ch {
            '\\' if in_string => escape = true,
            '"' => in_string = !in_string,
            '{' if !in_string => stack.push('}'),
            '[' if !in_string => stack.push(']'),
            '}' | ']' if !in_string => {
                stack.pop();
            }
            _ => {}
        }
    }

    let mut result = s.to_string();
    if in_string {
        result.push('"');
    }
    while let Some(closer) = stack.pop() {
        result.push(closer);
    }
    result
}

/// First balanced `{...}` span in mixed content
fn extract_embedded_object(s: &str) -> Option<&str> {
    let start = s.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape = false;

    for (i, ch) in s[start..].char_indices() {
        if escape {
            escape = false;
            continue;
        }

        match ch {
            '\\' if in_string => escape = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(&s[start..start + i + 1]);
                }
            }
            _ => {}
        }
    }

    None
}
