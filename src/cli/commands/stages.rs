//! Stages Command
//!
//! Lists the analysis stages accepted by `archscope analyze --stage`.

use console::style;
use serde::Serialize;

use crate::analysis::Stage;
use crate::types::{ArchError, Result};

#[derive(Debug, Serialize)]
struct StageInfo {
    name: Stage,
    description: &'static str,
    requires_comparison: bool,
}

fn stage_infos() -> Vec<StageInfo> {
    Stage::ALL
        .into_iter()
        .map(|stage| StageInfo {
            name: stage,
            description: stage.description(),
            requires_comparison: stage.requires_comparison(),
        })
        .collect()
}

pub fn render(format: &str) -> Result<String> {
    match format {
        "json" => Ok(serde_json::to_string_pretty(&stage_infos())?),
        "text" => {
            let mut text = String::new();
            for info in stage_infos() {
                text.push_str(&format!(
                    "{:<15} {}\n",
                    info.name.as_str(),
                    info.description
                ));
            }
            Ok(text)
        }
        other => Err(ArchError::Config(format!(
            "Unknown format: {}. Valid values: text, json",
            other
        ))),
    }
}

pub fn run(format: &str) -> Result<()> {
    let rendered = render(format)?;
    if format == "text" {
        println!("{}", style("Analysis stages").bold());
    }
    print!("{}", rendered);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_lists_every_stage() {
        let text = render("text").unwrap();
        assert_eq!(text.lines().count(), 6);
        assert!(text.starts_with("basic"));
        assert!(text.contains("comprehensive"));
    }

    #[test]
    fn test_json_marks_comparative() {
        let value: serde_json::Value = serde_json::from_str(&render("json").unwrap()).unwrap();
        let comparative = value
            .as_array()
            .unwrap()
            .iter()
            .find(|s| s["name"] == "comparative")
            .unwrap();
        assert_eq!(comparative["requires_comparison"], true);
    }

    #[test]
    fn test_unknown_format() {
        assert!(render("csv").is_err());
    }
}
