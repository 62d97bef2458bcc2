//! Stage prompts
//!
//! Each stage sends a fixed instruction pair: a system message naming the
//! analyst role and output language, and a user message listing the fields
//! to extract followed by the subject text cut to its character budget.
//!
//! Schema field names stay in English. When the output language has a native
//! directive below, the system message carries it next to the English one.

use crate::ai::PromptBuilder;
use crate::config::AnalysisConfig;
use crate::types::truncate_chars;

const ARABIC_DIRECTIVE: &str =
    "يجب أن تكون جميع النتائج باللغة العربية الفصحى مع مراعاة الدقة التقنية.";

/// Directive in the output language itself, when one is known
fn native_directive(language: &str) -> Option<&'static str> {
    match language.trim().to_ascii_lowercase().as_str() {
        "arabic" | "ar" => Some(ARABIC_DIRECTIVE),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagePrompt {
    pub system: String,
    pub user: String,
}

/// Builds stage prompts from analysis settings
#[derive(Debug, Clone)]
pub struct PromptFactory {
    language: String,
    max_subject_chars: usize,
    max_comparison_chars: usize,
}

impl PromptFactory {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            language: config.output_language.clone(),
            max_subject_chars: config.max_subject_chars,
            max_comparison_chars: config.max_comparison_chars,
        }
    }

    pub fn basic(&self, text: &str) -> StagePrompt {
        StagePrompt {
            system: self.system(
                "software architect",
                "architecture analysis",
                "Analyze the session transcript and extract the architecture of the winning system in a precise, structured form.",
            ),
            user: self.single_subject(
                "Analyze the system architecture in the following transcript and extract:",
                &[
                    "Core system components with type, responsibility, technologies and criticality",
                    "Data flows between components with protocol and data type",
                    "The decision engine: negotiation protocol and optimization metric",
                    "Key innovations",
                    "Expected implementation challenges",
                ],
                "Transcript",
                text,
            ),
        }
    }

    pub fn failure(&self, text: &str) -> StagePrompt {
        StagePrompt {
            system: self.system(
                "site reliability engineer",
                "resilience engineering",
                "Analyze potential failure points, risks and critical vulnerabilities thoroughly. Propose realistic, practical mitigation strategies.",
            ),
            user: self.single_subject(
                "Analyze the potential failure points of this architecture in detail:",
                &[
                    "Critical vulnerabilities with probability, severity and mitigation",
                    "Single points of failure",
                    "Recovery time objective and disaster recovery plan",
                    "Redundancy requirements",
                ],
                "Architecture",
                text,
            ),
        }
    }

    pub fn integration(&self, text: &str) -> StagePrompt {
        StagePrompt {
            system: self.system(
                "integration architect",
                "technology compatibility",
                "Analyze the technology stack, compatibility concerns and integration points in depth. Consider security standards and regulatory compliance.",
            ),
            user: self.single_subject(
                "Analyze the compatibility and integration of this architecture:",
                &[
                    "Technology stack analysis with version ranges and deprecation risk",
                    "Integration patterns in use",
                    "Compatibility issues and integration points",
                    "API compatibility score between 0 and 1",
                    "Future migration path",
                    "Deprecated technologies and security compliance",
                ],
                "Architecture",
                text,
            ),
        }
    }

    pub fn performance(&self, text: &str) -> StagePrompt {
        StagePrompt {
            system: self.system(
                "performance engineer",
                "scalable system design",
                "Evaluate performance, scalability and possible optimizations in detail. Consider expected load and peak traffic.",
            ),
            user: self.single_subject(
                "Analyze the performance and scalability of this architecture:",
                &[
                    "Throughput estimate",
                    "Latency profile",
                    "Scalability metrics with a scalability factor of at least 1.0",
                    "Recommended scaling strategy",
                    "Load balancing approach",
                    "Caching strategy",
                    "Optimization opportunities",
                ],
                "Architecture",
                text,
            ),
        }
    }

    pub fn comparison(&self, text_a: &str, text_b: &str) -> StagePrompt {
        let budget = self.max_comparison_chars;
        StagePrompt {
            system: self.system(
                "architecture analyst",
                "comparative system analysis",
                "Compare the two systems in depth and give reliable, evidence-based recommendations.",
            ),
            user: PromptBuilder::new()
                .text("Compare the following two systems comprehensively.")
                .section("System A", truncate_chars(text_a, budget))
                .section("System B", truncate_chars(text_b, budget))
                .objectives(&[
                    "Performance differential",
                    "Complexity ratio of system A relative to system B",
                    "Cost efficiency comparison",
                    "Recommendation",
                    "Decision factors",
                    "Trade-offs",
                ])
                .build(),
        }
    }

    fn system(&self, expertise: &str, task: &str, mission: &str) -> String {
        let mut builder = PromptBuilder::new()
            .role(expertise, task)
            .text(mission)
            .custom(&format!(
                "Write every finding in {} while keeping technical terms precise.",
                self.language
            ));
        if let Some(native) = native_directive(&self.language) {
            builder = builder.custom(native);
        }
        builder.build()
    }

    fn single_subject(
        &self,
        intro: &str,
        objectives: &[&str],
        header: &str,
        text: &str,
    ) -> String {
        PromptBuilder::new()
            .text(intro)
            .objectives(objectives)
            .focus(
                "the text below",
                &[
                    "Do NOT invent components or technologies the text does not mention",
                ],
            )
            .section(header, truncate_chars(text, self.max_subject_chars))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factory(subject: usize, comparison: usize) -> PromptFactory {
        PromptFactory::new(&AnalysisConfig {
            max_subject_chars: subject,
            max_comparison_chars: comparison,
            ..Default::default()
        })
    }

    #[test]
    fn test_short_text_passed_through() {
        let text = "System X uses a Gateway component routing via REST to a Database";
        let prompt = factory(90_000, 45_000).basic(text);
        assert!(prompt.user.contains(text));
    }

    #[test]
    fn test_long_text_truncated_to_budget() {
        let text = format!("{}<TAIL>", "a".repeat(50));
        let prompt = factory(50, 45_000).failure(&text);

        assert!(prompt.user.contains(&"a".repeat(50)));
        assert!(!prompt.user.contains("<TAIL>"));
    }

    #[test]
    fn test_truncation_counts_characters() {
        let text = format!("{}<TAIL>", "é".repeat(10));
        let prompt = factory(10, 45_000).performance(&text);

        assert!(prompt.user.contains(&"é".repeat(10)));
        assert!(!prompt.user.contains("<TAIL>"));
    }

    #[test]
    fn test_comparison_uses_per_subject_budget() {
        let a = format!("{}<TAIL-A>", "x".repeat(20));
        let b = format!("{}<TAIL-B>", "y".repeat(20));
        let prompt = factory(90_000, 20).comparison(&a, &b);

        assert!(prompt.user.contains(&"x".repeat(20)));
        assert!(prompt.user.contains(&"y".repeat(20)));
        assert!(!prompt.user.contains("<TAIL-A>"));
        assert!(!prompt.user.contains("<TAIL-B>"));
        assert!(prompt.user.find("# System A").unwrap() < prompt.user.find("# System B").unwrap());
    }

    #[test]
    fn test_output_language_directive() {
        let factory = PromptFactory::new(&AnalysisConfig {
            output_language: "Arabic".to_string(),
            ..Default::default()
        });
        let system = factory.integration("text").system;
        assert!(system.contains("in Arabic"));
        assert!(system.contains(ARABIC_DIRECTIVE));
        assert!(system.find("in Arabic").unwrap() < system.find(ARABIC_DIRECTIVE).unwrap());
    }

    #[test]
    fn test_default_language_has_no_native_directive() {
        let system = factory(90_000, 45_000).basic("text").system;
        assert!(system.contains("in English"));
        assert!(!system.contains(ARABIC_DIRECTIVE));
        assert_eq!(native_directive(" AR "), Some(ARABIC_DIRECTIVE));
        assert_eq!(native_directive("French"), None);
    }
}
