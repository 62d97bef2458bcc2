//! Stage names and subject text.

use serde::Serialize;

use crate::types::{ArchError, Result};

/// Analysis stages exposed to collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Basic,
    Failure,
    Performance,
    Integration,
    Comparative,
    Comprehensive,
}

impl Stage {
    pub const ALL: [Stage; 6] = [
        Stage::Basic,
        Stage::Failure,
        Stage::Performance,
        Stage::Integration,
        Stage::Comparative,
        Stage::Comprehensive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Basic => "basic",
            Stage::Failure => "failure",
            Stage::Performance => "performance",
            Stage::Integration => "integration",
            Stage::Comparative => "comparative",
            Stage::Comprehensive => "comprehensive",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Stage::Basic => "Components, data flows, decision engine, innovations and challenges",
            Stage::Failure => "Critical vulnerabilities, single points of failure and recovery",
            Stage::Performance => "Throughput, latency, scalability metrics and scaling strategy",
            Stage::Integration => {
                "Technology stack compatibility, integration patterns and compliance"
            }
            Stage::Comparative => "Side-by-side comparison of two systems (needs a second subject)",
            Stage::Comprehensive => "All single-subject stages plus an optional comparison",
        }
    }

    /// Whether the stage needs a second subject text
    pub fn requires_comparison(&self) -> bool {
        matches!(self, Stage::Comparative)
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Stage {
    type Err = ArchError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase();
        Stage::ALL
            .into_iter()
            .find(|stage| stage.as_str() == normalized)
            .ok_or_else(|| ArchError::UnknownStage(s.to_string()))
    }
}

// =============================================================================
// Subject Text
// =============================================================================

/// Non-empty, decoded subject text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectText(String);

impl SubjectText {
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ArchError::MalformedInput(
                "subject text is empty".to_string(),
            ));
        }
        Ok(Self(text))
    }

    /// Decode raw bytes as UTF-8, stripping a leading BOM
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let text = String::from_utf8(bytes).map_err(|e| {
            ArchError::MalformedInput(format!(
                "subject text is not valid UTF-8 (invalid byte at offset {})",
                e.utf8_error().valid_up_to()
            ))
        })?;
        let text = match text.strip_prefix('\u{feff}') {
            Some(stripped) => stripped.to_string(),
            None => text,
        };
        Self::new(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ErrorClass;

    #[test]
    fn test_stage_parse_roundtrip() {
        for stage in Stage::ALL {
            assert_eq!(stage.as_str().parse::<Stage>().unwrap(), stage);
        }
        assert_eq!(" Basic ".parse::<Stage>().unwrap(), Stage::Basic);
    }

    #[test]
    fn test_unknown_stage() {
        let err = "security".parse::<Stage>().unwrap_err();
        assert_eq!(err.class(), ErrorClass::UnknownStage);
        assert!(err.to_string().contains("security"));
    }

    #[test]
    fn test_subject_rejects_blank() {
        let err = SubjectText::new("  \n\t").unwrap_err();
        assert_eq!(err.class(), ErrorClass::MalformedInput);
    }

    #[test]
    fn test_subject_rejects_invalid_utf8() {
        let err = SubjectText::from_bytes(vec![0x53, 0x79, 0xff, 0xfe]).unwrap_err();
        assert_eq!(err.class(), ErrorClass::MalformedInput);
        assert!(err.to_string().contains("offset 2"));
    }

    #[test]
    fn test_subject_strips_bom() {
        let subject = SubjectText::from_bytes("\u{feff}System X".as_bytes().to_vec()).unwrap();
        assert_eq!(subject.as_str(), "System X");
    }
}
