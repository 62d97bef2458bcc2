//! Bounded numeric values
//!
//! Scores and factors are only constructible through their checked
//! constructors, and deserialization routes through the same checks.

use serde::{Deserialize, Serialize};

use crate::types::ValidationError;

fn check_unit_interval(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::out_of_range(field, "[0, 1]", value))
    }
}

fn check_at_least(field: &str, value: f64, min: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value >= min {
        Ok(())
    } else {
        Err(ValidationError::out_of_range(
            field,
            &format!(">= {}", min),
            value,
        ))
    }
}

/// A finite value in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Score(f64);

impl Score {
    pub fn new(field: &str, value: f64) -> Result<Self, ValidationError> {
        check_unit_interval(field, value)?;
        Ok(Self(value))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Score {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new("score", value)
    }
}

impl From<Score> for f64 {
    fn from(score: Score) -> Self {
        score.0
    }
}

/// A finite multiplier of at least 1.0
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ScalingFactor(f64);

impl ScalingFactor {
    pub fn new(field: &str, value: f64) -> Result<Self, ValidationError> {
        check_at_least(field, value, 1.0)?;
        Ok(Self(value))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for ScalingFactor {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new("scalability_factor", value)
    }
}

impl From<ScalingFactor> for f64 {
    fn from(factor: ScalingFactor) -> Self {
        factor.0
    }
}
