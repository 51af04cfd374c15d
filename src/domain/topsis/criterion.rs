//! Criterion - A weighted, directional dimension of evaluation.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::lenient;
use crate::domain::foundation::ValidationError;

/// Direction of preference for a criterion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionType {
    /// Higher raw value is preferable.
    #[default]
    Benefit,
    /// Lower raw value is preferable.
    Cost,
}

impl CriterionType {
    /// Returns the canonical lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            CriterionType::Benefit => "benefit",
            CriterionType::Cost => "cost",
        }
    }
}

impl fmt::Display for CriterionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CriterionType {
    type Err = ValidationError;

    /// Parses case-insensitively, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "benefit" => Ok(CriterionType::Benefit),
            "cost" => Ok(CriterionType::Cost),
            other => Err(ValidationError::invalid_format(
                "type",
                format!("expected 'benefit' or 'cost', got '{}'", other),
            )),
        }
    }
}

// Absent, null or blank types default to benefit; unknown strings are rejected.
impl<'de> Deserialize<'de> for CriterionType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) if !raw.trim().is_empty() => raw.parse().map_err(serde::de::Error::custom),
            _ => Ok(CriterionType::default()),
        }
    }
}

/// A criterion alternatives are scored against.
///
/// `weight` is the raw, unnormalized preference weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub weight: f64,
    #[serde(default, rename = "type")]
    pub criterion_type: CriterionType,
}

impl Criterion {
    /// Creates a new criterion.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        weight: f64,
        criterion_type: CriterionType,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            weight,
            criterion_type,
        }
    }

    /// Creates a benefit criterion.
    pub fn benefit(code: impl Into<String>, name: impl Into<String>, weight: f64) -> Self {
        Self::new(code, name, weight, CriterionType::Benefit)
    }

    /// Creates a cost criterion.
    pub fn cost(code: impl Into<String>, name: impl Into<String>, weight: f64) -> Self {
        Self::new(code, name, weight, CriterionType::Cost)
    }
}
