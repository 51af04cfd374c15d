//! Alternative - A candidate scored on every criterion.

use serde::{Deserialize, Serialize};

use super::lenient;

/// A candidate being ranked.
///
/// `values[j]` is the raw score against `criteria[j]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(deserialize_with = "lenient::numbers")]
    pub values: Vec<f64>,
}

impl Alternative {
    /// Creates a new alternative.
    pub fn new(code: impl Into<String>, name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            values,
        }
    }

    /// Raw value against the criterion at `index`, if present.
    pub fn value(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }
}
