//! Uniform criterion detection.
//!
//! A criterion on which every alternative has the same raw value carries no
//! discriminating signal. TOPSIS still produces numbers for it, so callers
//! check for this before trusting a ranking.

use serde::{Deserialize, Serialize};

use super::{Alternative, Criterion};

/// A criterion whose raw values are identical across all alternatives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniformCriterion {
    pub criterion_code: String,
    pub uniform_value: f64,
    pub reason: String,
}

impl UniformCriterion {
    /// Creates a new uniform criterion record.
    pub fn new(criterion_code: impl Into<String>, uniform_value: f64) -> Self {
        Self {
            criterion_code: criterion_code.into(),
            uniform_value,
            reason: "All alternatives have the same value".to_string(),
        }
    }
}

/// What a caller does when uniform criteria are found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UniformCriteriaPolicy {
    /// Rank anyway and report the uniform criteria alongside the result.
    #[default]
    Warn,
    /// Refuse to rank.
    Reject,
}

/// Finds criteria that don't distinguish between alternatives.
///
/// Runs over raw input values, not normalized ones.
///
/// # Edge Cases
/// - Fewer than two alternatives: returns empty Vec (no comparison possible)
/// - All criteria vary: returns empty Vec
pub fn find_uniform_criteria(
    criteria: &[Criterion],
    alternatives: &[Alternative],
) -> Vec<UniformCriterion> {
    let mut uniform = Vec::new();

    if alternatives.len() < 2 {
        return uniform;
    }

    for (j, criterion) in criteria.iter().enumerate() {
        let column: Vec<f64> = alternatives
            .iter()
            .map(|alt| alt.value(j).unwrap_or(0.0))
            .collect();

        let (min, max) = column.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), &x| (lo.min(x), hi.max(x)),
        );

        if min == max {
            uniform.push(UniformCriterion::new(criterion.code.clone(), min));
        }
    }

    uniform
}
