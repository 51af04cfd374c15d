//! TOPSIS result bundle.
//!
//! Field names on the wire follow the established client contract
//! (`W`, `R`, `Y`, `idealPlus`, `dvList`, ...), so each field is renamed
//! explicitly.

use serde::{Deserialize, Serialize};

/// Distances and closeness score for one alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeScore {
    pub code: String,
    pub name: String,
    /// Euclidean distance to the ideal-best vector.
    #[serde(rename = "dPlus")]
    pub d_plus: f64,
    /// Euclidean distance to the ideal-worst vector.
    #[serde(rename = "dMinus")]
    pub d_minus: f64,
    /// Closeness to the ideal solution, in `[0, 1]`. Higher is better.
    #[serde(rename = "v")]
    pub closeness: f64,
}

/// Every intermediate and final product of one TOPSIS run.
///
/// Built fresh per invocation; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopsisResult {
    /// Normalized weights, one per criterion.
    #[serde(rename = "W")]
    pub weights: Vec<f64>,
    /// Euclidean column norms of the raw matrix.
    pub divisors: Vec<f64>,
    /// Vector-normalized matrix, rows by alternative.
    #[serde(rename = "R")]
    pub normalized: Vec<Vec<f64>>,
    /// Weighted normalized matrix, rows by alternative.
    #[serde(rename = "Y")]
    pub weighted: Vec<Vec<f64>>,
    #[serde(rename = "idealPlus")]
    pub ideal_best: Vec<f64>,
    #[serde(rename = "idealMinus")]
    pub ideal_worst: Vec<f64>,
    /// Scores in input order.
    #[serde(rename = "dvList")]
    pub scores: Vec<AlternativeScore>,
    /// Scores sorted by closeness, best first.
    pub ranking: Vec<AlternativeScore>,
}

impl TopsisResult {
    /// The top-ranked alternative, if any.
    pub fn best(&self) -> Option<&AlternativeScore> {
        self.ranking.first()
    }

    /// Looks up the score of an alternative by code.
    pub fn score_of(&self, code: &str) -> Option<&AlternativeScore> {
        self.scores.iter().find(|s| s.code == code)
    }

    /// 1-based rank of an alternative, if present.
    pub fn rank_of(&self, code: &str) -> Option<usize> {
        self.ranking
            .iter()
            .position(|s| s.code == code)
            .map(|i| i + 1)
    }
}
