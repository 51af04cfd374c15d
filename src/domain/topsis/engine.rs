//! TOPSIS Engine - Ranks alternatives by closeness to the ideal solution.

use std::cmp::Ordering;

use super::{Alternative, AlternativeScore, Criterion, CriterionType, TopsisResult};

/// TOPSIS computation pipeline.
///
/// Stateless: every call builds its result from scratch.
pub struct TopsisEngine;

impl TopsisEngine {
    /// Runs the full pipeline and returns every intermediate product.
    ///
    /// # Algorithm
    /// 1. `W_j = w_j / Σw` (all zero when `Σw == 0`)
    /// 2. `d_j = sqrt(Σ_i x_ij²)`, `R_ij = x_ij / d_j` (divide by 1 when `d_j == 0`)
    /// 3. `Y_ij = R_ij * W_j`
    /// 4. Ideal best/worst per column: max/min for benefit, min/max for cost
    /// 5. `D+`, `D-` Euclidean distances to the ideals, `V = D- / (D+ + D-)`
    ///    (0 when both distances are 0)
    ///
    /// Ranking is a stable sort on `V` descending, so ties keep input order.
    ///
    /// # Preconditions
    /// Both sets non-empty and every alternative carries one value per
    /// criterion. Use [`DecisionMatrix`](super::DecisionMatrix) to check this
    /// first. An absent value is read as 0.
    pub fn compute(criteria: &[Criterion], alternatives: &[Alternative]) -> TopsisResult {
        let columns = criteria.len();

        let weights = Self::normalize_weights(criteria);
        let divisors = Self::column_divisors(columns, alternatives);

        let normalized: Vec<Vec<f64>> = alternatives
            .iter()
            .map(|alt| {
                (0..columns)
                    .map(|j| {
                        let divisor = if divisors[j] == 0.0 { 1.0 } else { divisors[j] };
                        raw(alt, j) / divisor
                    })
                    .collect()
            })
            .collect();

        let weighted: Vec<Vec<f64>> = normalized
            .iter()
            .map(|row| row.iter().zip(&weights).map(|(r, w)| r * w).collect())
            .collect();

        let (ideal_best, ideal_worst) = Self::ideal_solutions(criteria, &weighted);

        let scores: Vec<AlternativeScore> = alternatives
            .iter()
            .zip(&weighted)
            .map(|(alt, row)| {
                let d_plus = euclidean(row, &ideal_best);
                let d_minus = euclidean(row, &ideal_worst);
                let total = d_plus + d_minus;
                let closeness = if total == 0.0 { 0.0 } else { d_minus / total };

                AlternativeScore {
                    code: alt.code.clone(),
                    name: alt.name.clone(),
                    d_plus,
                    d_minus,
                    closeness,
                }
            })
            .collect();

        let ranking = Self::rank(&scores);

        TopsisResult {
            weights,
            divisors,
            normalized,
            weighted,
            ideal_best,
            ideal_worst,
            scores,
            ranking,
        }
    }

    /// Normalizes raw criterion weights to sum to 1.
    ///
    /// A zero total yields all-zero weights rather than NaN.
    pub fn normalize_weights(criteria: &[Criterion]) -> Vec<f64> {
        let total = Self::total_weight(criteria);
        if total == 0.0 {
            return vec![0.0; criteria.len()];
        }
        criteria.iter().map(|c| c.weight / total).collect()
    }

    /// Sum of raw criterion weights.
    pub fn total_weight(criteria: &[Criterion]) -> f64 {
        criteria.iter().fold(0.0, |acc, c| acc + c.weight)
    }

    /// Euclidean norm of each raw criterion column.
    ///
    /// Reported as computed; an all-zero column has divisor 0 here and is
    /// divided by 1 during normalization.
    fn column_divisors(columns: usize, alternatives: &[Alternative]) -> Vec<f64> {
        (0..columns)
            .map(|j| {
                alternatives
                    .iter()
                    .fold(0.0, |acc, alt| {
                        let x = raw(alt, j);
                        acc + x * x
                    })
                    .sqrt()
            })
            .collect()
    }

    /// Ideal-best and ideal-worst vectors over the weighted matrix.
    fn ideal_solutions(criteria: &[Criterion], weighted: &[Vec<f64>]) -> (Vec<f64>, Vec<f64>) {
        criteria
            .iter()
            .enumerate()
            .map(|(j, criterion)| {
                let column = weighted.iter().filter_map(|row| row.get(j).copied());
                let (min, max) = column.fold(
                    (f64::INFINITY, f64::NEG_INFINITY),
                    |(lo, hi), y| (lo.min(y), hi.max(y)),
                );

                match criterion.criterion_type {
                    CriterionType::Benefit => (max, min),
                    CriterionType::Cost => (min, max),
                }
            })
            .unzip()
    }

    /// Sorts scores by closeness, best first. Stable on ties.
    fn rank(scores: &[AlternativeScore]) -> Vec<AlternativeScore> {
        let mut ranking = scores.to_vec();
        ranking.sort_by(|a, b| {
            b.closeness
                .partial_cmp(&a.closeness)
                .unwrap_or(Ordering::Equal)
        });
        ranking
    }
}

fn raw(alternative: &Alternative, index: usize) -> f64 {
    alternative.value(index).unwrap_or(0.0)
}

fn euclidean(row: &[f64], ideal: &[f64]) -> f64 {
    row.iter()
        .zip(ideal)
        .fold(0.0, |acc, (y, i)| acc + (y - i) * (y - i))
        .sqrt()
}
