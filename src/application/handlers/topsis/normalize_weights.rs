//! NormalizeWeightsHandler - Query handler for previewing normalized weights.
//!
//! Lets an editing client show `W` while criteria are still being entered,
//! before any alternatives exist.

use serde::Serialize;

use crate::domain::foundation::ValidationError;
use crate::domain::topsis::{Criterion, TopsisEngine};

/// Query for a weight preview.
#[derive(Debug, Clone)]
pub struct NormalizeWeightsQuery {
    pub criteria: Vec<Criterion>,
}

/// Normalized weights plus the raw total they were divided by.
///
/// A zero `total` means every weight is zero by definition, not by
/// coincidence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightPreview {
    pub weights: Vec<f64>,
    pub total: f64,
}

/// Handler for weight previews.
#[derive(Debug, Clone, Default)]
pub struct NormalizeWeightsHandler;

impl NormalizeWeightsHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: NormalizeWeightsQuery) -> Result<WeightPreview, ValidationError> {
        for criterion in &query.criteria {
            if !criterion.weight.is_finite() {
                return Err(ValidationError::non_finite("weight", &criterion.code));
            }
            if criterion.weight < 0.0 {
                return Err(ValidationError::negative_weight(&criterion.code, criterion.weight));
            }
        }

        Ok(WeightPreview {
            weights: TopsisEngine::normalize_weights(&query.criteria),
            total: TopsisEngine::total_weight(&query.criteria),
        })
    }
}
