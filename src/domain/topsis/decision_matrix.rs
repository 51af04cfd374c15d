//! Decision Matrix - Validated criteria and alternatives ready for ranking.
//!
//! The engine trusts its input shape. Everything a caller must check before
//! invoking it lives here.

use serde::Serialize;
use std::collections::HashSet;

use super::{Alternative, Criterion};
use crate::domain::foundation::ValidationError;

/// Criteria x alternatives, checked for shape and uniqueness.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionMatrix {
    criteria: Vec<Criterion>,
    alternatives: Vec<Alternative>,
}

impl DecisionMatrix {
    /// Validates and wraps the input.
    ///
    /// # Errors
    /// - `EmptyField` when either set is empty or a code is blank
    /// - `DuplicateCode` when a criterion or alternative code repeats
    /// - `NonFiniteNumber` when a weight or value is NaN or infinite
    /// - `NegativeWeight` when a criterion weight is below zero
    /// - `LengthMismatch` when an alternative's value count differs from the
    ///   criteria count
    pub fn new(
        criteria: Vec<Criterion>,
        alternatives: Vec<Alternative>,
    ) -> Result<Self, ValidationError> {
        if criteria.is_empty() {
            return Err(ValidationError::empty_field("criteria"));
        }
        if alternatives.is_empty() {
            return Err(ValidationError::empty_field("alternatives"));
        }

        let mut seen = HashSet::new();
        for criterion in &criteria {
            if criterion.code.trim().is_empty() {
                return Err(ValidationError::empty_field("criterion.code"));
            }
            if !seen.insert(criterion.code.as_str()) {
                return Err(ValidationError::duplicate_code("criterion", &criterion.code));
            }
            if !criterion.weight.is_finite() {
                return Err(ValidationError::non_finite("weight", &criterion.code));
            }
            if criterion.weight < 0.0 {
                return Err(ValidationError::negative_weight(
                    &criterion.code,
                    criterion.weight,
                ));
            }
        }

        let expected = criteria.len();
        let mut seen = HashSet::new();
        for alternative in &alternatives {
            if alternative.code.trim().is_empty() {
                return Err(ValidationError::empty_field("alternative.code"));
            }
            if !seen.insert(alternative.code.as_str()) {
                return Err(ValidationError::duplicate_code(
                    "alternative",
                    &alternative.code,
                ));
            }
            if alternative.values.len() != expected {
                return Err(ValidationError::length_mismatch(
                    &alternative.code,
                    expected,
                    alternative.values.len(),
                ));
            }
            if alternative.values.iter().any(|x| !x.is_finite()) {
                return Err(ValidationError::non_finite("values", &alternative.code));
            }
        }

        Ok(Self {
            criteria,
            alternatives,
        })
    }

    /// Creates a builder for constructing a decision matrix.
    pub fn builder() -> DecisionMatrixBuilder {
        DecisionMatrixBuilder::new()
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }

    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }

    /// Raw values of the criterion column at `index`, in alternative order.
    pub fn column(&self, index: usize) -> Vec<f64> {
        self.alternatives
            .iter()
            .filter_map(|a| a.value(index))
            .collect()
    }
}

/// Builder for constructing DecisionMatrix instances.
#[derive(Debug, Default)]
pub struct DecisionMatrixBuilder {
    criteria: Vec<Criterion>,
    alternatives: Vec<Alternative>,
}

impl DecisionMatrixBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a benefit criterion.
    pub fn benefit(mut self, code: impl Into<String>, weight: f64) -> Self {
        let code = code.into();
        self.criteria.push(Criterion::benefit(code.clone(), code, weight));
        self
    }

    /// Adds a cost criterion.
    pub fn cost(mut self, code: impl Into<String>, weight: f64) -> Self {
        let code = code.into();
        self.criteria.push(Criterion::cost(code.clone(), code, weight));
        self
    }

    /// Adds a criterion of the given type.
    pub fn criterion(mut self, criterion: Criterion) -> Self {
        self.criteria.push(criterion);
        self
    }

    /// Adds an alternative named after its code.
    pub fn alternative(mut self, code: impl Into<String>, values: Vec<f64>) -> Self {
        let code = code.into();
        self.alternatives
            .push(Alternative::new(code.clone(), code, values));
        self
    }

    /// Validates and builds the matrix.
    pub fn build(self) -> Result<DecisionMatrix, ValidationError> {
        DecisionMatrix::new(self.criteria, self.alternatives)
    }
}
