//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors raised while checking caller-supplied decision input.
///
/// The TOPSIS engine itself never fails; these are produced by the
/// validation that runs before the engine is invoked.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Duplicate {field} code '{code}'")]
    DuplicateCode { field: String, code: String },

    #[error("{field} of '{code}' is not a finite number")]
    NonFiniteNumber { field: String, code: String },

    #[error("Criterion '{code}' has negative weight {weight}")]
    NegativeWeight { code: String, weight: f64 },

    #[error("Alternative '{code}' has {actual} values, expected {expected} (one per criterion)")]
    LengthMismatch {
        code: String,
        expected: usize,
        actual: usize,
    },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a duplicate code validation error.
    pub fn duplicate_code(field: impl Into<String>, code: impl Into<String>) -> Self {
        ValidationError::DuplicateCode {
            field: field.into(),
            code: code.into(),
        }
    }

    /// Creates a non-finite number validation error.
    pub fn non_finite(field: impl Into<String>, code: impl Into<String>) -> Self {
        ValidationError::NonFiniteNumber {
            field: field.into(),
            code: code.into(),
        }
    }

    /// Creates a negative weight validation error.
    pub fn negative_weight(code: impl Into<String>, weight: f64) -> Self {
        ValidationError::NegativeWeight {
            code: code.into(),
            weight,
        }
    }

    /// Creates a value-count mismatch validation error.
    pub fn length_mismatch(code: impl Into<String>, expected: usize, actual: usize) -> Self {
        ValidationError::LengthMismatch {
            code: code.into(),
            expected,
            actual,
        }
    }

    /// Name of the offending input field, for structured error details.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::DuplicateCode { field, .. }
            | ValidationError::NonFiniteNumber { field, .. } => field,
            ValidationError::NegativeWeight { .. } => "weight",
            ValidationError::LengthMismatch { .. } => "values",
        }
    }
}

/// Error codes surfaced to API clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    BadRequest,
    ValidationFailed,
    UniformCriteria,
    PayloadTooLarge,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::UniformCriteria => "UNIFORM_CRITERIA",
            ErrorCode::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
        };
        write!(f, "{}", s)
    }
}
