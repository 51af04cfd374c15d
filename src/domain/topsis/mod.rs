//! TOPSIS Module - Multi-criteria ranking by similarity to the ideal solution.
//!
//! Pure domain services: no I/O, no shared state, every call independent.
//!
//! # Components
//!
//! - `Criterion` / `CriterionType` - weighted benefit or cost dimension
//! - `Alternative` - candidate with one raw value per criterion
//! - `DecisionMatrix` - caller-side shape and uniqueness validation
//! - `TopsisEngine` - the five-stage pipeline and stable ranking
//! - `find_uniform_criteria` - detects criteria with no discriminating signal
//!
//! # Pipeline
//!
//! weight normalization → vector normalization → weighted matrix →
//! ideal solutions → distances and closeness → ranking

mod alternative;
mod criterion;
mod decision_matrix;
mod engine;
pub mod lenient;
mod result;
mod uniform_criteria;

pub use alternative::Alternative;
pub use criterion::{Criterion, CriterionType};
pub use decision_matrix::{DecisionMatrix, DecisionMatrixBuilder};
pub use engine::TopsisEngine;
pub use result::{AlternativeScore, TopsisResult};
pub use uniform_criteria::{find_uniform_criteria, UniformCriteriaPolicy, UniformCriterion};
