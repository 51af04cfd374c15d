//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (errors, error codes)
//! - `topsis` - Pure domain services for TOPSIS ranking

pub mod foundation;
pub mod topsis;
