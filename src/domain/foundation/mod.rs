//! Foundation module - Shared domain primitives.
//!
//! Contains the error vocabulary shared by the domain and its callers.

mod errors;

pub use errors::{ErrorCode, ValidationError};
