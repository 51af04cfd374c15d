//! Adapters - Connect the application layer to the outside world.
//!
//! - `http` - Axum REST API and its middleware stack

pub mod http;

pub use http::{app_router, TopsisAppState};
