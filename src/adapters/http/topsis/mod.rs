//! TOPSIS HTTP module - REST API endpoints for ranking alternatives.
//!
//! Endpoints:
//! - `GET /api/health` - Liveness probe
//! - `POST /api/topsis` - Rank alternatives against weighted criteria
//! - `POST /api/weights/normalize` - Preview normalized weights

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{
    ComputeTopsisRequest, ComputeTopsisResponse, ErrorResponse, HealthResponse,
    NormalizeWeightsRequest, NormalizeWeightsResponse,
};
pub use handlers::{TopsisApiError, TopsisAppState};
pub use routes::{topsis_router, topsis_routes};
