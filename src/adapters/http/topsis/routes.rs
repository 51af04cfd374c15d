//! Axum router configuration for TOPSIS endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{compute_topsis, health, normalize_weights, TopsisAppState};

/// Creates the TOPSIS API router.
///
/// Routes:
/// - `GET /api/health` - Liveness probe
/// - `POST /api/topsis` - Rank alternatives
/// - `POST /api/weights/normalize` - Preview normalized weights
pub fn topsis_routes() -> Router<TopsisAppState> {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/topsis", post(compute_topsis))
        .route("/api/weights/normalize", post(normalize_weights))
}

/// Creates the complete TOPSIS router with state applied.
pub fn topsis_router(state: TopsisAppState) -> Router {
    topsis_routes().with_state(state)
}
