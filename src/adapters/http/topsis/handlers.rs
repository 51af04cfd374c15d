//! HTTP handlers for TOPSIS endpoints.
//!
//! These handlers connect Axum routes to application layer handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::debug;

use crate::application::{
    ComputeRankingCommand, ComputeRankingError, ComputeRankingHandler, NormalizeWeightsHandler,
    NormalizeWeightsQuery,
};
use crate::domain::foundation::ValidationError;
use crate::domain::topsis::UniformCriteriaPolicy;

use super::dto::{
    ComputeTopsisRequest, ComputeTopsisResponse, ErrorResponse, HealthResponse,
    NormalizeWeightsRequest, NormalizeWeightsResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// TOPSIS API error that implements IntoResponse.
///
/// Every variant is a client error. The engine cannot fail once its input
/// has been accepted.
#[derive(Debug)]
pub enum TopsisApiError {
    BadRequest(String),
    PayloadTooLarge(String),
    Validation(ValidationError),
    UniformCriteria(Vec<String>),
}

impl IntoResponse for TopsisApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            TopsisApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            TopsisApiError::PayloadTooLarge(msg) => {
                (StatusCode::PAYLOAD_TOO_LARGE, ErrorResponse::payload_too_large(msg))
            }
            TopsisApiError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::validation(err.field(), err.to_string()),
            ),
            TopsisApiError::UniformCriteria(codes) => {
                let message = ComputeRankingError::UniformCriteria(codes.clone()).to_string();
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::uniform_criteria(&codes, message),
                )
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<ComputeRankingError> for TopsisApiError {
    fn from(error: ComputeRankingError) -> Self {
        match error {
            ComputeRankingError::Validation(err) => TopsisApiError::Validation(err),
            ComputeRankingError::UniformCriteria(codes) => TopsisApiError::UniformCriteria(codes),
        }
    }
}

impl From<ValidationError> for TopsisApiError {
    fn from(error: ValidationError) -> Self {
        TopsisApiError::Validation(error)
    }
}

/// Body syntax, shape and content-type failures all surface as 400. Only the
/// body size limit keeps its own status.
impl From<JsonRejection> for TopsisApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            TopsisApiError::PayloadTooLarge(rejection.body_text())
        } else {
            TopsisApiError::BadRequest(rejection.body_text())
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing TOPSIS handlers.
#[derive(Clone)]
pub struct TopsisAppState {
    pub ranking_handler: Arc<ComputeRankingHandler>,
    pub weights_handler: Arc<NormalizeWeightsHandler>,
}

impl TopsisAppState {
    pub fn new(policy: UniformCriteriaPolicy) -> Self {
        Self {
            ranking_handler: Arc::new(ComputeRankingHandler::new(policy)),
            weights_handler: Arc::new(NormalizeWeightsHandler::new()),
        }
    }
}

impl Default for TopsisAppState {
    fn default() -> Self {
        Self::new(UniformCriteriaPolicy::default())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::up())
}

/// POST /api/topsis
///
/// Validates the request, ranks the alternatives, and returns
/// `{ok: true, result, uniform_criteria}`.
pub async fn compute_topsis(
    State(state): State<TopsisAppState>,
    payload: Result<Json<ComputeTopsisRequest>, JsonRejection>,
) -> Result<Json<ComputeTopsisResponse>, TopsisApiError> {
    let Json(request) = payload.map_err(|rejection| {
        debug!("Rejected TOPSIS request body: {}", rejection.body_text());
        TopsisApiError::from(rejection)
    })?;

    let command = ComputeRankingCommand {
        criteria: request.criteria,
        alternatives: request.alternatives,
    };

    let outcome = state.ranking_handler.handle(command).map_err(|e| {
        debug!(error = %e, "TOPSIS request failed validation");
        TopsisApiError::from(e)
    })?;

    Ok(Json(ComputeTopsisResponse::from(outcome)))
}

/// POST /api/weights/normalize
///
/// Returns normalized weights for a criteria list.
pub async fn normalize_weights(
    State(state): State<TopsisAppState>,
    payload: Result<Json<NormalizeWeightsRequest>, JsonRejection>,
) -> Result<Json<NormalizeWeightsResponse>, TopsisApiError> {
    let Json(request) = payload?;

    let preview = state.weights_handler.handle(NormalizeWeightsQuery {
        criteria: request.criteria,
    })?;

    Ok(Json(NormalizeWeightsResponse::from(preview)))
}
