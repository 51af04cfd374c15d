//! HTTP DTOs for TOPSIS endpoints.
//!
//! Request bodies reuse the domain input types, whose deserializers already
//! apply lenient numeric coercion. Every response body carries an `ok` flag,
//! and failures put their human-readable text in `error`.

pub use crate::application::{RankingOutcome, WeightPreview};
pub use crate::domain::topsis::{Alternative, Criterion, TopsisResult, UniformCriterion};

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ErrorCode;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/topsis`.
#[derive(Debug, Clone, Deserialize)]
pub struct ComputeTopsisRequest {
    pub criteria: Vec<Criterion>,
    pub alternatives: Vec<Alternative>,
}

/// Body of `POST /api/weights/normalize`.
#[derive(Debug, Clone, Deserialize)]
pub struct NormalizeWeightsRequest {
    pub criteria: Vec<Criterion>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub message: String,
}

impl HealthResponse {
    pub fn up() -> Self {
        Self {
            ok: true,
            message: "API is running".to_string(),
        }
    }
}

/// Body of a successful `POST /api/topsis`: `{ok, result, uniform_criteria}`.
#[derive(Debug, Clone, Serialize)]
pub struct ComputeTopsisResponse {
    pub ok: bool,
    #[serde(flatten)]
    pub outcome: RankingOutcome,
}

impl From<RankingOutcome> for ComputeTopsisResponse {
    fn from(outcome: RankingOutcome) -> Self {
        Self { ok: true, outcome }
    }
}

/// Body of a successful `POST /api/weights/normalize`: `{ok, weights, total}`.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizeWeightsResponse {
    pub ok: bool,
    #[serde(flatten)]
    pub preview: WeightPreview,
}

impl From<WeightPreview> for NormalizeWeightsResponse {
    fn from(preview: WeightPreview) -> Self {
        Self { ok: true, preview }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub code: String,
    /// Human-readable message.
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            code: code.to_string(),
            error: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, message)
    }

    pub fn payload_too_large(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::PayloadTooLarge, message)
    }

    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self {
            details: Some(serde_json::json!({ "field": field })),
            ..Self::new(ErrorCode::ValidationFailed, message)
        }
    }

    pub fn uniform_criteria(codes: &[String], message: impl Into<String>) -> Self {
        Self {
            details: Some(serde_json::json!({ "criteria": codes })),
            ..Self::new(ErrorCode::UniformCriteria, message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_deserializes_form_style_values() {
        let request: ComputeTopsisRequest = serde_json::from_value(json!({
            "criteria": [
                {"code": "C1", "name": "Harga", "weight": "5", "type": "COST"},
                {"code": "C2", "name": "Brand", "weight": 2, "type": "benefit"}
            ],
            "alternatives": [
                {"code": "A1", "name": "Vodka", "values": ["1", ""]}
            ]
        }))
        .unwrap();

        assert_eq!(request.criteria[0].weight, 5.0);
        assert_eq!(request.alternatives[0].values, vec![1.0, 0.0]);
    }

    #[test]
    fn request_requires_arrays() {
        let result: Result<ComputeTopsisRequest, _> =
            serde_json::from_value(json!({"criteria": {}, "alternatives": []}));
        assert!(result.is_err());
    }

    #[test]
    fn error_response_omits_empty_details() {
        let json = serde_json::to_value(ErrorResponse::bad_request("nope")).unwrap();
        assert_eq!(json["ok"], false);
        assert_eq!(json["code"], "BAD_REQUEST");
        assert_eq!(json["error"], "nope");
        assert!(json.get("details").is_none());
    }

    #[test]
    fn weight_preview_response_is_flat() {
        let response = NormalizeWeightsResponse::from(WeightPreview {
            weights: vec![0.25, 0.75],
            total: 4.0,
        });
        let json = serde_json::to_value(response).unwrap();

        assert_eq!(json, json!({"ok": true, "weights": [0.25, 0.75], "total": 4.0}));
    }

    #[test]
    fn validation_error_response_carries_field() {
        let json = serde_json::to_value(ErrorResponse::validation("values", "bad")).unwrap();
        assert_eq!(json["code"], "VALIDATION_FAILED");
        assert_eq!(json["details"]["field"], "values");
    }
}
