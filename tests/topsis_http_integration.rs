//! Integration tests for the TOPSIS HTTP API.
//!
//! These tests drive the fully layered router built from configuration:
//! 1. Ranking requests return the complete computation trace
//! 2. Form-style string values are coerced
//! 3. Invalid input is rejected with 400 and a typed error code
//! 4. The uniform-criteria policy follows configuration

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use spk_topsis::adapters::app_router;
use spk_topsis::config::AppConfig;
use spk_topsis::domain::topsis::UniformCriteriaPolicy;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app() -> Router {
    app_router(&AppConfig::default()).unwrap()
}

fn app_with_policy(policy: UniformCriteriaPolicy) -> Router {
    let mut config = AppConfig::default();
    config.analysis.uniform_criteria_policy = policy;
    app_router(&config).unwrap()
}

async fn post(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn drinks_criteria() -> Value {
    json!([
        {"code": "C1", "name": "Harga", "weight": 5, "type": "cost"},
        {"code": "C2", "name": "Brand", "weight": 4, "type": "benefit"},
        {"code": "C3", "name": "Komposisi", "weight": 3, "type": "benefit"},
        {"code": "C4", "name": "Kadar Alkohol", "weight": 2, "type": "benefit"},
        {"code": "C5", "name": "Rasa", "weight": 1, "type": "benefit"}
    ])
}

fn drinks_problem() -> Value {
    json!({
        "criteria": drinks_criteria(),
        "alternatives": [
            {"code": "A1", "name": "Wine Merah", "values": [4, 4, 2, 3, 3]},
            {"code": "A2", "name": "Vodka", "values": [1, 5, 1, 1, 4]},
            {"code": "A3", "name": "Baileys", "values": [3, 2, 5, 1, 1]},
            {"code": "A4", "name": "Tequila", "values": [2, 4, 1, 4, 5]},
            {"code": "A5", "name": "Aperol", "values": [5, 1, 1, 5, 3]}
        ]
    })
}

fn as_f64(value: &Value) -> f64 {
    value.as_f64().unwrap()
}

// =============================================================================
// Ranking
// =============================================================================

#[tokio::test]
async fn ranks_drinks_fixture() {
    let (status, json) = post(app(), "/api/topsis", drinks_problem()).await;

    assert_eq!(status, StatusCode::OK);
    let result = &json["result"];

    let weights: Vec<f64> = result["W"].as_array().unwrap().iter().map(as_f64).collect();
    let expected = [5.0 / 15.0, 4.0 / 15.0, 3.0 / 15.0, 2.0 / 15.0, 1.0 / 15.0];
    for (w, e) in weights.iter().zip(expected.iter()) {
        assert!((w - e).abs() < 1e-9);
    }

    assert!((as_f64(&result["divisors"][0]) - 55f64.sqrt()).abs() < 1e-9);

    let codes: Vec<&str> = result["ranking"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["A2", "A4", "A3", "A1", "A5"]);

    let top = as_f64(&result["ranking"][0]["v"]);
    assert!((top - 0.586385).abs() < 1e-4);
    assert_eq!(result["ranking"][0]["name"], "Vodka");
}

#[tokio::test]
async fn dv_list_keeps_input_order() {
    let (_, json) = post(app(), "/api/topsis", drinks_problem()).await;

    let codes: Vec<&str> = json["result"]["dvList"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["A1", "A2", "A3", "A4", "A5"]);
}

#[tokio::test]
async fn cost_ideal_uses_minimum() {
    let (_, json) = post(app(), "/api/topsis", drinks_problem()).await;
    let result = &json["result"];

    let c1_min = result["Y"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| as_f64(&row[0]))
        .fold(f64::INFINITY, f64::min);
    assert!((as_f64(&result["idealPlus"][0]) - c1_min).abs() < 1e-12);
}

#[tokio::test]
async fn string_values_are_coerced() {
    let (status, json) = post(
        app(),
        "/api/topsis",
        json!({
            "criteria": [
                {"code": "C1", "name": "Harga", "weight": "5", "type": "cost"},
                {"code": "C2", "name": "Brand", "weight": "abc", "type": "benefit"}
            ],
            "alternatives": [
                {"code": "A1", "name": "Wine Merah", "values": ["4", "4"]},
                {"code": "A2", "name": "Vodka", "values": ["1", ""]}
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["result"]["W"], json!([1.0, 0.0]));
    assert_eq!(json["result"]["ranking"][0]["code"], "A2");
}

#[tokio::test]
async fn success_body_carries_ok_flag() {
    let (status, json) = post(app(), "/api/topsis", drinks_problem()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["ok"], true);
    assert!(json["result"]["ranking"].is_array());
}

#[tokio::test]
async fn blank_type_and_loose_numbers_follow_form_rules() {
    let (status, json) = post(
        app(),
        "/api/topsis",
        json!({
            "criteria": [
                {"code": "C1", "name": "Brand", "weight": "0x10", "type": ""},
                {"code": "C2", "name": "Rasa", "weight": [16], "type": "benefit"}
            ],
            "alternatives": [
                {"code": "A1", "name": "Wine Merah", "values": [["2"], 1]},
                {"code": "A2", "name": "Vodka", "values": ["0b100", 3]}
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["result"]["W"], json!([0.5, 0.5]));
    assert_eq!(json["result"]["ranking"][0]["code"], "A2");
    assert_eq!(json["result"]["ranking"][0]["v"], 1.0);
}

#[tokio::test]
async fn zero_weights_keep_input_order() {
    let mut body = drinks_problem();
    for criterion in body["criteria"].as_array_mut().unwrap() {
        criterion["weight"] = json!(0);
    }

    let (status, json) = post(app(), "/api/topsis", body).await;

    assert_eq!(status, StatusCode::OK);
    let ranking = json["result"]["ranking"].as_array().unwrap();
    for (i, row) in ranking.iter().enumerate() {
        assert_eq!(row["code"], format!("A{}", i + 1));
        assert_eq!(as_f64(&row["v"]), 0.0);
    }
}

// =============================================================================
// Rejections
// =============================================================================

#[tokio::test]
async fn length_mismatch_is_rejected() {
    let mut body = drinks_problem();
    body["alternatives"][2]["values"] = json!([3, 2, 5, 1]);

    let (status, json) = post(app(), "/api/topsis", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_FAILED");
    assert_eq!(json["ok"], false);
    assert_eq!(
        json["error"],
        "Alternative 'A3' has 4 values, expected 5 (one per criterion)"
    );
}

#[tokio::test]
async fn missing_arrays_are_rejected() {
    let (status, json) = post(app(), "/api/topsis", json!({"criteria": drinks_criteria()})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn non_array_values_are_rejected() {
    let mut body = drinks_problem();
    body["alternatives"][0]["values"] = json!("4,4,2,3,3");

    let (status, _) = post(app(), "/api/topsis", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_alternatives_are_rejected() {
    let (status, json) = post(
        app(),
        "/api/topsis",
        json!({"criteria": drinks_criteria(), "alternatives": []}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn unknown_criterion_type_is_rejected() {
    let mut body = drinks_problem();
    body["criteria"][1]["type"] = json!("profit");

    let (status, _) = post(app(), "/api/topsis", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Uniform Criteria Policy
// =============================================================================

fn uniform_c1_problem() -> Value {
    let mut body = drinks_problem();
    for alternative in body["alternatives"].as_array_mut().unwrap() {
        alternative["values"][0] = json!(3);
    }
    body
}

#[tokio::test]
async fn warn_policy_reports_uniform_criteria() {
    let (status, json) = post(
        app_with_policy(UniformCriteriaPolicy::Warn),
        "/api/topsis",
        uniform_c1_problem(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["uniform_criteria"][0]["criterion_code"], "C1");
    assert_eq!(as_f64(&json["uniform_criteria"][0]["uniform_value"]), 3.0);
    assert!((as_f64(&json["result"]["divisors"][0]) - 45f64.sqrt()).abs() < 1e-9);
}

#[tokio::test]
async fn reject_policy_refuses_uniform_criteria() {
    let (status, json) = post(
        app_with_policy(UniformCriteriaPolicy::Reject),
        "/api/topsis",
        uniform_c1_problem(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "UNIFORM_CRITERIA");
    assert_eq!(json["details"]["criteria"], json!(["C1"]));
}

// =============================================================================
// Weight Preview
// =============================================================================

#[tokio::test]
async fn weight_preview_matches_ranking_weights() {
    let (status, preview) = post(
        app(),
        "/api/weights/normalize",
        json!({"criteria": drinks_criteria()}),
    )
    .await;
    let (_, ranking) = post(app(), "/api/topsis", drinks_problem()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_f64(&preview["total"]), 15.0);
    assert_eq!(preview["weights"], ranking["result"]["W"]);
}
