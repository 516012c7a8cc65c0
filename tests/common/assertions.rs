//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert JSON error body carries the expected status field
pub fn assert_json_status(response: &TestResponse, expected_status: u16) {
    let json: serde_json::Value = response.json();
    assert_eq!(
        json["status"].as_u64(),
        Some(expected_status as u64),
        "Expected JSON status {}, got {:?}. Full response: {}",
        expected_status,
        json["status"],
        serde_json::to_string_pretty(&json).unwrap()
    );
    assert!(json["error"].is_string(), "Expected an error message");
}

/// Assert a mix response is a valid recipe
pub fn assert_valid_recipe(response: &TestResponse) -> serde_json::Value {
    assert_ok(response);
    let json: serde_json::Value = response.json();

    let paints = json["paints"].as_array().expect("Expected paints array");
    assert!(!paints.is_empty(), "Recipe should list at least one paint");

    let total: f64 = paints
        .iter()
        .map(|p| p["percentage"].as_f64().expect("percentage"))
        .sum();
    assert!(
        (total - 100.0).abs() < 0.1,
        "Percentages should sum to 100, got {total}"
    );
    for paint in paints {
        assert!(paint["percentage"].as_f64().unwrap() > 0.0);
        assert!(paint["id"].is_string() && paint["hex"].is_string());
    }

    let delta_e = json["delta_e"].as_f64().expect("delta_e");
    assert_eq!(
        json["requires_color_correction"].as_bool(),
        Some(delta_e > 1.5),
        "Correction flag must follow ΔE {delta_e}"
    );

    json
}
