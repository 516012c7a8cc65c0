//! Integration tests for /api/analyze.

mod common;

use axum::http::StatusCode;
use common::fixtures::hexes;
use common::{assert_json_status, assert_ok, assert_status, TestApp};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_analyze_exact_dataset_color() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/analyze", &format!(r#"{{"hex":"{}"}}"#, hexes::CADMIUM_RED))
        .await;
    assert_ok(&response);

    let json: serde_json::Value = response.json();
    assert_eq!(json["name"], "Cadmium Red");
    assert_eq!(json["match"]["name"], "Cadmium Red");
    assert_eq!(json["match"]["category"], "red");
    assert_eq!(json["match"]["pantone"], "485 C");
    assert!(json["match"]["delta_e"].as_f64().unwrap() < 0.01);
}

#[tokio::test]
async fn test_analyze_breakdown() {
    let app = TestApp::new();

    let response = app.post_json("/api/analyze", r##"{"hex":"#e30022"}"##).await;
    assert_ok(&response);

    let json: serde_json::Value = response.json();
    let breakdown = &json["breakdown"];
    assert_eq!(breakdown["hex"], "#e30022");
    assert_eq!(breakdown["rgb"], serde_json::json!({"r": 227, "g": 0, "b": 34}));
    assert_eq!(breakdown["hsl"]["h"], 351);
    assert_eq!(breakdown["cmyk"]["m"], 100);
    assert!((breakdown["lab"]["l"].as_f64().unwrap() - 47.56).abs() < 0.05);
}

#[tokio::test]
async fn test_analyze_share_text() {
    let app = TestApp::new();

    let response = app.post_json("/api/analyze", r##"{"hex":"#E30022"}"##).await;
    let json: serde_json::Value = response.json();
    let share = json["share_text"].as_str().unwrap();

    assert!(share.starts_with("Name: Cadmium Red\nHex: #e30022\nRGB: 227, 0, 34\nLAB: "));
}

#[tokio::test]
async fn test_analyze_rgb_input() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/analyze", r#"{"rgb":{"r":255,"g":255,"b":255}}"#)
        .await;
    assert_ok(&response);

    let json: serde_json::Value = response.json();
    assert_eq!(json["name"], "Titanium White");
    assert_eq!(json["match"]["alternate_names"], serde_json::json!(["Pure White"]));
}

#[tokio::test]
async fn test_analyze_off_table_color_gets_a_name() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/analyze", &format!(r#"{{"hex":"{}"}}"#, hexes::DUSTY_ROSE))
        .await;
    assert_ok(&response);

    let json: serde_json::Value = response.json();
    let name = json["name"].as_str().unwrap();
    assert!(!name.is_empty());
    assert!(json["match"]["delta_e"].as_f64().unwrap() > 0.0);
}

#[tokio::test]
async fn test_analyze_invalid_hex() {
    let app = TestApp::new();

    for body in [r##"{"hex":"#FFF"}"##, r##"{"hex":"#GG0000"}"##, r#"{"hex":""}"#] {
        let response = app.post_json("/api/analyze", body).await;
        assert_status(&response, StatusCode::BAD_REQUEST);
        assert_json_status(&response, 400);
    }
}

#[tokio::test]
async fn test_analyze_requires_one_color() {
    let app = TestApp::new();

    let response = app.post_json("/api/analyze", "{}").await;
    assert_status(&response, StatusCode::BAD_REQUEST);
    assert_json_status(&response, 400);

    let response = app
        .post_json("/api/analyze", r#"{"lab":{"l":50.0,"a":0.0,"b":0.0}}"#)
        .await;
    assert_status(&response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_analyze_malformed_json() {
    let app = TestApp::new();

    let response = app.post_json("/api/analyze", "{not json").await;
    assert_status(&response, StatusCode::BAD_REQUEST);

    // Channel out of range fails deserialization
    let response = app
        .post_json("/api/analyze", r#"{"rgb":{"r":300,"g":0,"b":0}}"#)
        .await;
    assert_status(&response, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_analyze_against_small_dataset() {
    let dataset = common::fixtures::temp_file(&common::fixtures::small_dataset());
    let app = TestApp::with_dataset(dataset.path().to_path_buf());

    let response = app.post_json("/api/analyze", r##"{"hex":"#FF0000"}"##).await;
    assert_ok(&response);

    let json: serde_json::Value = response.json();
    assert_eq!(json["name"], "Signal Red");
    assert_eq!(json["match"]["ral"], "RAL 3020");
}
