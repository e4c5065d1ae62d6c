//! Tests for the /api/extract endpoint.

mod common;

use axum::http::StatusCode;
use chromaseed::models::AppConfig;
use common::fixtures;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_extract_two_halves() {
    let app = common::TestApp::new();
    let png = fixtures::split_png(200, 100, [255, 0, 0], [0, 0, 255]);

    let response = app.post_bytes("/api/extract", "image/png", png).await;

    common::assert_ok(&response);
    let json: serde_json::Value = response.json();
    assert_eq!(json["candidates"], serde_json::json!(["#F00000", "#0000F0"]));
    assert_eq!(json["primary"], "#F00000");
}

#[tokio::test]
async fn test_extract_prefers_accent_over_gray() {
    let app = common::TestApp::new();

    let response = app
        .post_bytes("/api/extract", "image/png", fixtures::gray_with_accent_png())
        .await;

    common::assert_ok(&response);
    let json: serde_json::Value = response.json();
    // Gray is most frequent but the accent scores higher
    assert_eq!(json["candidates"][0], "#808080");
    assert_eq!(json["primary"], "#306090");
}

#[tokio::test]
async fn test_extract_rgb_png() {
    let app = common::TestApp::new();
    let png = fixtures::encode_png_rgb(2, 2, &[0x33, 0x66, 0x99].repeat(4));

    let response = app.post_bytes("/api/extract", "image/png", png).await;

    common::assert_ok(&response);
    let json: serde_json::Value = response.json();
    assert_eq!(json["candidates"], serde_json::json!(["#306090"]));
}

#[tokio::test]
async fn test_extract_count_limits_candidates() {
    let app = common::TestApp::new();
    let png = fixtures::split_png(200, 100, [255, 0, 0], [0, 0, 255]);

    let response = app
        .post_bytes("/api/extract?count=1", "image/png", png)
        .await;

    common::assert_ok(&response);
    let json: serde_json::Value = response.json();
    assert_eq!(json["candidates"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_transparent_image_uses_default_seed() {
    let app = common::TestApp::new();

    let response = app
        .post_bytes("/api/extract", "image/png", fixtures::transparent_png(8, 8))
        .await;

    common::assert_ok(&response);
    let json: serde_json::Value = response.json();
    assert_eq!(json["candidates"], serde_json::json!([]));
    assert_eq!(json["primary"], fixtures::seeds::PURPLE);
}

#[tokio::test]
async fn test_extract_empty_body() {
    let app = common::TestApp::new();

    let response = app.post_bytes("/api/extract", "image/png", Vec::new()).await;

    common::assert_error(&response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_extract_not_a_png() {
    let app = common::TestApp::new();

    let response = app
        .post_bytes("/api/extract", "image/png", b"GIF89a not really".to_vec())
        .await;

    common::assert_error(&response, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_extract_bad_count() {
    let app = common::TestApp::new();

    for count in ["0", "33"] {
        let png = fixtures::solid_png(4, 4, [255, 0, 0]);
        let response = app
            .post_bytes(&format!("/api/extract?count={count}"), "image/png", png)
            .await;
        common::assert_error(&response, StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_extract_body_over_limit() {
    let config = AppConfig::parse("extraction:\n  max_image_bytes: 64\n").unwrap();
    let app = common::TestApp::with_config(config);
    let png = fixtures::split_png(200, 100, [255, 0, 0], [0, 0, 255]);
    assert!(png.len() > 64);

    let response = app.post_bytes("/api/extract", "image/png", png).await;

    common::assert_error(&response, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_extract_malformed_count_is_json() {
    let app = common::TestApp::new();
    let png = fixtures::solid_png(4, 4, [255, 0, 0]);

    let response = app
        .post_bytes("/api/extract?count=lots", "image/png", png)
        .await;

    common::assert_error(&response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_extract_does_not_change_theme() {
    let app = common::TestApp::new();
    let png = fixtures::solid_png(4, 4, [255, 0, 0]);

    let response = app.post_bytes("/api/extract", "image/png", png).await;
    common::assert_ok(&response);

    let theme: serde_json::Value = app.get("/api/theme").await.json();
    assert_eq!(theme["seed"], fixtures::seeds::PURPLE);
}
