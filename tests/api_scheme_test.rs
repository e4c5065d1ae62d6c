//! Tests for the /api/scheme endpoint.

mod common;

use axum::http::StatusCode;
use chromaseed::models::AppConfig;
use common::fixtures::seeds;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_scheme_for_seed() {
    let app = common::TestApp::new();

    let response = app.get("/api/scheme?seed=%236750A4").await;

    common::assert_ok(&response);
    let json: serde_json::Value = response.json();
    assert_eq!(json["seed"], seeds::PURPLE);
    assert_eq!(json["dark"], false);

    let roles = common::assert_valid_roles(&json["roles"]);
    assert_eq!(roles["primary"], seeds::PURPLE);
    assert_eq!(roles["error"], "#B3261E");
    assert_eq!(roles["onError"], "#FFFFFF");
}

#[tokio::test]
async fn test_scheme_roles_keep_order() {
    let app = common::TestApp::new();

    let response = app.get("/api/scheme?seed=%236750A4").await;

    common::assert_ok(&response);
    let text = response.text();
    let primary = text.find("\"primary\"").expect("primary role");
    let on_primary = text.find("\"onPrimary\"").expect("onPrimary role");
    let outline = text.find("\"outline\"").expect("outline role");
    assert!(primary < on_primary && on_primary < outline);
}

#[tokio::test]
async fn test_dark_scheme() {
    let app = common::TestApp::new();

    let response = app.get("/api/scheme?seed=%236750A4&dark=true").await;

    common::assert_ok(&response);
    let json: serde_json::Value = response.json();
    assert_eq!(json["dark"], true);
    let roles = common::assert_valid_roles(&json["roles"]);
    assert_eq!(roles["error"], "#F2B8B5");
    assert_eq!(roles["onError"], "#601410");
}

#[tokio::test]
async fn test_seed_without_hash() {
    let app = common::TestApp::new();

    let response = app.get("/api/scheme?seed=ff0000").await;

    common::assert_ok(&response);
    let json: serde_json::Value = response.json();
    assert_eq!(json["seed"], seeds::RED);
}

#[tokio::test]
async fn test_scheme_defaults_to_current_theme() {
    let app = common::TestApp::new();

    let response = app.get("/api/scheme").await;

    common::assert_ok(&response);
    let json: serde_json::Value = response.json();
    assert_eq!(json["seed"], seeds::PURPLE);
    assert_eq!(json["dark"], false);
}

#[tokio::test]
async fn test_scheme_follows_replaced_theme() {
    let app = common::TestApp::new();

    let update = app
        .put_json("/api/theme", r##"{"seed": "#306090"}"##)
        .await;
    common::assert_ok(&update);

    let response = app.get("/api/scheme").await;

    common::assert_ok(&response);
    let json: serde_json::Value = response.json();
    assert_eq!(json["seed"], seeds::SLATE_BLUE);
}

#[tokio::test]
async fn test_configured_dark_mode_is_default() {
    let config = AppConfig::parse("theme:\n  seed: \"#FF0000\"\n  dark: true\n").unwrap();
    let app = common::TestApp::with_config(config);

    let response = app.get("/api/scheme").await;

    common::assert_ok(&response);
    let json: serde_json::Value = response.json();
    assert_eq!(json["seed"], seeds::RED);
    assert_eq!(json["dark"], true);

    // An explicit mode still wins
    let response = app.get("/api/scheme?dark=false").await;
    let json: serde_json::Value = response.json();
    assert_eq!(json["dark"], false);
}

#[tokio::test]
async fn test_invalid_seed() {
    let app = common::TestApp::new();

    for seed in ["purple", "%23123", "%23GGGGGG", "%231234567"] {
        let response = app.get(&format!("/api/scheme?seed={seed}")).await;
        common::assert_error(&response, StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_malformed_dark_flag_is_json_error() {
    let app = common::TestApp::new();

    let response = app.get("/api/scheme?dark=maybe").await;

    common::assert_error(&response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_light_and_dark_share_no_surface() {
    let app = common::TestApp::new();

    let light: serde_json::Value = app.get("/api/scheme?seed=%23336699").await.json();
    let dark: serde_json::Value = app
        .get("/api/scheme?seed=%23336699&dark=true")
        .await
        .json();

    assert_ne!(light["roles"]["surface"], dark["roles"]["surface"]);
    assert_eq!(light["roles"]["primary"], "#336699");
}
