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

/// Assert JSON response has expected status field
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
}

/// Assert an error response: HTTP status and JSON body agree
pub fn assert_error(response: &TestResponse, expected: StatusCode) {
    assert_status(response, expected);
    assert_json_status(response, expected.as_u16());

    let json: serde_json::Value = response.json();
    assert!(
        json["error"].is_string(),
        "Expected error message, got {}",
        response.text()
    );
}

/// Assert a value is a `#RRGGBB` string
pub fn assert_hex_color(value: &serde_json::Value) {
    let hex = value
        .as_str()
        .unwrap_or_else(|| panic!("Expected hex color string, got {value}"));
    assert_eq!(hex.len(), 7, "Expected #RRGGBB, got {hex}");
    assert!(hex.starts_with('#'), "Expected #RRGGBB, got {hex}");
    assert!(
        hex[1..]
            .chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)),
        "Expected uppercase hex digits, got {hex}"
    );
}

/// Assert scheme roles object holds all 28 roles as hex colors.
/// Returns the roles object for further checks.
pub fn assert_valid_roles(roles: &serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
    let roles = roles
        .as_object()
        .unwrap_or_else(|| panic!("Expected roles object, got {roles}"))
        .clone();
    assert_eq!(roles.len(), 28, "Expected 28 roles");
    for value in roles.values() {
        assert_hex_color(value);
    }
    roles
}
