//! Server integration tests that test the actual server behavior.
//!
//! These tests start a real TCP server and verify behavior that can only
//! be tested with actual network connections.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use chromaseed::models::AppConfig;
use chromaseed::server::{build_router, create_app_state};

/// Start a test server on an available port and return the port number.
async fn start_test_server() -> u16 {
    let state = create_app_state(AppConfig::default()).expect("Failed to create app state");
    let app = build_router(state);

    // Bind to port 0 to get an available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let port = listener.local_addr().unwrap().port();

    // Spawn the server in the background
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    // Give the server a moment to start
    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

    port
}

/// Send one raw HTTP/1.1 request and return the full response text.
async fn raw_request(port: u16, request: &str) -> String {
    let mut stream = TcpStream::connect(format!("127.0.0.1:{}", port))
        .await
        .expect("Failed to connect");
    stream
        .write_all(request.as_bytes())
        .await
        .expect("Failed to write request");

    let mut response = Vec::new();
    stream
        .read_to_end(&mut response)
        .await
        .expect("Failed to read response");
    String::from_utf8_lossy(&response).to_string()
}

#[tokio::test]
async fn test_health_over_tcp() {
    let port = start_test_server().await;

    let response = raw_request(
        port,
        "GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
    )
    .await;

    assert!(
        response.starts_with("HTTP/1.1 200"),
        "Should get 200 OK response, got: {response}"
    );
    assert!(response.ends_with("OK"), "Body should be OK: {response}");
}

#[tokio::test]
async fn test_scheme_json_over_tcp() {
    let port = start_test_server().await;

    let response = raw_request(
        port,
        "GET /api/scheme?seed=%23336699 HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
    )
    .await;

    assert!(response.starts_with("HTTP/1.1 200"), "got: {response}");
    assert!(
        response
            .to_lowercase()
            .contains("content-type: application/json"),
        "Should be JSON: {response}"
    );
    assert!(response.contains(r##""primary":"#336699""##));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let port = start_test_server().await;

    let response = raw_request(
        port,
        "GET /api/nope HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
    )
    .await;

    assert!(response.starts_with("HTTP/1.1 404"), "got: {response}");
}

#[tokio::test]
async fn test_concurrent_theme_updates() {
    let port = start_test_server().await;
    let seeds = ["#FF0000", "#008000", "#0000FF", "#336699"];

    let mut handles = Vec::new();
    for seed in seeds {
        handles.push(tokio::spawn(async move {
            let body = format!(r#"{{"seed":"{seed}"}}"#);
            let request = format!(
                "PUT /api/theme HTTP/1.1\r\nHost: localhost\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            raw_request(port, &request).await
        }));
    }
    for handle in handles {
        let response = handle.await.unwrap();
        assert!(response.starts_with("HTTP/1.1 200"), "got: {response}");
    }

    // The final theme is one of the submitted seeds, whole
    let response = raw_request(
        port,
        "GET /api/theme HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
    )
    .await;
    let body = response.split("\r\n\r\n").nth(1).expect("response body");
    let json: serde_json::Value = serde_json::from_str(body).expect("JSON body");
    let seed = json["seed"].as_str().unwrap();
    assert!(seeds.contains(&seed), "unexpected seed {seed}");
    assert_eq!(json["light"]["primary"], seed);
}
