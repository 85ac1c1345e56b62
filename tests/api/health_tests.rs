//! Health and Metrics API Tests

use axum::http::StatusCode;
use serde_json::json;

use crate::common::test_server;

/// Test health check returns `{"ok": true}`
#[tokio::test]
async fn test_health_check_returns_ok() {
    let server = test_server();

    let response = server.get("/api/health").await;

    response.assert_status(StatusCode::OK);
    response.assert_json(&json!({ "ok": true }));
}

/// Test metrics endpoint exposes HTTP counters after a request
#[tokio::test]
async fn test_metrics_exposes_http_requests() {
    let server = test_server();
    server.get("/api/health").await;

    let response = server.get("/metrics").await;

    response.assert_status(StatusCode::OK);
    assert!(response.text().contains("chat_backend_http_requests_total"));
}
