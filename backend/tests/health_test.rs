//! Integration tests for health check endpoints

mod common;

use common::TestApp;
use serde_json::Value;

#[tokio::test]
async fn health_check_returns_healthy() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/health").await;

    assert_eq!(status, 200);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert!(!json["version"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn liveness_check_returns_alive() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/health/live").await;

    assert_eq!(status, 200);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "alive");
}
