//! Integration tests for the liveness probe.

mod helpers;

use helpers::{StubEngine, TestApp};
use http::StatusCode;

#[tokio::test]
async fn test_health_ok() {
    let app = TestApp::new(StubEngine::Success);

    let response = app.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), serde_json::json!({"status": "ok"}));
}

#[tokio::test]
async fn test_health_unaffected_by_failed_conversions() {
    let app = TestApp::new(StubEngine::Fail(1));

    let failed = app.upload("deck.pptx", b"fake office bytes").await;
    assert_eq!(failed.status, StatusCode::INTERNAL_SERVER_ERROR);

    let response = app.get("/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), serde_json::json!({"status": "ok"}));
}
