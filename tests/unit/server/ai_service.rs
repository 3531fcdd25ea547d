use axum::{body::Body, http::Request};
use tower::ServiceExt as _;

use super::*;

async fn call(request: Request<Body>) -> (axum::http::StatusCode, serde_json::Value) {
    let response = router().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_reports_mode() {
    let (status, body) = call(Request::get("/health").body(Body::empty()).unwrap()).await;
    assert!(status.is_success());
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["mode"], "rule-based");
}

#[tokio::test]
async fn generate_classifies_prompt() {
    let request = Request::post("/generate")
        .header("content-type", "application/json")
        .body(Body::from(
            r#"{"prompt":"simple physics bouncing ball","context":{}}"#,
        ))
        .unwrap();
    let (status, body) = call(request).await;
    assert!(status.is_success());
    assert_eq!(body["subject"], "physics");
    assert_eq!(body["animation_type"], "bounce");
    assert_eq!(body["parameters"]["complexity"], "low");
    assert!(body["generated_text"].as_str().unwrap().contains("physics"));
}

#[tokio::test]
async fn blank_prompt_is_400() {
    let request = Request::post("/generate")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"prompt":"   "}"#))
        .unwrap();
    let (status, body) = call(request).await;
    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}
