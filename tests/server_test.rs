//! Tests for the HTTP endpoints, driven in-process.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use unbeatable::router;

async fn call(request: Request<Body>) -> (StatusCode, Value) {
    let response = router().oneshot(request).await.expect("Router failed");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Body read failed")
        .to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn move_request(body: Value) -> Request<Body> {
    raw_move_request(body.to_string())
}

fn raw_move_request(body: impl Into<String>) -> Request<Body> {
    Request::post("/api/get-ai-move")
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .expect("Request build failed")
}

fn assert_malformed(status: StatusCode, body: &Value) {
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error = body["error"].as_str().expect("error body missing");
    assert!(error.starts_with("malformed request"), "unexpected error: {error}");
}

#[tokio::test]
async fn test_health() {
    let request = Request::get("/api/health").body(Body::empty()).unwrap();
    let (status, body) = call(request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy", "engine_ready": true}));
}

#[tokio::test]
async fn test_get_ai_move() {
    let (status, body) = call(move_request(json!({
        "board": ["O", "O", "_", "X", "X", "_", "_", "_", "_"],
        "aiSymbol": "O",
        "humanSymbol": "X"
    })))
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["move"], 2);
    assert_eq!(body["hasWinner"], true);
    assert_eq!(body["winner"], "O");
}

#[tokio::test]
async fn test_get_ai_move_rejects_bad_board() {
    let (status, body) = call(move_request(json!({
        "board": ["O", "O"],
        "aiSymbol": "O",
        "humanSymbol": "X"
    })))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "board must have 9 cells, got 2");
}

#[tokio::test]
async fn test_get_ai_move_rejects_full_board() {
    let (status, body) = call(move_request(json!({
        "board": ["X", "O", "X", "X", "O", "O", "O", "X", "X"],
        "aiSymbol": "O",
        "humanSymbol": "X"
    })))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("no legal moves"));
}

#[tokio::test]
async fn test_get_ai_move_rejects_missing_field() {
    let (status, body) = call(move_request(json!({"board": ["_"]}))).await;
    assert_malformed(status, &body);
    assert!(body["error"].as_str().unwrap().contains("aiSymbol"));
}

#[tokio::test]
async fn test_get_ai_move_rejects_truncated_json() {
    let (status, body) = call(raw_move_request(r#"{"board": ["#)).await;
    assert_malformed(status, &body);
}

#[tokio::test]
async fn test_get_ai_move_rejects_missing_content_type() {
    let request = Request::post("/api/get-ai-move")
        .body(Body::from(r#"{"board": [], "aiSymbol": "O", "humanSymbol": "X"}"#))
        .unwrap();
    let (status, body) = call(request).await;
    assert_malformed(status, &body);
}
