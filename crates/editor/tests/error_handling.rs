//! Integration tests for error response shapes and request rejection.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post_json};

// ---------------------------------------------------------------------------
// Test: domain errors use the { "error", "code" } envelope
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_uses_error_envelope() {
    let app = build_test_app();
    let uri = format!("/api/v1/documents/{}/versions", uuid::Uuid::new_v4());

    let response = get(app, &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert!(json["error"].is_string());
}

// ---------------------------------------------------------------------------
// Test: malformed request bodies are rejected before reaching handlers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_fields_rejected_as_unprocessable() {
    let app = build_test_app();

    // `content` and `creator_id` are required by CreateDocument.
    let response = post_json(
        app,
        "/api/v1/documents",
        serde_json::json!({ "title": "T" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn invalid_document_id_rejected() {
    let app = build_test_app();

    let response = post_json(
        app,
        "/api/v1/documents/not-a-uuid/versions",
        serde_json::json!({
            "content": "C",
            "author_id": uuid::Uuid::new_v4(),
            "expected_version": 1,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
