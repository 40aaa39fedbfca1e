//! Shared helpers for content service integration tests.
//!
//! The content service is exercised end-to-end: each test spawns a real
//! editor instance on an ephemeral port, points the content router's
//! client at it, and drives the content API with
//! `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use velum_content::config::ServerConfig;
use velum_content::router::build_app_router;
use velum_content::state::AppState;
use velum_editor_client::EditorClient;
use velum_store::VersionStore;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(editor_base_url: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        editor_base_url: editor_base_url.to_string(),
    }
}

/// Build the content application router with all middleware layers,
/// pointing its editor client at `editor_base_url`.
pub fn build_test_app(editor_base_url: &str) -> Router {
    let config = test_config(editor_base_url);
    let state = AppState {
        editor: Arc::new(EditorClient::new(editor_base_url.to_string())),
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Spawn a real editor service with a fresh store on an ephemeral port.
///
/// Returns the editor's base URL. The serve task is aborted when the test
/// runtime shuts down.
pub async fn spawn_editor() -> String {
    let config = velum_editor::config::ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    };
    let state = velum_editor::state::AppState {
        store: Arc::new(VersionStore::new()),
        config: Arc::new(config.clone()),
    };
    let app = velum_editor::router::build_app_router(state, &config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind editor listener");
    let addr = listener.local_addr().expect("Missing local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Editor serve error");
    });

    format!("http://{addr}")
}

/// Reserve a local port with nothing listening on it.
///
/// Binds an ephemeral port and immediately drops the listener; connecting
/// to the returned URL is refused.
pub async fn dead_editor_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Missing local addr");
    drop(listener);
    format!("http://{addr}")
}

/// Send a GET request to the app.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
