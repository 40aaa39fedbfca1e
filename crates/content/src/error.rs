//! Error mapping for the content service.
//!
//! Every editor-side failure -- transport error, editor 404, editor 5xx --
//! surfaces as the same generic internal error. The service never guesses
//! at partial data and does not disambiguate a missing document from an
//! editor outage.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use velum_editor_client::EditorClientError;

/// Application-level error type for HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Any failure calling the editor service.
    #[error(transparent)]
    Editor(#[from] EditorClientError),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Editor(err) => {
                tracing::error!(error = %err, "Editor request failed");
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
            }
        }

        let body = json!({
            "error": "An internal error occurred",
            "code": "INTERNAL_ERROR",
        });

        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}
