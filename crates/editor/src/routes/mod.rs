pub mod documents;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /documents                     POST create, GET list all latest
/// /documents/{id}                PUT update draft
/// /documents/{id}/versions       GET history, POST append version
/// /documents/{id}/publish        POST publish
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/documents", documents::router())
}
