//! Route definitions for the published-document projection.
//!
//! Registered under `/published`.

use axum::routing::get;
use axum::Router;

use crate::handlers::published;
use crate::state::AppState;

/// Published document routes, registered as `/published`.
///
/// ```text
/// GET /         list_published
/// GET /{id}     get_last_published
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(published::list_published))
        .route("/{id}", get(published::get_last_published))
}
