pub mod health;
pub mod published;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /published          GET list published documents
/// /published/{id}     GET head snapshot of a lineage
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/published", published::router())
}
