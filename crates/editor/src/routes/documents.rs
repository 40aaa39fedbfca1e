//! Route definitions for document lineages, versioning, and publishing.
//!
//! Registered under `/documents`.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::documents;
use crate::state::AppState;

/// Document routes, registered as `/documents`.
///
/// ```text
/// POST   /                create_document
/// GET    /                list_all_latest
/// PUT    /{id}            update_draft
/// GET    /{id}/versions   list_versions
/// POST   /{id}/versions   append_version
/// POST   /{id}/publish    publish_document
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(documents::list_all_latest).post(documents::create_document),
        )
        .route("/{id}", put(documents::update_draft))
        .route(
            "/{id}/versions",
            get(documents::list_versions).post(documents::append_version),
        )
        .route("/{id}/publish", post(documents::publish_document))
}
