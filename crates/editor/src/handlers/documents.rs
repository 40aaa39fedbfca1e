//! Handlers for document creation, versioning, and publishing.
//!
//! Append-version and update-draft are the same optimistic-lock guarded
//! content replacement exposed on two routes; both delegate to
//! [`velum_store::VersionStore::append_version`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use velum_core::document::{
    validate_content, validate_title, AppendVersion, CreateDocument, DocumentSnapshot,
};
use velum_core::types::DocumentId;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /documents
///
/// Create a new document lineage with an initial version 1 snapshot.
pub async fn create_document(
    State(state): State<AppState>,
    Json(input): Json<CreateDocument>,
) -> AppResult<impl IntoResponse> {
    validate_title(&input.title).map_err(AppError::Core)?;
    validate_content(&input.content).map_err(AppError::Core)?;

    let snapshot = state.store.create(input).await;

    tracing::info!(
        document_id = %snapshot.id,
        creator_id = %snapshot.creator_id,
        "Document created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: snapshot })))
}

/// GET /documents
///
/// List the latest snapshot of every known lineage. Listings are flat;
/// no entry carries nested history.
pub async fn list_all_latest(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let snapshots = state.store.all_latest().await;
    Ok(Json(DataResponse { data: snapshots }))
}

/// GET /documents/{id}/versions
///
/// Full version history for a lineage, newest first.
pub async fn list_versions(
    State(state): State<AppState>,
    Path(id): Path<DocumentId>,
) -> AppResult<impl IntoResponse> {
    let history = state.store.history(id).await?;
    Ok(Json(DataResponse { data: history }))
}

/// POST /documents/{id}/versions
///
/// Append a new version to a lineage, guarded by the caller's
/// `expected_version`.
pub async fn append_version(
    State(state): State<AppState>,
    Path(id): Path<DocumentId>,
    Json(input): Json<AppendVersion>,
) -> AppResult<impl IntoResponse> {
    apply_edit(&state, id, input).await
}

/// PUT /documents/{id}
///
/// Update the current draft. Semantically identical to
/// [`append_version`]; only the route shape differs.
pub async fn update_draft(
    State(state): State<AppState>,
    Path(id): Path<DocumentId>,
    Json(input): Json<AppendVersion>,
) -> AppResult<impl IntoResponse> {
    apply_edit(&state, id, input).await
}

/// POST /documents/{id}/publish
///
/// Promote the current head to a published snapshot under a freshly
/// minted id, discarding the draft history for `id`. No version check is
/// made -- publish always takes whatever is current.
pub async fn publish_document(
    State(state): State<AppState>,
    Path(id): Path<DocumentId>,
) -> AppResult<impl IntoResponse> {
    let snapshot = state.store.publish(id).await?;

    tracing::info!(
        draft_id = %id,
        published_id = %snapshot.id,
        version = snapshot.version,
        "Document published"
    );

    Ok(Json(DataResponse { data: snapshot }))
}

/// Shared optimistic-lock guarded content replacement.
async fn apply_edit(
    state: &AppState,
    id: DocumentId,
    input: AppendVersion,
) -> AppResult<Json<DataResponse<DocumentSnapshot>>> {
    validate_content(&input.content).map_err(AppError::Core)?;

    let author_id = input.author_id;
    let snapshot = state
        .store
        .append_version(id, input.content, author_id, input.expected_version)
        .await?;

    tracing::info!(
        document_id = %id,
        version = snapshot.version,
        author_id = %author_id,
        "Document version accepted"
    );

    Ok(Json(DataResponse { data: snapshot }))
}
