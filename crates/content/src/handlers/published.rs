//! Read-only handlers projecting published snapshots for consumers.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use velum_core::types::{DocumentId, Timestamp};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Listing entry for a published document. Only these three fields are
/// exposed to readers.
#[derive(Debug, Serialize)]
pub struct PublishedSummary {
    pub id: DocumentId,
    pub title: String,
    pub last_updated_date: Timestamp,
}

/// GET /published
///
/// List every lineage whose current head is published.
pub async fn list_published(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let latest = state.editor.list_all_latest().await?;

    let published: Vec<PublishedSummary> = latest
        .into_iter()
        .filter(|doc| doc.is_published)
        .map(|doc| PublishedSummary {
            id: doc.id,
            title: doc.title,
            last_updated_date: doc.last_updated_date,
        })
        .collect();

    Ok(Json(DataResponse { data: published }))
}

/// GET /published/{id}
///
/// Return the head snapshot of the lineage's history. The head is returned
/// as-is, published or not.
pub async fn get_last_published(
    State(state): State<AppState>,
    Path(id): Path<DocumentId>,
) -> AppResult<impl IntoResponse> {
    let history = state.editor.list_versions(id).await?;

    // Histories from the editor are newest-first and never empty.
    let Some(head) = history.into_iter().next() else {
        return Err(AppError::Internal(format!(
            "editor returned empty history for document {id}"
        )));
    };

    Ok(Json(DataResponse { data: head }))
}
