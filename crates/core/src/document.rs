//! Document snapshot model, request payloads, and input validation.
//!
//! A snapshot is one immutable point in a document's history. Histories are
//! ordered newest-first and owned exclusively by the version store in
//! `velum-store`; everything here is plain data shared across the services.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{AuthorId, DocumentId, Timestamp};

/// Maximum accepted title length in characters.
pub const MAX_TITLE_LEN: usize = 200;

/// Maximum accepted content length in characters.
pub const MAX_CONTENT_LEN: usize = 100_000;

// ---------------------------------------------------------------------------
// Model
// ---------------------------------------------------------------------------

/// One immutable entry in a document's version history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    /// Lineage id while in draft; replaced by a freshly minted id at publish.
    pub id: DocumentId,
    pub title: String,
    pub content: String,
    /// Original author. Immutable across the lineage.
    pub creator_id: AuthorId,
    /// Set once, when the lineage is created.
    pub creation_date: Timestamp,
    /// Set on every snapshot.
    pub last_updated_date: Timestamp,
    /// Author of this snapshot. `None` on the initial snapshot.
    pub last_update_author_id: Option<AuthorId>,
    /// Starts at 1 and increases by exactly 1 per accepted mutation.
    pub version: i64,
    /// True only on the snapshot produced by a publish.
    pub is_published: bool,
}

// ---------------------------------------------------------------------------
// Request payloads
// ---------------------------------------------------------------------------

/// Payload for creating a new document lineage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDocument {
    pub title: String,
    pub content: String,
    pub creator_id: AuthorId,
}

/// Payload for appending a version to (or updating the draft of) an
/// existing lineage.
///
/// `expected_version` is the head version the caller last observed; a
/// mismatch means some other writer advanced the lineage and the request
/// is rejected without touching history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppendVersion {
    pub content: String,
    pub author_id: AuthorId,
    pub expected_version: i64,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a document title (non-empty, <= 200 chars).
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Title must not be empty".into()));
    }
    if title.len() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "Title must be at most {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate document content (<= 100 000 chars).
pub fn validate_content(content: &str) -> Result<(), CoreError> {
    if content.len() > MAX_CONTENT_LEN {
        return Err(CoreError::Validation(format!(
            "Content must be at most {MAX_CONTENT_LEN} characters"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
