//! In-memory version store for document lineages.
//!
//! The store owns the only mapping from lineage id to version history and
//! is the single point of mutation for document state. Histories are
//! ordered newest-first; the head is always the current snapshot. Callers
//! receive clones and can never alias stored state.
//!
//! The optimistic-concurrency check in [`VersionStore::append_version`]
//! runs under the write lock, so a stale writer cannot interleave between
//! the version check and the append.

use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use velum_core::document::{CreateDocument, DocumentSnapshot};
use velum_core::error::CoreError;
use velum_core::types::{AuthorId, DocumentId};

/// Process-wide document state. Thread-safe via interior `RwLock`;
/// designed to be wrapped in `Arc` and shared across the application.
///
/// State lives for the process lifetime and is cleared on restart.
pub struct VersionStore {
    lineages: RwLock<HashMap<DocumentId, Vec<DocumentSnapshot>>>,
}

impl VersionStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self {
            lineages: RwLock::new(HashMap::new()),
        }
    }

    /// Create a new lineage with an initial version 1 snapshot.
    ///
    /// Cannot fail: the lineage id is freshly minted, so no conflict is
    /// possible.
    pub async fn create(&self, input: CreateDocument) -> DocumentSnapshot {
        let now = Utc::now();
        let snapshot = DocumentSnapshot {
            id: Uuid::new_v4(),
            title: input.title,
            content: input.content,
            creator_id: input.creator_id,
            creation_date: now,
            last_updated_date: now,
            last_update_author_id: None,
            version: 1,
            is_published: false,
        };

        self.lineages
            .write()
            .await
            .insert(snapshot.id, vec![snapshot.clone()]);
        snapshot
    }

    /// Full version history for a lineage, newest first.
    pub async fn history(&self, id: DocumentId) -> Result<Vec<DocumentSnapshot>, CoreError> {
        self.lineages
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(CoreError::NotFound {
                entity: "document",
                id,
            })
    }

    /// The head snapshot of every known lineage, ordered by creation date
    /// (id as tiebreak) for a stable listing.
    pub async fn all_latest(&self) -> Vec<DocumentSnapshot> {
        let lineages = self.lineages.read().await;

        // Histories are never empty; the head is the current snapshot.
        let mut heads: Vec<DocumentSnapshot> = lineages
            .values()
            .filter_map(|history| history.first().cloned())
            .collect();
        heads.sort_by(|a, b| {
            a.creation_date
                .cmp(&b.creation_date)
                .then(a.id.cmp(&b.id))
        });
        heads
    }

    /// Append a new snapshot to a lineage, guarded by the caller's
    /// `expected_version`.
    ///
    /// Fails with [`CoreError::NotFound`] for an unknown lineage and with
    /// [`CoreError::VersionConflict`] if `expected_version` does not match
    /// the current head -- the caller's view is stale and history is left
    /// untouched. On a match, a copy of the head with the new content is
    /// prepended; every prior snapshot is preserved below it.
    pub async fn append_version(
        &self,
        id: DocumentId,
        content: String,
        author_id: AuthorId,
        expected_version: i64,
    ) -> Result<DocumentSnapshot, CoreError> {
        let mut lineages = self.lineages.write().await;
        let history = lineages.get_mut(&id).ok_or(CoreError::NotFound {
            entity: "document",
            id,
        })?;

        let Some(head) = history.first() else {
            return Err(CoreError::Internal(format!(
                "empty history for document {id}"
            )));
        };

        if expected_version != head.version {
            return Err(CoreError::VersionConflict {
                expected: expected_version,
                current: head.version,
            });
        }

        let snapshot = DocumentSnapshot {
            content,
            last_update_author_id: Some(author_id),
            last_updated_date: Utc::now(),
            version: head.version + 1,
            ..head.clone()
        };

        history.insert(0, snapshot.clone());
        Ok(snapshot)
    }

    /// Promote the current head to a published snapshot under a freshly
    /// minted id, replacing the entire draft history.
    ///
    /// No version check is made: publish always takes whatever is current.
    /// The old lineage id stops resolving; the published lineage is a
    /// single-snapshot history whose version equals the pre-publish head's.
    pub async fn publish(&self, id: DocumentId) -> Result<DocumentSnapshot, CoreError> {
        let mut lineages = self.lineages.write().await;

        let Some(head) = lineages.get(&id).and_then(|history| history.first()).cloned() else {
            return Err(CoreError::NotFound {
                entity: "document",
                id,
            });
        };

        let published = DocumentSnapshot {
            id: Uuid::new_v4(),
            is_published: true,
            ..head
        };

        lineages.remove(&id);
        lineages.insert(published.id, vec![published.clone()]);
        Ok(published)
    }
}

impl Default for VersionStore {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
