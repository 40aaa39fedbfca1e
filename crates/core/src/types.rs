/// Document lineages are identified by v4 UUIDs. Publishing mints a fresh
/// id for the published snapshot; the draft id stops resolving.
pub type DocumentId = uuid::Uuid;

/// Authors are identified by the same UUID scheme.
pub type AuthorId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
