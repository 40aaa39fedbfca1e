use std::sync::Arc;

use velum_store::VersionStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// In-memory document version store. The only holder of document state;
    /// cleared on restart.
    pub store: Arc<VersionStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
