use std::sync::Arc;

use velum_editor_client::EditorClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Client for the editor service, the sole source of document state.
    pub editor: Arc<EditorClient>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
