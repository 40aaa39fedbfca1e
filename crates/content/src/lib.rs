//! Velum content service library.
//!
//! Read-only projection of published document snapshots. All document
//! state lives in the editor service; this service queries it over HTTP
//! through `velum-editor-client` and never mutates anything.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
