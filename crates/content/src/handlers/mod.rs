//! Request handlers for the content service.
//!
//! Handlers query the editor through [`velum_editor_client::EditorClient`]
//! and map every editor-side failure via [`crate::error::AppError`].

pub mod published;
