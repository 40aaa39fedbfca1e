//! Request handlers for the editor service.
//!
//! Handlers validate input, delegate to the [`velum_store::VersionStore`],
//! and map errors via [`crate::error::AppError`].

pub mod documents;
