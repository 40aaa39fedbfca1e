//! Shared domain layer for the Velum document platform.
//!
//! Holds the document snapshot model, the error taxonomy, and input
//! validation. This crate has no service dependencies so it can be used by
//! the version store, both HTTP services, and the editor client alike.

pub mod document;
pub mod error;
pub mod types;
