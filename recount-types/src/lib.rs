//! Core type definitions for Recount.
//!
//! This crate defines the wire-facing, resource-agnostic types used by the
//! list reconciliation engine:
//! - Page requests (the caller's desired window)
//! - Raw backend list payloads (bare array or `{data, total, limit, offset}`
//!   envelope)
//! - Normalized pages (the only shape callers ever see)
//! - Validated record identifiers for single-record lookups
//!
//! All resource-specific record types (invoices, quotes, items) belong in
//! the engine crate, not here.

mod ids;
mod page;
mod payload;

pub use ids::RecordId;
pub use page::{NormalizedPage, PageRequest};
pub use payload::{ListEnvelope, RawListPayload};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid record id: {0}")]
    InvalidRecordId(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
