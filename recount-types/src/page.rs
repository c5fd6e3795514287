//! Page request and normalized page types.
//!
//! A `PageRequest` is what the caller asks for; a `NormalizedPage` is what
//! it gets back, regardless of which of the backend's two list shapes the
//! response arrived in.

use serde::{Deserialize, Serialize};

/// The caller's desired page window.
///
/// Both fields are optional: an absent `limit` means "no explicit page size
/// requested", an absent `offset` defaults to 0. Additional query parameters
/// (search term, status filter) are forwarded to the backend by the caller
/// and are opaque to the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Desired page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    /// Zero-based start index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
}

impl PageRequest {
    /// A request with no pagination parameters at all.
    #[must_use]
    pub const fn unpaginated() -> Self {
        Self {
            limit: None,
            offset: None,
        }
    }

    /// A request for one page window.
    #[must_use]
    pub const fn window(limit: usize, offset: usize) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
        }
    }

    /// The effective offset (defaults to 0 when not requested).
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset.unwrap_or(0)
    }

    /// True when neither `limit` nor `offset` was explicitly requested.
    #[must_use]
    pub fn is_unpaginated(&self) -> bool {
        self.limit.is_none() && self.offset.is_none()
    }
}

/// A normalized list page: the only shape callers ever see.
///
/// `total` is guaranteed to be at least `offset + data.len()` when data is
/// non-empty (the engine never under-reports visible coverage), but it is an
/// estimate, not an authoritative count, whenever client-side filtering is
/// active and the backend result set spans multiple pages.
///
/// `data.len() <= limit` is *not* guaranteed (the backend may overshoot its
/// own page size), so callers must not assume it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPage<T> {
    /// The records of this page, filtered and sorted most-recent-first.
    pub data: Vec<T>,
    /// Corrected total usable for pager page counts.
    pub total: u64,
    /// The limit the caller requested, if any.
    pub limit: Option<usize>,
    /// The zero-based start index of this page.
    pub offset: usize,
}

impl<T> NormalizedPage<T> {
    /// The degraded result for malformed or unexpected payloads.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            total: 0,
            limit: None,
            offset: 0,
        }
    }

    /// Number of records on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when this page carries no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T> Default for NormalizedPage<T> {
    fn default() -> Self {
        Self::empty()
    }
}
