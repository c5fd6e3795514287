//! Final page assembly.
//!
//! The assembler produces the `NormalizedPage` handed to the caller and
//! owns one decision: whether pagination must happen client-side. When the
//! backend answers a windowed request with a bare array *larger* than the
//! requested limit, it returned the whole dataset and the engine slices the
//! page out itself. A bare array that fits within the limit is treated as
//! already paginated by the backend, and an envelope's page is always
//! trusted as-is.

use recount_types::{NormalizedPage, PageRequest};

/// True when a bare-array response must be sliced client-side.
///
/// Requires an explicitly requested `limit`; the decision looks at the
/// *unfiltered* array length, since that is what the backend actually sent.
#[must_use]
pub fn needs_client_slice(request: &PageRequest, unfiltered_len: usize) -> bool {
    request.limit.is_some_and(|limit| unfiltered_len > limit)
}

/// Assembles the final page without slicing (envelope or single-page bare
/// array: the backend's page is trusted as-is).
#[must_use]
pub fn page<T>(data: Vec<T>, request: &PageRequest, total: u64) -> NormalizedPage<T> {
    NormalizedPage {
        data,
        total,
        limit: request.limit,
        offset: request.offset(),
    }
}

/// Assembles the final page from a full client-held dataset, slicing out
/// the requested window.
///
/// `data` must already be filtered and sorted; `total` is its full length
/// (the engine can see the whole dataset, no estimation needed).
#[must_use]
pub fn sliced_page<T>(data: Vec<T>, request: &PageRequest) -> NormalizedPage<T> {
    let total = data.len() as u64;
    let offset = request.offset();
    let window: Vec<T> = match request.limit {
        Some(limit) => data.into_iter().skip(offset).take(limit).collect(),
        None => data.into_iter().skip(offset).collect(),
    };
    NormalizedPage {
        data: window,
        total,
        limit: request.limit,
        offset,
    }
}
