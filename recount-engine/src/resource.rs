//! The per-resource strategy seam.
//!
//! The reconciliation heuristic was originally duplicated across the list
//! actions for quotes, invoices, and items. Here it is one engine with a
//! per-resource configuration object: each resource supplies its mandatory
//! client-side predicate and the field that defines recency.

/// Per-resource configuration for the list pipeline.
///
/// Implementations must be pure: `keep` and `recency` are applied per list,
/// possibly repeatedly, and must be deterministic and side-effect-free.
pub trait ListResource {
    /// The record type this resource lists.
    type Record;

    /// Mandatory client-side predicate; `true` keeps the record.
    ///
    /// The default keeps everything, valid for resources (quotes, items)
    /// where the backend's listing needs no post-filtering.
    fn keep(&self, _record: &Self::Record) -> bool {
        true
    }

    /// The raw value of the record's recency field, used only for sort
    /// ordering. `None` or an unparseable value ranks as the oldest.
    fn recency<'r>(&self, record: &'r Self::Record) -> Option<&'r str>;
}
