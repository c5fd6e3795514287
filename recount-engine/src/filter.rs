//! Mandatory client-side record filtering.
//!
//! Some resources come back from the backend with records the business
//! considers logically deleted (voided invoices). Filtering them out is the
//! client's job, and the number of records removed feeds the pagination
//! reconciler.

use crate::ListResource;

/// Applies the resource's predicate, preserving input order.
///
/// Returns the kept records and the number removed. Resources with no
/// filtering requirement keep everything and always report 0 removed.
#[must_use]
pub fn apply<R: ListResource>(records: Vec<R::Record>, resource: &R) -> (Vec<R::Record>, usize) {
    let before = records.len();
    let kept: Vec<R::Record> = records.into_iter().filter(|r| resource.keep(r)).collect();
    let removed = before - kept.len();
    (kept, removed)
}
