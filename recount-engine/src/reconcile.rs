//! Pagination-total reconciliation.
//!
//! When the engine drops records client-side, the backend's `total` still
//! counts the dropped ones, so it overstates how many valid records exist.
//! Filtering is unsupported server-side, so there is no authoritative
//! filtered total to re-query; the engine infers a conservative one from
//! the single page it can observe.
//!
//! Two hard rules shape every branch:
//! - never report a total below `coverage = offset + filtered_count`
//!   (records already proven to exist), and
//! - never report a total that would place the current page beyond the last
//!   page unless the data proves it.

/// Everything the reconciler can observe about one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileContext {
    /// The caller's desired page size, if any.
    pub requested_limit: Option<usize>,
    /// The caller's desired page start (0 when not requested).
    pub requested_offset: usize,
    /// Total reported by the backend envelope, if any.
    pub backend_total: Option<u64>,
    /// Record count before client-side filtering.
    pub original_count: usize,
    /// Record count after client-side filtering.
    pub filtered_count: usize,
    /// Whether the payload carried pagination metadata at all.
    pub source_had_envelope: bool,
    /// The page size the backend itself applied, if reported.
    pub backend_limit: Option<usize>,
}

impl ReconcileContext {
    /// Records already proven to exist: `offset + filtered_count`.
    #[must_use]
    pub fn coverage(&self) -> u64 {
        (self.requested_offset + self.filtered_count) as u64
    }

    /// First defined of requested limit, backend limit, filtered count.
    #[must_use]
    pub fn effective_limit(&self) -> usize {
        self.requested_limit
            .or(self.backend_limit)
            .unwrap_or(self.filtered_count)
    }

    /// Records the filter removed on this page.
    #[must_use]
    pub fn removed(&self) -> usize {
        self.original_count.saturating_sub(self.filtered_count)
    }
}

/// Computes the corrected total for a pager.
///
/// Decision order, first match wins:
///
/// 1. No envelope and no pagination requested: the list is complete, the
///    filtered count is the total.
/// 2. The backend's own page came back short of the effective limit before
///    filtering: the backend proved no more pages exist, total is coverage.
/// 3. The backend reported no usable total: assume exactly one more full
///    page if this one filled the limit after filtering, otherwise coverage.
/// 4. The filter removed records from a full backend page: extrapolate the
///    observed valid-record rate across the backend total, floored at one
///    more full page past coverage.
/// 5. Nothing removed but the backend total does not even cover what we can
///    see: replace it with one more full page if this page filled the
///    limit, otherwise coverage.
/// 6. Nothing removed, backend total covers this page: trust it.
///
/// The valid-rate extrapolation (rule 4) is a heuristic: voided-record
/// density can vary across pages, so it may over- or under-estimate. It is
/// kept as-is because pager page-counts derived from it are user-visible.
#[must_use]
pub fn total(ctx: &ReconcileContext) -> u64 {
    let coverage = ctx.coverage();
    let effective_limit = ctx.effective_limit();
    let filtered_full = ctx.filtered_count == effective_limit;

    // Rule 1: no pagination in play at all.
    if !ctx.source_had_envelope && ctx.requested_limit.is_none() && ctx.requested_offset == 0 {
        return ctx.filtered_count as u64;
    }

    // Rule 2: pre-filter page short, backend confirms the last page.
    if ctx.original_count < effective_limit {
        return coverage;
    }

    let backend_total = ctx.backend_total.filter(|t| *t > 0);
    let Some(backend_total) = backend_total else {
        // Rule 3: no usable total reported.
        if filtered_full {
            return coverage + effective_limit as u64;
        }
        return coverage;
    };

    if ctx.removed() > 0 {
        // Rule 4: extrapolate the valid-record rate over the backend total.
        let valid_rate = ctx.filtered_count as f64 / ctx.original_count as f64;
        let estimated_valid_total = (backend_total as f64 * valid_rate).ceil() as u64;
        let floor = coverage + effective_limit as u64;
        tracing::warn!(
            backend_total,
            estimated_valid_total,
            removed = ctx.removed(),
            "backend total counts records removed client-side, correcting"
        );
        return estimated_valid_total.max(floor);
    }

    if backend_total <= coverage {
        // Rule 5: backend total cannot be right, it does not cover this page.
        if filtered_full {
            return coverage + effective_limit as u64;
        }
        return coverage;
    }

    // Rule 6: no filtering happened and the backend total is plausible.
    backend_total
}
