//! The composed normalization pipeline.

use crate::{ListResource, ReconcileContext, assemble, filter, reconcile, shape, sort};
use recount_types::{NormalizedPage, PageRequest, RawListPayload};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Normalizes one raw backend list response into a page a pager can trust.
///
/// Pure and synchronous: classify the payload shape, apply the resource's
/// mandatory filter, stable-sort most-recent-first, reconcile the total,
/// assemble. Malformed payloads degrade to `NormalizedPage::empty()`
/// whatever the requested window; nothing here errors or performs I/O.
pub fn normalize<R>(resource: &R, raw: Value, request: &PageRequest) -> NormalizedPage<R::Record>
where
    R: ListResource,
    R::Record: DeserializeOwned,
{
    let Some(payload) = shape::detect::<R::Record>(raw) else {
        return NormalizedPage::empty();
    };

    match payload {
        RawListPayload::Bare(records) => {
            let unfiltered_len = records.len();
            let (mut kept, removed) = filter::apply(records, resource);
            sort::by_recency(&mut kept, resource);
            tracing::debug!(unfiltered_len, removed, "normalizing bare-array page");

            if assemble::needs_client_slice(request, unfiltered_len) {
                // Backend returned everything; paginate locally. The whole
                // dataset is visible, so the filtered length is the total.
                return assemble::sliced_page(kept, request);
            }

            let ctx = ReconcileContext {
                requested_limit: request.limit,
                requested_offset: request.offset(),
                backend_total: None,
                original_count: unfiltered_len,
                filtered_count: kept.len(),
                source_had_envelope: false,
                backend_limit: None,
            };
            let total = reconcile::total(&ctx);
            assemble::page(kept, request, total)
        }
        RawListPayload::Envelope(envelope) => {
            let original_count = envelope.data.len();
            let (mut kept, removed) = filter::apply(envelope.data, resource);
            sort::by_recency(&mut kept, resource);

            let ctx = ReconcileContext {
                requested_limit: request.limit,
                requested_offset: request.offset(),
                backend_total: envelope.total,
                original_count,
                filtered_count: kept.len(),
                source_had_envelope: true,
                backend_limit: envelope.limit,
            };
            tracing::debug!(
                original_count,
                removed,
                backend_total = ?envelope.total,
                "reconciling envelope page"
            );
            let total = reconcile::total(&ctx);
            assemble::page(kept, request, total)
        }
    }
}
