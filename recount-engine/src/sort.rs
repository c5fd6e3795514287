//! Recency sorting.
//!
//! Pages are re-sorted independently per request, so the sort must be
//! stable: two records with equal (or equally unparseable) recency keep
//! their relative input order, and repeated requests do not visually
//! jitter.

use crate::ListResource;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::cmp::Reverse;

/// Stable-sorts records most-recent-first by the resource's recency field.
pub fn by_recency<R: ListResource>(records: &mut [R::Record], resource: &R) {
    records.sort_by_key(|r| Reverse(recency_millis(resource.recency(r))));
}

/// Parses a raw recency value into milliseconds since the Unix epoch.
///
/// Missing or unparseable values rank as epoch 0, i.e. the oldest. Accepts
/// the three formats the backend has been seen to emit: RFC 3339
/// timestamps, a bare `YYYY-MM-DDTHH:MM:SS`, and date-only `YYYY-MM-DD`.
#[must_use]
pub fn recency_millis(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return 0;
    };
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.timestamp_millis();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return naive.and_utc().timestamp_millis();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp_millis())
            .unwrap_or(0);
    }
    0
}
