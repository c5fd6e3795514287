//! Payload shape detection.

use recount_types::RawListPayload;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Classifies a raw backend payload as a bare array or an envelope.
///
/// `None` means the payload was malformed: neither a list nor an envelope,
/// or its records could not be deserialized. Malformed input never errors;
/// the pipeline turns `None` into an empty normalized page, so a garbage
/// response at any offset reports zero records rather than phantom
/// coverage.
#[must_use]
pub fn detect<T: DeserializeOwned>(raw: Value) -> Option<RawListPayload<T>> {
    let payload = RawListPayload::classify(raw);
    if payload.is_none() {
        tracing::debug!("unrecognized list payload shape, degrading to empty page");
    }
    payload
}
