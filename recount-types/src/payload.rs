//! Raw backend list payloads.
//!
//! The backend is inconsistent about list responses: the same logical
//! resource may come back as a bare JSON array or as a
//! `{data, total, limit, offset}` envelope. `RawListPayload` models that
//! union, and [`RawListPayload::from_value`] classifies a raw response
//! without ever erroring: unknown shapes degrade to an empty bare list.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A list response wrapped in pagination metadata.
///
/// Every metadata field is optional; backends have been observed to return
/// any subset of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListEnvelope<T> {
    /// The records of this page.
    pub data: Vec<T>,
    /// Total record count reported by the backend, counting records the
    /// client may later filter out.
    #[serde(default)]
    pub total: Option<u64>,
    /// The page size the backend applied.
    #[serde(default)]
    pub limit: Option<usize>,
    /// The page start the backend applied.
    #[serde(default)]
    pub offset: Option<usize>,
}

impl<T> Default for ListEnvelope<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            total: None,
            limit: None,
            offset: None,
        }
    }
}

/// A raw backend list response: bare array or envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum RawListPayload<T> {
    /// A plain ordered sequence of records, no pagination metadata.
    Bare(Vec<T>),
    /// A `{data, total, limit, offset}` envelope.
    Envelope(ListEnvelope<T>),
}

impl<T: DeserializeOwned> RawListPayload<T> {
    /// Classifies a raw JSON payload, or `None` when it is malformed.
    ///
    /// A payload is an envelope iff it is an object whose `data` property is
    /// an array. A top-level array is a bare list. Anything else is
    /// malformed, as is a payload whose records fail to deserialize.
    /// Malformed never means an error: callers degrade it to an empty page,
    /// because the UI prefers an empty page over a crash when the backend
    /// violates its contract.
    ///
    /// Classification is idempotent: re-classifying the same payload always
    /// yields the same result.
    #[must_use]
    pub fn classify(raw: Value) -> Option<Self> {
        match raw {
            Value::Array(_) => serde_json::from_value(raw).ok().map(Self::Bare),
            Value::Object(map) if map.get("data").is_some_and(Value::is_array) => {
                serde_json::from_value(Value::Object(map))
                    .ok()
                    .map(Self::Envelope)
            }
            _ => None,
        }
    }

    /// Like [`RawListPayload::classify`], but collapses malformed payloads
    /// to an empty bare list for callers that do not care why a payload
    /// yielded no records.
    #[must_use]
    pub fn from_value(raw: Value) -> Self {
        Self::classify(raw).unwrap_or_else(|| Self::Bare(Vec::new()))
    }
}

impl<T> RawListPayload<T> {
    /// True when the payload carried pagination metadata at all.
    #[must_use]
    pub fn has_envelope(&self) -> bool {
        matches!(self, Self::Envelope(_))
    }

    /// The records, regardless of shape.
    #[must_use]
    pub fn records(&self) -> &[T] {
        match self {
            Self::Bare(records) => records,
            Self::Envelope(envelope) => &envelope.data,
        }
    }

    /// Consumes the payload, returning records and optional metadata
    /// `(total, limit, offset)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, Option<u64>, Option<usize>, Option<usize>) {
        match self {
            Self::Bare(records) => (records, None, None, None),
            Self::Envelope(envelope) => (
                envelope.data,
                envelope.total,
                envelope.limit,
                envelope.offset,
            ),
        }
    }
}
