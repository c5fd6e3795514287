//! Validated record identifiers.
//!
//! Single-record lookups must fail fast on a bad identifier *before* any
//! network call is made. Backend ids are opaque strings, so validation is a
//! local precondition check: non-empty, bounded length, restricted charset.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Longest identifier the backend is known to issue.
const MAX_LEN: usize = 64;

/// An opaque, validated backend record identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Parses and validates a record id.
    ///
    /// Accepts ASCII alphanumerics, `-` and `_`, 1 to 64 characters.
    pub fn parse(s: &str) -> crate::Result<Self> {
        if s.is_empty() {
            return Err(Error::InvalidRecordId("empty identifier".to_string()));
        }
        if s.len() > MAX_LEN {
            return Err(Error::InvalidRecordId(format!(
                "identifier exceeds {MAX_LEN} characters"
            )));
        }
        if let Some(bad) = s
            .chars()
            .find(|c| !c.is_ascii_alphanumeric() && *c != '-' && *c != '_')
        {
            return Err(Error::InvalidRecordId(format!(
                "identifier contains invalid character {bad:?}"
            )));
        }
        Ok(Self(s.to_string()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
