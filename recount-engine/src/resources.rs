//! Built-in resource configurations.
//!
//! One [`ListResource`] implementation per backend list endpoint. Invoices
//! carry the mandatory filter (the backend keeps returning voided and
//! cancelled invoices in plain listings); quotes and items need none.

use crate::ListResource;
use serde::{Deserialize, Serialize};

/// Lifecycle status of an invoice.
///
/// The backend still emits the Spanish variant names in some deployments,
/// so those are accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    #[serde(alias = "borrador")]
    Draft,
    #[serde(alias = "emitida")]
    Issued,
    #[serde(alias = "pagada")]
    Paid,
    /// Logically deleted, but still present in backend listings.
    #[serde(alias = "anulada")]
    Voided,
    #[serde(alias = "cancelada")]
    Cancelled,
}

impl InvoiceStatus {
    /// True when the business considers this invoice logically deleted.
    #[must_use]
    pub fn is_void(self) -> bool {
        matches!(self, Self::Voided | Self::Cancelled)
    }
}

/// An invoice as returned by the backend's list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub number: String,
    #[serde(default)]
    pub client_name: Option<String>,
    pub status: InvoiceStatus,
    /// RFC 3339 issue timestamp; recency field for sorting.
    #[serde(default)]
    pub issued_at: Option<String>,
    #[serde(default)]
    pub total_cents: i64,
}

/// Invoice list configuration: drop voided/cancelled, sort by issue date.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvoiceList;

impl ListResource for InvoiceList {
    type Record = Invoice;

    fn keep(&self, record: &Invoice) -> bool {
        !record.status.is_void()
    }

    fn recency<'r>(&self, record: &'r Invoice) -> Option<&'r str> {
        record.issued_at.as_deref()
    }
}

/// A quote as returned by the backend's list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub id: String,
    pub number: String,
    #[serde(default)]
    pub client_name: Option<String>,
    /// Free-form status; quotes are never filtered client-side.
    #[serde(default)]
    pub status: Option<String>,
    /// RFC 3339 last-update timestamp; recency field for sorting.
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub total_cents: i64,
}

/// Quote list configuration: no filter, sort by last update.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuoteList;

impl ListResource for QuoteList {
    type Record = Quote;

    fn recency<'r>(&self, record: &'r Quote) -> Option<&'r str> {
        record.updated_at.as_deref()
    }
}

/// An inventory item as returned by the backend's list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
    /// RFC 3339 last-update timestamp; recency field for sorting.
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub price_cents: i64,
}

fn default_true() -> bool {
    true
}

/// Item list configuration: no filter, sort by last update.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemList;

impl ListResource for ItemList {
    type Record = Item;

    fn recency<'r>(&self, record: &'r Item) -> Option<&'r str> {
        record.updated_at.as_deref()
    }
}
