//! Paginated list reconciliation engine.
//!
//! The backend serving the admin front end is inconsistent about list
//! responses: the same logical resource may arrive as a bare JSON array or
//! as a `{data, total, limit, offset}` envelope, and it returns records the
//! business considers deleted (voided invoices) in plain listings. This
//! crate turns any such response into a page a UI pager can trust.
//!
//! # Pipeline
//!
//! ```text
//! raw payload → shape → filter → sort → reconcile → assemble → caller
//! ```
//!
//! - **shape**: classify bare array vs envelope; unknown shapes degrade to
//!   an empty page instead of erroring
//! - **filter**: apply the resource's mandatory client-side predicate
//! - **sort**: stable re-sort, most recent first
//! - **reconcile**: correct the backend-reported `total` for records the
//!   filter removed, without re-querying
//! - **assemble**: produce the final `(data, total, limit, offset)` tuple,
//!   slicing client-side when the backend returned the whole dataset
//!
//! The engine is a pure function of its inputs: no I/O, no shared state, no
//! caching. Concurrent calls are trivially safe. Transport errors never
//! reach it: the caller fetches, the engine only normalizes.
//!
//! # Example
//!
//! ```
//! use recount_engine::{pipeline, resources::InvoiceList};
//! use recount_types::PageRequest;
//! use serde_json::json;
//!
//! let raw = json!({
//!     "data": [
//!         {"id": "f1", "number": "F-001", "status": "issued",
//!          "issued_at": "2024-03-01T10:00:00Z"},
//!     ],
//!     "total": 1, "limit": 10, "offset": 0,
//! });
//! let page = pipeline::normalize(&InvoiceList, raw, &PageRequest::window(10, 0));
//! assert_eq!(page.data.len(), 1);
//! assert_eq!(page.total, 1);
//! ```

pub mod assemble;
pub mod filter;
pub mod pipeline;
pub mod reconcile;
pub mod resources;
pub mod shape;
pub mod sort;

mod resource;

pub use pipeline::normalize;
pub use reconcile::ReconcileContext;
pub use resource::ListResource;
