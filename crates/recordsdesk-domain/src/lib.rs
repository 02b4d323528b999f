//! Recordsdesk Domain Layer
//!
//! Core domain model for the public-records request portal: request records
//! with tracking codes and lifecycle statuses, filter criteria, match
//! candidates produced by the similarity matcher, PII findings, and the
//! trait seams the infrastructure crates implement.
//!
//! ## Key Concepts
//!
//! - **Request record**: a citizen's records request, keyed internally by a
//!   generated id and publicly by an immutable tracking code
//! - **Filter criteria**: AND-combined predicates over department, status,
//!   date range, and free text
//! - **Match candidate**: a scored entry from the candidate pool; becomes an
//!   associated record only after an explicit accept
//! - **PII finding**: one detected instance of personally identifiable
//!   information at a page location, loaded from a CSV export
//!
//! Infrastructure implementations (SQLite store, HTTP API) live in other
//! crates; this crate defines the types and the `RequestStore` trait only.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod candidate;
pub mod filter;
pub mod pii;
pub mod request;
pub mod status;
pub mod timestamp;
pub mod traits;

// Re-exports for convenience
pub use candidate::{ConfidenceTier, FileMeta, MatchCandidate};
pub use filter::FilterCriteria;
pub use pii::{BoundingBox, PiiCategory, PiiFinding};
pub use request::{AssociatedRecord, InternalNote, RequestId, RequestRecord, TrackingCode};
pub use status::RequestStatus;
pub use timestamp::Timestamp;
pub use traits::{NewRequest, RequestStore, SavedRequest};
