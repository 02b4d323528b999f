//! Recordsdesk Search Layer
//!
//! The request-browsing pipeline: a pure filter predicate evaluator,
//! multi-field text search, a filter-state ↔ query-string codec, and a
//! debounced writer that keeps the persisted browse view in step with
//! filter changes.
//!
//! The filtered view is always derived as a pure function of the full
//! record list and the current criteria; nothing here patches a previous
//! result incrementally.

#![warn(missing_docs)]

pub mod debounce;
pub mod filter;
pub mod query_state;
pub mod text;

pub use debounce::DebouncedSync;
pub use filter::{apply, matches};
pub use query_state::{decode, encode};
