//! Recordsdesk Matcher
//!
//! The mock similarity matcher: extracts salient terms from a request
//! description, scores a fixed candidate pool by term overlap plus a phrase
//! bonus, and returns a ranked shortlist with an explanation of how the
//! scores came about.
//!
//! This stands in for a real semantic search index. The scoring itself is
//! deterministic; the small ±0.05 "realistic variation" the portal shows is
//! an injected, seedable [`Jitter`] so tests reproduce exactly.

#![warn(missing_docs)]

pub mod pool;
pub mod scorer;
pub mod terms;

pub use pool::{builtin_pool, PoolEntry};
pub use scorer::{Jitter, MatchExplanation, MatchOutcome, Matcher};
pub use terms::extract_terms;
