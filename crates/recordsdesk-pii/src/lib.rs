//! Recordsdesk PII Layer
//!
//! Loads PII findings from the detection pipeline's CSV export and serves
//! them grouped by record id. Findings are read-only once loaded.
//!
//! Malformed rows are never fatal: a row with the wrong field count or an
//! unparseable field is skipped with a warning and the rest of the file
//! still loads.

#![warn(missing_docs)]

pub mod index;
pub mod parser;

use thiserror::Error;

pub use index::FindingsIndex;
pub use parser::{parse_findings, ParseOutcome};

/// Errors that can occur while loading findings
///
/// Note that malformed *rows* are not errors; only I/O failures and a
/// missing/foreign header reject the whole file.
#[derive(Debug, Error)]
pub enum PiiError {
    /// Failed to read the CSV source
    #[error("Failed to read findings CSV: {0}")]
    Io(#[from] std::io::Error),

    /// The file does not start with the expected header row
    #[error("Unrecognized findings CSV header: {0}")]
    BadHeader(String),
}
