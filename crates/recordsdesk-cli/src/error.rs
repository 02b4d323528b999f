//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Store error
    #[error("Store error: {0}")]
    Store(#[from] recordsdesk_store::StoreError),

    /// PII findings error
    #[error("Findings error: {0}")]
    Pii(#[from] recordsdesk_pii::PiiError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Lookup failed
    #[error("Not found: {0}")]
    NotFound(String),
}
