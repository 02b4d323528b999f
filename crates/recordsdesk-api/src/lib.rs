//! Recordsdesk API
//!
//! HTTP service over the request portal core: filtered browsing, the
//! submission workflow, the mock matcher, and PII findings lookup.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

use config::ApiConfig;
use handlers::{create_router, AppState};
use recordsdesk_matcher::Matcher;
use recordsdesk_pii::FindingsIndex;
use recordsdesk_store::SqliteStore;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// API error
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Storage error during startup
    #[error("Storage error: {0}")]
    Store(#[from] recordsdesk_store::StoreError),

    /// Findings CSV failed to load
    #[error("PII findings error: {0}")]
    Pii(#[from] recordsdesk_pii::PiiError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Start the API HTTP server
///
/// Opens the store, loads the PII findings CSV when configured, and serves
/// the portal routes until the process is stopped.
pub async fn start_server(config: ApiConfig) -> Result<(), ApiError> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Recordsdesk API");
    info!("Bind address: {}", config.bind_addr());
    info!("Store: {}", config.store_path);

    let store = SqliteStore::new(&config.store_path)?;

    let findings = match &config.pii_csv {
        Some(path) => {
            let outcome = recordsdesk_pii::parser::load_from_path(path)?;
            if outcome.skipped > 0 {
                warn!(skipped = outcome.skipped, "malformed findings rows skipped");
            }
            info!(count = outcome.findings.len(), "PII findings loaded");
            FindingsIndex::from_findings(outcome.findings)
        }
        None => FindingsIndex::default(),
    };

    let state = AppState::new(store, findings, Matcher::with_builtin_pool(), &config);
    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("API listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ApiError::Server(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_test_config() {
        let config = ApiConfig::default_test_config();
        assert_eq!(config.store_path, ":memory:");
        assert_eq!(config.match_delay_max_ms, 0);
    }
}
