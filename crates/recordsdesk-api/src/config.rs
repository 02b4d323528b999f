//! Configuration file parsing for the API service.
//!
//! Loads settings from TOML files: bind address, store location, the PII
//! findings CSV, the simulated match latency window, and the browse-view
//! debounce interval.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// API configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A field failed validation
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// API configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Bind address (e.g., "127.0.0.1")
    pub bind_address: String,

    /// Bind port (e.g., 8080)
    pub bind_port: u16,

    /// SQLite database path, or ":memory:" for an ephemeral store
    #[serde(default = "default_store_path")]
    pub store_path: String,

    /// Findings CSV produced by the PII detection pipeline
    #[serde(default)]
    pub pii_csv: Option<PathBuf>,

    /// Lower bound of the simulated match latency (ms)
    #[serde(default = "default_match_delay_min")]
    pub match_delay_min_ms: u64,

    /// Upper bound of the simulated match latency (ms)
    #[serde(default = "default_match_delay_max")]
    pub match_delay_max_ms: u64,

    /// Fixed jitter seed for match scores; unset means fresh entropy per
    /// search
    #[serde(default)]
    pub match_seed: Option<u64>,

    /// Quiet period before the browse view is persisted (ms)
    #[serde(default = "default_view_debounce")]
    pub view_debounce_ms: u64,
}

fn default_store_path() -> String {
    ":memory:".to_string()
}

/// UX placeholder for a future real search call: 1.2–2.3 s
fn default_match_delay_min() -> u64 {
    1200
}

fn default_match_delay_max() -> u64 {
    2300
}

fn default_view_debounce() -> u64 {
    500
}

impl ApiConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: ApiConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.bind_address.is_empty() {
            return Err(ConfigError::Invalid("bind_address must be set".to_string()));
        }
        if self.match_delay_max_ms < self.match_delay_min_ms {
            return Err(ConfigError::Invalid(
                "match_delay_max_ms must be >= match_delay_min_ms".to_string(),
            ));
        }
        Ok(())
    }

    /// Socket address string the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }

    /// Create a default configuration for testing
    ///
    /// In-memory store, no PII file, zero match latency.
    pub fn default_test_config() -> Self {
        ApiConfig {
            bind_address: "127.0.0.1".to_string(),
            bind_port: 8080,
            store_path: ":memory:".to_string(),
            pii_csv: None,
            match_delay_min_ms: 0,
            match_delay_max_ms: 0,
            match_seed: Some(0),
            view_debounce_ms: 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let config: ApiConfig = toml::from_str(
            r#"
            bind_address = "0.0.0.0"
            bind_port = 9090
            "#,
        )
        .unwrap();

        assert_eq!(config.bind_addr(), "0.0.0.0:9090");
        assert_eq!(config.store_path, ":memory:");
        assert_eq!(config.match_delay_min_ms, 1200);
        assert_eq!(config.match_delay_max_ms, 2300);
        assert_eq!(config.view_debounce_ms, 500);
        assert!(config.pii_csv.is_none());
        assert!(config.match_seed.is_none());
    }

    #[test]
    fn test_invalid_delay_window_rejected() {
        let config: ApiConfig = toml::from_str(
            r#"
            bind_address = "127.0.0.1"
            bind_port = 8080
            match_delay_min_ms = 500
            match_delay_max_ms = 100
            "#,
        )
        .unwrap();

        assert!(config.validate().is_err());
    }
}
