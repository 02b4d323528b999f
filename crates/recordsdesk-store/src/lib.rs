//! Recordsdesk Storage Layer
//!
//! Implements the `RequestStore` trait over SQLite: request records are
//! stored as JSON documents in a key/value table, with a named counter row
//! feeding the sequential id and tracking-code suffixes. An in-memory
//! implementation with identical semantics lives in [`memory`] for tests
//! and ephemeral CLI use.
//!
//! # Examples
//!
//! ```no_run
//! use recordsdesk_store::SqliteStore;
//!
//! let store = SqliteStore::new(":memory:").unwrap();
//! // Store is now ready for request operations
//! ```

#![warn(missing_docs)]

pub mod memory;

pub use memory::MemoryStore;

use chrono::Datelike;
use recordsdesk_domain::{
    NewRequest, RequestId, RequestRecord, RequestStore, SavedRequest, Timestamp, TrackingCode,
};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Request not found
    #[error("Request not found: {0}")]
    NotFound(String),

    /// Stored document failed to serialize or deserialize
    #[error("Invalid stored document: {0}")]
    InvalidData(String),
}

/// SQLite-based implementation of `RequestStore`
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe; wrap the store in a mutex (as
/// the API layer does) or give each thread its own instance.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a store at the given database path
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    fn initialize_schema(&self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    fn decode(body: &str) -> Result<RequestRecord, StoreError> {
        serde_json::from_str(body).map_err(|e| StoreError::InvalidData(e.to_string()))
    }

    fn encode(record: &RequestRecord) -> Result<String, StoreError> {
        serde_json::to_string(record).map_err(|e| StoreError::InvalidData(e.to_string()))
    }
}

impl RequestStore for SqliteStore {
    type Error = StoreError;

    fn save(&mut self, new: NewRequest) -> Result<SavedRequest, Self::Error> {
        // Sequence allocation and insert share one transaction so two
        // saves can never end up with the same tracking code
        let tx = self.conn.transaction()?;

        tx.execute(
            "UPDATE counters SET value = value + 1 WHERE name = 'request_seq'",
            [],
        )?;
        let seq: u64 = tx.query_row(
            "SELECT value FROM counters WHERE name = 'request_seq'",
            [],
            |row| row.get::<_, i64>(0).map(|v| v as u64),
        )?;

        let now = Timestamp::now();
        let id = RequestId::from_sequence(seq);
        let tracking_code = TrackingCode::from_parts(now.date().year(), seq);
        let record = new.into_record(id.clone(), tracking_code.clone(), now);
        let body = Self::encode(&record)?;

        tx.execute(
            "INSERT INTO requests (id, tracking_code, body) VALUES (?1, ?2, ?3)",
            params![id.as_str(), tracking_code.as_str(), body],
        )?;
        tx.commit()?;

        Ok(SavedRequest { id, tracking_code })
    }

    fn get(&self, id: &RequestId) -> Result<Option<RequestRecord>, Self::Error> {
        let body: Option<String> = self
            .conn
            .query_row(
                "SELECT body FROM requests WHERE id = ?1",
                params![id.as_str()],
                |row| row.get(0),
            )
            .optional()?;

        body.as_deref().map(Self::decode).transpose()
    }

    fn find_by_tracking_code(&self, code: &str) -> Result<Option<RequestRecord>, Self::Error> {
        let body: Option<String> = self
            .conn
            .query_row(
                "SELECT body FROM requests WHERE tracking_code = ?1",
                params![code],
                |row| row.get(0),
            )
            .optional()?;

        body.as_deref().map(Self::decode).transpose()
    }

    fn list_all(&self) -> Result<Vec<RequestRecord>, Self::Error> {
        let mut stmt = self.conn.prepare("SELECT body FROM requests ORDER BY id")?;
        let bodies = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;

        bodies.iter().map(|b| Self::decode(b)).collect()
    }

    fn update(&mut self, record: &RequestRecord) -> Result<(), Self::Error> {
        let body = Self::encode(record)?;
        let changed = self.conn.execute(
            "UPDATE requests SET body = ?1 WHERE id = ?2",
            params![body, record.id.as_str()],
        )?;

        if changed == 0 {
            return Err(StoreError::NotFound(record.id.to_string()));
        }
        Ok(())
    }
}
