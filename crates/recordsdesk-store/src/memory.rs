//! In-memory `RequestStore` for tests and ephemeral CLI use
//!
//! Same semantics as the SQLite store, including the sequence counter, so
//! either can back the API and CLI interchangeably.

use crate::StoreError;
use chrono::Datelike;
use recordsdesk_domain::{
    NewRequest, RequestId, RequestRecord, RequestStore, SavedRequest, Timestamp, TrackingCode,
};
use std::collections::BTreeMap;

/// A `BTreeMap`-backed store with a local sequence counter
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: BTreeMap<RequestId, RequestRecord>,
    seq: u64,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored requests
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no requests
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RequestStore for MemoryStore {
    type Error = StoreError;

    fn save(&mut self, new: NewRequest) -> Result<SavedRequest, Self::Error> {
        self.seq += 1;
        let now = Timestamp::now();
        let id = RequestId::from_sequence(self.seq);
        let tracking_code = TrackingCode::from_parts(now.date().year(), self.seq);

        let record = new.into_record(id.clone(), tracking_code.clone(), now);
        self.records.insert(id.clone(), record);

        Ok(SavedRequest { id, tracking_code })
    }

    fn get(&self, id: &RequestId) -> Result<Option<RequestRecord>, Self::Error> {
        Ok(self.records.get(id).cloned())
    }

    fn find_by_tracking_code(&self, code: &str) -> Result<Option<RequestRecord>, Self::Error> {
        Ok(self
            .records
            .values()
            .find(|r| r.tracking_code.as_str() == code)
            .cloned())
    }

    fn list_all(&self) -> Result<Vec<RequestRecord>, Self::Error> {
        Ok(self.records.values().cloned().collect())
    }

    fn update(&mut self, record: &RequestRecord) -> Result<(), Self::Error> {
        match self.records.get_mut(&record.id) {
            Some(slot) => {
                *slot = record.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound(record.id.to_string())),
        }
    }
}
