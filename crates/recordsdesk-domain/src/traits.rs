//! Trait definitions for external interactions
//!
//! These traits define the boundary between domain logic and
//! infrastructure. The store is constructor-injected everywhere so the
//! filtering and matching logic can be tested against an in-memory fake.

use crate::request::{RequestId, RequestRecord, TrackingCode};
use crate::status::RequestStatus;
use crate::timestamp::Timestamp;
use serde::{Deserialize, Serialize};

/// The fields a citizen supplies when submitting a request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRequest {
    /// Short title
    pub title: String,
    /// Free-text description of the records sought
    pub description: String,
    /// Owning department tag
    pub department: String,
    /// Citizen's contact email
    pub contact_email: String,
    /// Number of files attached
    #[serde(default)]
    pub attachment_count: u32,
}

impl NewRequest {
    /// Materialize a full record from submission fields plus generated
    /// identifiers; called by store implementations inside `save`
    pub fn into_record(self, id: RequestId, tracking_code: TrackingCode, now: Timestamp) -> RequestRecord {
        RequestRecord {
            id,
            tracking_code,
            title: self.title,
            description: self.description,
            department: self.department,
            status: RequestStatus::Submitted,
            submitted_at: now,
            updated_at: now,
            contact_email: self.contact_email,
            attachment_count: self.attachment_count,
            notes: Vec::new(),
            associated_records: Vec::new(),
        }
    }
}

/// Identifiers a store hands back after saving a new request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedRequest {
    /// Generated internal id
    pub id: RequestId,
    /// Generated public tracking code
    pub tracking_code: TrackingCode,
}

/// Trait for persisting and retrieving request records
///
/// Implemented by the infrastructure layer (`recordsdesk-store`). Absent
/// records are `Ok(None)`, never an error.
pub trait RequestStore {
    /// Error type for store operations
    type Error;

    /// Persist a new request, allocating its id and tracking code
    fn save(&mut self, new: NewRequest) -> Result<SavedRequest, Self::Error>;

    /// Fetch a request by internal id
    fn get(&self, id: &RequestId) -> Result<Option<RequestRecord>, Self::Error>;

    /// Fetch a request by public tracking code
    fn find_by_tracking_code(&self, code: &str) -> Result<Option<RequestRecord>, Self::Error>;

    /// All requests, unfiltered
    fn list_all(&self) -> Result<Vec<RequestRecord>, Self::Error>;

    /// Overwrite an existing request
    fn update(&mut self, record: &RequestRecord) -> Result<(), Self::Error>;
}
