//! Request module - the records request and its identifiers

use crate::candidate::MatchCandidate;
use crate::status::RequestStatus;
use crate::timestamp::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Internal storage key for a request
///
/// Generated from the store's sequence counter (`req-000042`); never shown
/// to citizens. The public identifier is the [`TrackingCode`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    /// Build an id from a sequence number
    pub fn from_sequence(seq: u64) -> Self {
        Self(format!("req-{:06}", seq))
    }

    /// Wrap a raw id (storage layer deserialization)
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Public-facing tracking code (`PRR-2024-0042`)
///
/// Globally unique and immutable after creation. Citizens use this to look
/// up their request; the internal [`RequestId`] never leaves the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackingCode(String);

impl TrackingCode {
    /// Build a tracking code from a year and sequence number
    pub fn from_parts(year: i32, seq: u64) -> Self {
        Self(format!("PRR-{}-{:04}", year, seq))
    }

    /// Wrap a raw code (storage layer deserialization)
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A staff note attached to a request, invisible to the citizen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternalNote {
    /// Staff member who wrote the note
    pub author: String,
    /// Note text
    pub body: String,
    /// When the note was added
    pub created_at: Timestamp,
}

/// A match candidate staff have explicitly accepted onto a request
///
/// Copies the candidate's identifying fields at acceptance time; the pool
/// entry itself is never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssociatedRecord {
    /// Candidate id from the pool
    pub candidate_id: String,
    /// Candidate title at acceptance time
    pub title: String,
    /// Source label of the candidate
    pub source: String,
    /// Relevance score the matcher reported when staff accepted
    pub relevance_score: f64,
    /// Staff member who accepted the candidate
    pub accepted_by: String,
    /// When the candidate was accepted
    pub accepted_at: Timestamp,
}

/// A citizen's public-records request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestRecord {
    /// Internal storage key
    pub id: RequestId,

    /// Public tracking code, immutable after creation
    pub tracking_code: TrackingCode,

    /// Short title of the request
    pub title: String,

    /// Free-text description of the records sought
    pub description: String,

    /// Owning department tag
    pub department: String,

    /// Current lifecycle status
    pub status: RequestStatus,

    /// When the citizen submitted the request
    pub submitted_at: Timestamp,

    /// Last modification instant
    pub updated_at: Timestamp,

    /// Citizen's contact email
    pub contact_email: String,

    /// Number of files the citizen attached
    pub attachment_count: u32,

    /// Staff-only notes
    #[serde(default)]
    pub notes: Vec<InternalNote>,

    /// Candidates staff have accepted onto this request
    #[serde(default)]
    pub associated_records: Vec<AssociatedRecord>,
}

impl RequestRecord {
    /// Set the status and bump `updated_at`
    ///
    /// Any status may follow any other; there is no transition guard.
    pub fn set_status(&mut self, status: RequestStatus, now: Timestamp) {
        self.status = status;
        self.updated_at = now;
    }

    /// Append a staff note and bump `updated_at`
    pub fn add_note(&mut self, author: impl Into<String>, body: impl Into<String>, now: Timestamp) {
        self.notes.push(InternalNote {
            author: author.into(),
            body: body.into(),
            created_at: now,
        });
        self.updated_at = now;
    }

    /// Accept a match candidate onto this request
    ///
    /// Copies the candidate's fields into a new [`AssociatedRecord`] with
    /// acceptance metadata and bumps `updated_at`.
    pub fn accept_candidate(
        &mut self,
        candidate: &MatchCandidate,
        accepted_by: impl Into<String>,
        now: Timestamp,
    ) {
        self.associated_records.push(AssociatedRecord {
            candidate_id: candidate.id.clone(),
            title: candidate.title.clone(),
            source: candidate.source.clone(),
            relevance_score: candidate.relevance_score,
            accepted_by: accepted_by.into(),
            accepted_at: now,
        });
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::ConfidenceTier;

    fn sample_record() -> RequestRecord {
        let now = Timestamp::parse("2024-01-01T09:00:00Z").unwrap();
        RequestRecord {
            id: RequestId::from_sequence(1),
            tracking_code: TrackingCode::from_parts(2024, 1),
            title: "Police incident report".to_string(),
            description: "Incident report from the corner of 5th and Main".to_string(),
            department: "police".to_string(),
            status: RequestStatus::Submitted,
            submitted_at: now,
            updated_at: now,
            contact_email: "citizen@example.com".to_string(),
            attachment_count: 0,
            notes: Vec::new(),
            associated_records: Vec::new(),
        }
    }

    #[test]
    fn test_id_and_code_formats() {
        assert_eq!(RequestId::from_sequence(42).as_str(), "req-000042");
        assert_eq!(TrackingCode::from_parts(2024, 42).as_str(), "PRR-2024-0042");
    }

    #[test]
    fn test_set_status_bumps_updated_at() {
        let mut record = sample_record();
        let later = Timestamp::parse("2024-01-02T09:00:00Z").unwrap();
        record.set_status(RequestStatus::Processing, later);

        assert_eq!(record.status, RequestStatus::Processing);
        assert_eq!(record.updated_at, later);
        // submitted_at is untouched
        assert!(record.submitted_at < record.updated_at);
    }

    #[test]
    fn test_any_status_transition_is_allowed() {
        let mut record = sample_record();
        let now = record.updated_at;
        record.set_status(RequestStatus::Completed, now);
        record.set_status(RequestStatus::Submitted, now);
        assert_eq!(record.status, RequestStatus::Submitted);
    }

    #[test]
    fn test_accept_candidate_copies_fields() {
        let mut record = sample_record();
        let candidate = MatchCandidate {
            id: "cand-7".to_string(),
            title: "Incident log 2023-114".to_string(),
            description: "Patrol incident log".to_string(),
            source: "records-archive".to_string(),
            relevance_score: 0.8,
            confidence: ConfidenceTier::High,
            key_phrases: vec!["incident".to_string()],
            semantic_distance: 0.2,
            record_type: "incident_report".to_string(),
            created_date: Timestamp::parse("2023-06-01T00:00:00Z").unwrap(),
            agency: "City Police".to_string(),
            file: None,
        };
        let when = Timestamp::parse("2024-02-01T10:00:00Z").unwrap();
        record.accept_candidate(&candidate, "staff.reviewer", when);

        assert_eq!(record.associated_records.len(), 1);
        let assoc = &record.associated_records[0];
        assert_eq!(assoc.candidate_id, "cand-7");
        assert_eq!(assoc.title, "Incident log 2023-114");
        assert_eq!(assoc.accepted_by, "staff.reviewer");
        assert_eq!(assoc.accepted_at, when);
        assert_eq!(record.updated_at, when);
    }

    #[test]
    fn test_record_json_roundtrip() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        let back: RequestRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Ids and tracking codes keep their fixed shapes for any sequence
            #[test]
            fn test_identifier_formats_hold(seq in 0u64..1_000_000, year in 2000i32..2100) {
                let id = RequestId::from_sequence(seq);
                prop_assert!(id.as_str().starts_with("req-"));
                prop_assert_eq!(id.as_str().len(), 10);

                let code = TrackingCode::from_parts(year, seq);
                let prefix = format!("PRR-{}-", year);
                prop_assert!(code.as_str().starts_with(&prefix));
            }

            /// Distinct sequence numbers never collide
            #[test]
            fn test_sequence_ids_are_injective(a in 0u64..100_000, b in 0u64..100_000) {
                prop_assume!(a != b);
                prop_assert_ne!(RequestId::from_sequence(a), RequestId::from_sequence(b));
            }
        }
    }

    #[test]
    fn test_record_deserializes_without_optional_lists() {
        // Older stored documents carry no notes/associated_records keys
        let json = r#"{
            "id": "req-000009",
            "tracking_code": "PRR-2024-0009",
            "title": "Budget ledger",
            "description": "FY24 ledger",
            "department": "finance",
            "status": "submitted",
            "submitted_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z",
            "contact_email": "a@b.c",
            "attachment_count": 0
        }"#;
        let record: RequestRecord = serde_json::from_str(json).unwrap();
        assert!(record.notes.is_empty());
        assert!(record.associated_records.is_empty());
    }
}
