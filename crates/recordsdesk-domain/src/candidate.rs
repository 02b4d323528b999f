//! Candidate module - scored entries produced by the similarity matcher

use crate::timestamp::Timestamp;
use serde::{Deserialize, Serialize};

/// Coarse bucket derived from a numeric relevance score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    /// Score ≥ 0.75
    High,
    /// Score ≥ 0.5
    Medium,
    /// Everything below
    Low,
}

impl ConfidenceTier {
    /// Derive the tier from a relevance score
    pub fn from_score(score: f64) -> Self {
        if score >= 0.75 {
            ConfidenceTier::High
        } else if score >= 0.5 {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }

    /// Get the tier name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "high",
            ConfidenceTier::Medium => "medium",
            ConfidenceTier::Low => "low",
        }
    }
}

/// File metadata attached to a candidate, when the underlying record has a
/// scanned document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileMeta {
    /// Document file name
    pub file_name: String,
    /// Page count of the scan
    pub page_count: u32,
}

/// A scored match candidate
///
/// Materialized fresh from the candidate pool on every search; never
/// persisted. It only survives a search when staff accept it, at which
/// point its fields are copied into an
/// [`AssociatedRecord`](crate::request::AssociatedRecord).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchCandidate {
    /// Candidate identifier within the pool
    pub id: String,

    /// Record title
    pub title: String,

    /// Record description
    pub description: String,

    /// Source system label
    pub source: String,

    /// Relevance score in [0, 1]
    pub relevance_score: f64,

    /// Tier bucket derived from the relevance score
    pub confidence: ConfidenceTier,

    /// Key phrases describing the record
    pub key_phrases: Vec<String>,

    /// Semantic distance; inverse of relevance, not strictly derived from
    /// the final (jittered) score
    pub semantic_distance: f64,

    /// Record type tag (e.g. `incident_report`)
    pub record_type: String,

    /// When the underlying record was created
    pub created_date: Timestamp,

    /// Agency that owns the record
    pub agency: String,

    /// Scanned-document metadata, when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<FileMeta>,
}
