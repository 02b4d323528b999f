//! Status module - lifecycle stages for request records

use serde::{Deserialize, Serialize};

/// Lifecycle status of a records request
///
/// The usual path is submitted → processing → under_review → completed (or
/// rejected), but transitions are deliberately unrestricted: staff may move
/// a request from any status to any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// Received from the citizen, not yet triaged
    Submitted,

    /// Staff are gathering responsive records
    Processing,

    /// Records assembled, pending redaction review
    UnderReview,

    /// Package delivered
    Completed,

    /// Request denied or withdrawn
    Rejected,
}

impl RequestStatus {
    /// All statuses, in workflow order
    pub const ALL: [RequestStatus; 5] = [
        RequestStatus::Submitted,
        RequestStatus::Processing,
        RequestStatus::UnderReview,
        RequestStatus::Completed,
        RequestStatus::Rejected,
    ];

    /// Get the status name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Submitted => "submitted",
            RequestStatus::Processing => "processing",
            RequestStatus::UnderReview => "under_review",
            RequestStatus::Completed => "completed",
            RequestStatus::Rejected => "rejected",
        }
    }

    /// Parse a status from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "submitted" => Some(RequestStatus::Submitted),
            "processing" => Some(RequestStatus::Processing),
            "under_review" => Some(RequestStatus::UnderReview),
            "completed" => Some(RequestStatus::Completed),
            "rejected" => Some(RequestStatus::Rejected),
            _ => None,
        }
    }

    /// Whether the request has reached a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, RequestStatus::Completed | RequestStatus::Rejected)
    }
}

impl std::str::FromStr for RequestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid status: {}", s))
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
