//! Filter module - criteria for browsing the request list

use crate::status::RequestStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// AND-combined filter criteria over the request list
///
/// Every criterion is a no-op when unset: an empty department set means
/// "all departments", an unset date bound imposes no constraint on that
/// side, and a whitespace-only query filters nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Selected department tags; empty = all
    #[serde(default)]
    pub departments: Vec<String>,

    /// Selected statuses; empty = all
    #[serde(default)]
    pub statuses: Vec<RequestStatus>,

    /// Inclusive lower bound on the submission date
    #[serde(default)]
    pub start_date: Option<NaiveDate>,

    /// Inclusive upper bound on the submission date
    #[serde(default)]
    pub end_date: Option<NaiveDate>,

    /// Free-text query over title, description, tracking code, and email
    #[serde(default)]
    pub query: String,
}

impl FilterCriteria {
    /// Whether every criterion is unset
    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
            && self.statuses.is_empty()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && !self.has_query()
    }

    /// Whether the free-text query is active (non-whitespace)
    pub fn has_query(&self) -> bool {
        !self.query.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(FilterCriteria::default().is_empty());
    }

    #[test]
    fn test_whitespace_query_counts_as_empty() {
        let criteria = FilterCriteria {
            query: "   \t ".to_string(),
            ..Default::default()
        };
        assert!(criteria.is_empty());
        assert!(!criteria.has_query());
    }

    #[test]
    fn test_any_set_criterion_makes_non_empty() {
        let criteria = FilterCriteria {
            departments: vec!["police".to_string()],
            ..Default::default()
        };
        assert!(!criteria.is_empty());
    }
}
