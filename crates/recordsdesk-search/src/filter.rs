//! Filter predicate evaluator
//!
//! Each criterion is evaluated independently and combined with logical AND;
//! an unset criterion is a no-op. The filtered view is recomputed from the
//! full list and the criteria every time either changes.

use crate::text::matches_text;
use recordsdesk_domain::timestamp::{day_end, day_start};
use recordsdesk_domain::{FilterCriteria, RequestRecord};

/// Whether a single record is included by the criteria
///
/// Department and status checks are plain set membership; department tags
/// are compared exactly, so the selection vocabulary must match the tags
/// records actually carry. Only the free-text query is case-insensitive.
pub fn matches(record: &RequestRecord, criteria: &FilterCriteria) -> bool {
    if !criteria.departments.is_empty() && !criteria.departments.contains(&record.department) {
        return false;
    }

    if !criteria.statuses.is_empty() && !criteria.statuses.contains(&record.status) {
        return false;
    }

    if let Some(start) = criteria.start_date {
        if record.submitted_at < day_start(start) {
            return false;
        }
    }
    if let Some(end) = criteria.end_date {
        if record.submitted_at > day_end(end) {
            return false;
        }
    }

    matches_text(record, &criteria.query)
}

/// Derive the filtered view from a consistent snapshot of records and
/// criteria
pub fn apply(records: &[RequestRecord], criteria: &FilterCriteria) -> Vec<RequestRecord> {
    records
        .iter()
        .filter(|r| matches(r, criteria))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use recordsdesk_domain::{RequestId, RequestStatus, Timestamp, TrackingCode};

    fn record(
        seq: u64,
        department: &str,
        status: RequestStatus,
        submitted: &str,
        title: &str,
        description: &str,
    ) -> RequestRecord {
        let ts = Timestamp::parse(submitted).unwrap();
        RequestRecord {
            id: RequestId::from_sequence(seq),
            tracking_code: TrackingCode::from_parts(2024, seq),
            title: title.to_string(),
            description: description.to_string(),
            department: department.to_string(),
            status,
            submitted_at: ts,
            updated_at: ts,
            contact_email: format!("requester{}@example.com", seq),
            attachment_count: 0,
            notes: Vec::new(),
            associated_records: Vec::new(),
        }
    }

    fn fixture() -> Vec<RequestRecord> {
        vec![
            record(
                1,
                "police",
                RequestStatus::Submitted,
                "2024-01-01T10:00:00Z",
                "Incident report request",
                "Copy of the incident report filed January 1st",
            ),
            record(
                2,
                "fire",
                RequestStatus::Processing,
                "2024-01-02T10:00:00Z",
                "Inspection records",
                "Fire inspection records for 12 Oak Ave",
            ),
            record(
                3,
                "finance",
                RequestStatus::Completed,
                "2024-01-03T10:00:00Z",
                "Budget ledger",
                "FY2024 general fund ledger",
            ),
        ]
    }

    #[test]
    fn test_empty_criteria_is_identity() {
        let records = fixture();
        let filtered = apply(&records, &FilterCriteria::default());
        assert_eq!(filtered, records);
    }

    #[test]
    fn test_department_filter() {
        let records = fixture();
        let criteria = FilterCriteria {
            departments: vec!["police".to_string()],
            ..Default::default()
        };
        let filtered = apply(&records, &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].department, "police");
    }

    #[test]
    fn test_department_filter_is_exact_membership() {
        let records = fixture();
        let criteria = FilterCriteria {
            departments: vec!["Police".to_string()],
            ..Default::default()
        };
        // Tags are compared exactly; "Police" is not the "police" tag
        assert!(apply(&records, &criteria).is_empty());
    }

    #[test]
    fn test_status_filter() {
        let records = fixture();
        let criteria = FilterCriteria {
            statuses: vec![RequestStatus::Processing, RequestStatus::Completed],
            ..Default::default()
        };
        let filtered = apply(&records, &criteria);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_date_range_bounds_are_inclusive() {
        let records = fixture();
        let criteria = FilterCriteria {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 2),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 3),
            ..Default::default()
        };
        let filtered = apply(&records, &criteria);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.department != "police"));
    }

    #[test]
    fn test_open_ended_date_range() {
        let records = fixture();
        let criteria = FilterCriteria {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 2),
            ..Default::default()
        };
        assert_eq!(apply(&records, &criteria).len(), 2);

        let criteria = FilterCriteria {
            end_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            ..Default::default()
        };
        assert_eq!(apply(&records, &criteria).len(), 1);
    }

    #[test]
    fn test_phrase_search_matches_single_record() {
        let records = fixture();
        let criteria = FilterCriteria {
            query: "incident report".to_string(),
            ..Default::default()
        };
        let filtered = apply(&records, &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, RequestId::from_sequence(1));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let records = fixture();
        let upper = FilterCriteria {
            query: "POLICE".to_string(),
            ..Default::default()
        };
        let lower = FilterCriteria {
            query: "police".to_string(),
            ..Default::default()
        };
        assert_eq!(apply(&records, &upper), apply(&records, &lower));
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let records = fixture();
        let criteria = FilterCriteria {
            departments: vec!["fire".to_string()],
            statuses: vec![RequestStatus::Submitted],
            ..Default::default()
        };
        // Fire record is Processing, so the conjunction excludes it
        assert!(apply(&records, &criteria).is_empty());
    }
}
