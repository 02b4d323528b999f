//! Multi-field text search over request records

use recordsdesk_domain::RequestRecord;

/// Case-insensitive substring containment
fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Whether a record matches a free-text query
///
/// The query is lower-cased and trimmed; a whitespace-only query matches
/// everything. Otherwise the query must appear as a substring of at least
/// one of: title, description, tracking code, or contact email.
pub fn matches_text(record: &RequestRecord, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    contains_ci(&record.title, &needle)
        || contains_ci(&record.description, &needle)
        || contains_ci(record.tracking_code.as_str(), &needle)
        || contains_ci(&record.contact_email, &needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use recordsdesk_domain::{RequestId, RequestStatus, Timestamp, TrackingCode};

    fn record(title: &str, description: &str, email: &str) -> RequestRecord {
        let now = Timestamp::parse("2024-01-01T00:00:00Z").unwrap();
        RequestRecord {
            id: RequestId::from_sequence(1),
            tracking_code: TrackingCode::from_parts(2024, 1),
            title: title.to_string(),
            description: description.to_string(),
            department: "police".to_string(),
            status: RequestStatus::Submitted,
            submitted_at: now,
            updated_at: now,
            contact_email: email.to_string(),
            attachment_count: 0,
            notes: Vec::new(),
            associated_records: Vec::new(),
        }
    }

    #[test]
    fn test_matches_any_field() {
        let r = record("Traffic study", "Counts for Main St", "jane@example.com");

        assert!(matches_text(&r, "traffic"));
        assert!(matches_text(&r, "main st"));
        assert!(matches_text(&r, "PRR-2024"));
        assert!(matches_text(&r, "jane@"));
        assert!(!matches_text(&r, "zoning"));
    }

    #[test]
    fn test_case_insensitive() {
        let r = record("Police report", "", "a@b.c");
        assert!(matches_text(&r, "POLICE"));
        assert!(matches_text(&r, "police"));
        assert!(matches_text(&r, "PoLiCe"));
    }

    #[test]
    fn test_whitespace_query_matches_everything() {
        let r = record("Anything", "", "a@b.c");
        assert!(matches_text(&r, ""));
        assert!(matches_text(&r, "   \t  "));
    }
}
