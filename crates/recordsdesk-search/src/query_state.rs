//! Filter-state ↔ query-string codec
//!
//! Five named parameters: `departments`, `statuses` (comma-separated,
//! empty entries dropped), `q`, `startDate`, `endDate`. Decoding is
//! lenient: unknown parameters are ignored, malformed dates and unknown
//! statuses are treated as unset. Encoding omits every unset criterion so
//! the string stays minimal; a fully-empty criteria set encodes to `""`.

use recordsdesk_domain::timestamp::parse_date;
use recordsdesk_domain::{FilterCriteria, RequestStatus};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
struct RawParams {
    #[serde(default)]
    departments: Option<String>,
    #[serde(default)]
    statuses: Option<String>,
    #[serde(default)]
    q: Option<String>,
    #[serde(default, rename = "startDate")]
    start_date: Option<String>,
    #[serde(default, rename = "endDate")]
    end_date: Option<String>,
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Hydrate filter criteria from a query string (without the leading `?`)
///
/// Never fails: an unparseable query string yields default criteria, and a
/// malformed individual value degrades to that criterion being unset.
pub fn decode(query_string: &str) -> FilterCriteria {
    let raw: RawParams = serde_urlencoded::from_str(query_string).unwrap_or_default();

    let statuses = raw
        .statuses
        .as_deref()
        .map(|s| {
            split_list(s)
                .iter()
                .filter_map(|v| RequestStatus::parse(v))
                .collect()
        })
        .unwrap_or_default();

    FilterCriteria {
        departments: raw.departments.as_deref().map(split_list).unwrap_or_default(),
        statuses,
        start_date: raw.start_date.as_deref().and_then(parse_date),
        end_date: raw.end_date.as_deref().and_then(parse_date),
        query: raw.q.unwrap_or_default(),
    }
}

/// Serialize active criteria back into a query string
///
/// Unset criteria are omitted entirely. The output parses back to an
/// equivalent criteria set via [`decode`].
pub fn encode(criteria: &FilterCriteria) -> String {
    let mut pairs: Vec<String> = Vec::new();

    if !criteria.departments.is_empty() {
        pairs.push(format!(
            "departments={}",
            urlencoding::encode(&criteria.departments.join(","))
        ));
    }
    if !criteria.statuses.is_empty() {
        let joined = criteria
            .statuses
            .iter()
            .map(RequestStatus::as_str)
            .collect::<Vec<_>>()
            .join(",");
        pairs.push(format!("statuses={}", urlencoding::encode(&joined)));
    }
    if criteria.has_query() {
        pairs.push(format!("q={}", urlencoding::encode(criteria.query.trim())));
    }
    if let Some(start) = criteria.start_date {
        pairs.push(format!("startDate={}", start.format("%Y-%m-%d")));
    }
    if let Some(end) = criteria.end_date {
        pairs.push(format!("endDate={}", end.format("%Y-%m-%d")));
    }

    pairs.join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_decode_full_parameter_set() {
        let criteria =
            decode("departments=police,fire&statuses=submitted,processing&q=ledger&startDate=2024-01-01&endDate=2024-02-01");

        assert_eq!(criteria.departments, vec!["police", "fire"]);
        assert_eq!(
            criteria.statuses,
            vec![RequestStatus::Submitted, RequestStatus::Processing]
        );
        assert_eq!(criteria.query, "ledger");
        assert_eq!(criteria.start_date, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(criteria.end_date, NaiveDate::from_ymd_opt(2024, 2, 1));
    }

    #[test]
    fn test_decode_empty_string() {
        assert!(decode("").is_empty());
    }

    #[test]
    fn test_decode_invalid_date_is_unset() {
        let criteria = decode("startDate=invalid-date&departments=police");
        assert_eq!(criteria.start_date, None);
        assert_eq!(criteria.departments, vec!["police"]);
    }

    #[test]
    fn test_decode_drops_empty_list_entries() {
        let criteria = decode("departments=police,,fire,");
        assert_eq!(criteria.departments, vec!["police", "fire"]);
    }

    #[test]
    fn test_decode_drops_unknown_statuses() {
        let criteria = decode("statuses=submitted,bogus,completed");
        assert_eq!(
            criteria.statuses,
            vec![RequestStatus::Submitted, RequestStatus::Completed]
        );
    }

    #[test]
    fn test_decode_ignores_unknown_parameters() {
        let criteria = decode("page=3&departments=fire");
        assert_eq!(criteria.departments, vec!["fire"]);
    }

    #[test]
    fn test_encode_omits_defaults() {
        assert_eq!(encode(&FilterCriteria::default()), "");

        let criteria = FilterCriteria {
            departments: vec!["police".to_string()],
            ..Default::default()
        };
        assert_eq!(encode(&criteria), "departments=police");
    }

    #[test]
    fn test_encode_percent_escapes_query() {
        let criteria = FilterCriteria {
            query: "incident report".to_string(),
            ..Default::default()
        };
        assert_eq!(encode(&criteria), "q=incident%20report");
    }

    #[test]
    fn test_roundtrip() {
        let criteria = FilterCriteria {
            departments: vec!["police".to_string(), "fire".to_string()],
            statuses: vec![RequestStatus::UnderReview],
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 31),
            query: "incident report".to_string(),
        };
        let encoded = encode(&criteria);
        assert_eq!(decode(&encoded), criteria);
    }
}
