//! The fixed candidate pool the matcher scores against
//!
//! Entries are materialized into scored [`MatchCandidate`]s fresh on every
//! search; nothing here is ever persisted.

use recordsdesk_domain::{ConfidenceTier, FileMeta, MatchCandidate, Timestamp};

/// An unscored entry in the candidate pool
#[derive(Debug, Clone)]
pub struct PoolEntry {
    /// Candidate identifier
    pub id: String,
    /// Record title
    pub title: String,
    /// Record description
    pub description: String,
    /// Source system label
    pub source: String,
    /// Key phrases describing the record
    pub key_phrases: Vec<String>,
    /// Record type tag
    pub record_type: String,
    /// When the underlying record was created
    pub created_date: Timestamp,
    /// Owning agency
    pub agency: String,
    /// Scanned-document metadata, when present
    pub file: Option<FileMeta>,
}

impl PoolEntry {
    /// Combined searchable text, lower-cased
    pub fn haystack(&self) -> String {
        format!("{} {}", self.title, self.description).to_lowercase()
    }

    /// Materialize a scored candidate from this entry
    pub fn into_candidate(self, relevance_score: f64, semantic_distance: f64) -> MatchCandidate {
        MatchCandidate {
            id: self.id,
            title: self.title,
            description: self.description,
            source: self.source,
            relevance_score,
            confidence: ConfidenceTier::from_score(relevance_score),
            key_phrases: self.key_phrases,
            semantic_distance,
            record_type: self.record_type,
            created_date: self.created_date,
            agency: self.agency,
            file: self.file,
        }
    }
}

fn ts(s: &str) -> Timestamp {
    Timestamp::parse(s).unwrap_or_else(Timestamp::now)
}

fn entry(
    id: &str,
    title: &str,
    description: &str,
    source: &str,
    key_phrases: &[&str],
    record_type: &str,
    created: &str,
    agency: &str,
    file: Option<(&str, u32)>,
) -> PoolEntry {
    PoolEntry {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        source: source.to_string(),
        key_phrases: key_phrases.iter().map(|p| p.to_string()).collect(),
        record_type: record_type.to_string(),
        created_date: ts(created),
        agency: agency.to_string(),
        file: file.map(|(name, pages)| FileMeta {
            file_name: name.to_string(),
            page_count: pages,
        }),
    }
}

/// The built-in candidate pool used by the API and CLI
pub fn builtin_pool() -> Vec<PoolEntry> {
    vec![
        entry(
            "cand-001",
            "Police incident report 2023-0114",
            "Incident report covering a traffic collision at 5th and Main with officer narrative",
            "records-archive",
            &["incident report", "traffic collision", "officer narrative"],
            "incident_report",
            "2023-01-14T00:00:00Z",
            "City Police Department",
            Some(("incident-2023-0114.pdf", 6)),
        ),
        entry(
            "cand-002",
            "Body-worn camera log, January 2023",
            "Index of body-worn camera footage retained for January patrol shifts",
            "records-archive",
            &["body camera", "footage index", "patrol"],
            "media_log",
            "2023-02-01T00:00:00Z",
            "City Police Department",
            None,
        ),
        entry(
            "cand-003",
            "Fire inspection report, 12 Oak Ave",
            "Annual fire safety inspection findings for the Oak Avenue commercial block",
            "inspection-system",
            &["fire inspection", "safety findings", "commercial"],
            "inspection_report",
            "2023-05-20T00:00:00Z",
            "Fire Marshal",
            Some(("inspection-oak-ave.pdf", 3)),
        ),
        entry(
            "cand-004",
            "FY2024 general fund budget ledger",
            "Line-item budget ledger for the general fund covering fiscal year 2024",
            "finance-erp",
            &["budget ledger", "general fund", "fiscal year"],
            "financial_record",
            "2023-09-30T00:00:00Z",
            "Finance Department",
            Some(("fy2024-ledger.pdf", 48)),
        ),
        entry(
            "cand-005",
            "Building permit applications, Q1 2024",
            "Permit applications and review notes for first-quarter construction projects",
            "permit-system",
            &["building permit", "construction", "review notes"],
            "permit_record",
            "2024-04-02T00:00:00Z",
            "Planning and Zoning",
            None,
        ),
        entry(
            "cand-006",
            "City council meeting minutes, March 2024",
            "Approved minutes of the regular city council meetings held in March",
            "clerk-repository",
            &["council minutes", "meeting", "approved"],
            "meeting_minutes",
            "2024-04-10T00:00:00Z",
            "City Clerk",
            Some(("council-minutes-2024-03.pdf", 22)),
        ),
        entry(
            "cand-007",
            "Arrest log summary, 2023",
            "Monthly arrest log summaries with charge categories, no juvenile entries",
            "records-archive",
            &["arrest log", "charge categories", "monthly summary"],
            "arrest_log",
            "2024-01-15T00:00:00Z",
            "City Police Department",
            None,
        ),
        entry(
            "cand-008",
            "Traffic study, Main Street corridor",
            "Vehicle and pedestrian counts with signal timing analysis for the Main Street corridor",
            "engineering-files",
            &["traffic study", "pedestrian counts", "signal timing"],
            "study_report",
            "2023-11-08T00:00:00Z",
            "Public Works",
            Some(("main-street-traffic-study.pdf", 31)),
        ),
        entry(
            "cand-009",
            "Restaurant health inspections, 2023",
            "Routine and complaint-driven restaurant health inspection reports for 2023",
            "inspection-system",
            &["health inspection", "restaurant", "complaint"],
            "inspection_report",
            "2024-01-05T00:00:00Z",
            "Health Department",
            None,
        ),
        entry(
            "cand-010",
            "Public works contract awards, 2023",
            "Contract award notices and bid tabulations for public works projects in 2023",
            "finance-erp",
            &["contract award", "bid tabulation", "public works"],
            "contract_record",
            "2024-02-20T00:00:00Z",
            "Public Works",
            Some(("contract-awards-2023.pdf", 14)),
        ),
    ]
}
