//! Findings grouped by record id

use recordsdesk_domain::PiiFinding;
use std::collections::HashMap;

/// Read-only lookup of PII findings keyed by record id
///
/// An unknown record id yields an empty slice, mirroring the "not found is
/// empty, not an error" convention used throughout the portal.
#[derive(Debug, Default)]
pub struct FindingsIndex {
    by_record: HashMap<String, Vec<PiiFinding>>,
}

impl FindingsIndex {
    /// Build an index from parsed findings
    pub fn from_findings(findings: Vec<PiiFinding>) -> Self {
        let mut by_record: HashMap<String, Vec<PiiFinding>> = HashMap::new();
        for finding in findings {
            by_record
                .entry(finding.record_id.clone())
                .or_default()
                .push(finding);
        }
        Self { by_record }
    }

    /// Findings for one record, in file order
    pub fn for_record(&self, record_id: &str) -> &[PiiFinding] {
        self.by_record
            .get(record_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of records with at least one finding
    pub fn record_count(&self) -> usize {
        self.by_record.len()
    }

    /// Total number of findings
    pub fn finding_count(&self) -> usize {
        self.by_record.values().map(Vec::len).sum()
    }
}
