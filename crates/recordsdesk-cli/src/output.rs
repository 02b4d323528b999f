//! Output formatting for the CLI.

use crate::error::Result;
use colored::*;
use recordsdesk_domain::{MatchCandidate, PiiFinding, RequestRecord, RequestStatus, SavedRequest};
use recordsdesk_matcher::MatchOutcome;
use serde_json;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a list of requests.
    pub fn format_requests(&self, requests: &[RequestRecord]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(requests)?),
            OutputFormat::Table => self.format_requests_table(requests),
        }
    }

    /// Format a single request with notes and associations.
    pub fn format_request_detail(&self, request: &RequestRecord) -> Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(request)?);
        }

        let mut out = String::new();
        out.push_str(&format!(
            "{}  {}\n",
            request.tracking_code.as_str().bold_if(self.color_enabled),
            self.colorize_status(request.status)
        ));
        out.push_str(&format!("Title:       {}\n", request.title));
        out.push_str(&format!("Department:  {}\n", request.department));
        out.push_str(&format!("Contact:     {}\n", request.contact_email));
        out.push_str(&format!("Submitted:   {}\n", request.submitted_at));
        out.push_str(&format!("Updated:     {}\n", request.updated_at));
        out.push_str(&format!("Attachments: {}\n", request.attachment_count));
        out.push_str(&format!("\n{}\n", request.description));

        if !request.notes.is_empty() {
            out.push_str(&format!("\nNotes ({}):\n", request.notes.len()));
            for note in &request.notes {
                out.push_str(&format!("  [{}] {}: {}\n", note.created_at, note.author, note.body));
            }
        }

        if !request.associated_records.is_empty() {
            out.push_str(&format!(
                "\nAssociated records ({}):\n",
                request.associated_records.len()
            ));
            for assoc in &request.associated_records {
                out.push_str(&format!(
                    "  {} - {} (score {:.2}, accepted by {})\n",
                    assoc.candidate_id, assoc.title, assoc.relevance_score, assoc.accepted_by
                ));
            }
        }

        Ok(out)
    }

    /// Format a matcher outcome: the ranked shortlist plus its explanation.
    pub fn format_match_outcome(&self, outcome: &MatchOutcome) -> Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(outcome)?);
        }

        let mut out = String::new();
        if outcome.results.is_empty() {
            out.push_str(&self.colorize("No candidates matched.", "yellow"));
            out.push('\n');
        } else {
            out.push_str(&self.format_candidates_table(&outcome.results)?);
            out.push('\n');
        }
        out.push_str(&format!("\n{}\n", outcome.explanation.summary));
        out.push_str(&format!(
            "Query terms: {}\n",
            outcome.explanation.query_terms.join(", ")
        ));
        out.push_str(&format!(
            "Keyword overlap: {:.2}\n",
            outcome.explanation.keyword_overlap
        ));
        Ok(out)
    }

    /// Format PII findings for one record.
    pub fn format_findings(&self, findings: &[PiiFinding]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(findings)?),
            OutputFormat::Table => self.format_findings_table(findings),
        }
    }

    /// Format the identifiers handed back from a submission.
    pub fn format_saved(&self, saved: &SavedRequest) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(saved)?),
            OutputFormat::Table => Ok(self.success(&format!(
                "Request submitted: {} (internal id {})",
                saved.tracking_code, saved.id
            ))),
        }
    }

    fn format_requests_table(&self, requests: &[RequestRecord]) -> Result<String> {
        if requests.is_empty() {
            return Ok(self.colorize("No requests found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["Tracking", "Title", "Department", "Status", "Submitted"]);

        for request in requests {
            builder.push_record([
                request.tracking_code.as_str(),
                &request.title,
                &request.department,
                &self.colorize_status(request.status),
                &request.submitted_at.date().to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    fn format_candidates_table(&self, candidates: &[MatchCandidate]) -> Result<String> {
        let mut builder = Builder::default();
        builder.push_record(["Id", "Title", "Agency", "Score", "Confidence"]);

        for candidate in candidates {
            let score = format!("{:.2}", candidate.relevance_score);
            builder.push_record([
                &candidate.id,
                &candidate.title,
                &candidate.agency,
                &score,
                candidate.confidence.as_str(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    fn format_findings_table(&self, findings: &[PiiFinding]) -> Result<String> {
        if findings.is_empty() {
            return Ok(self.colorize("No findings for this record.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["File", "Page", "Category", "Confidence", "Text"]);

        for finding in findings {
            let page = finding.page_number.to_string();
            let confidence = format!("{:.2}", finding.confidence);
            builder.push_record([
                &finding.file_name,
                &page,
                finding.category.as_str(),
                &confidence,
                &finding.text,
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize a status value by lifecycle stage.
    fn colorize_status(&self, status: RequestStatus) -> String {
        let color = match status {
            RequestStatus::Submitted => "blue",
            RequestStatus::Processing => "yellow",
            RequestStatus::UnderReview => "cyan",
            RequestStatus::Completed => "green",
            RequestStatus::Rejected => "red",
        };
        self.colorize(status.as_str(), color)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

trait BoldIf {
    fn bold_if(&self, enabled: bool) -> String;
}

impl BoldIf for str {
    fn bold_if(&self, enabled: bool) -> String {
        if enabled {
            self.bold().to_string()
        } else {
            self.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recordsdesk_domain::{
        RequestId, RequestRecord, RequestStatus, Timestamp, TrackingCode,
    };

    fn create_test_request() -> RequestRecord {
        let now = Timestamp::parse("2024-01-01T09:00:00Z").unwrap();
        RequestRecord {
            id: RequestId::from_sequence(1),
            tracking_code: TrackingCode::from_parts(2024, 1),
            title: "Police incident report".to_string(),
            description: "Incident report from 5th and Main".to_string(),
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
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_requests(&[create_test_request()]).unwrap();
        assert!(output.contains("tracking_code"));
        assert!(output.contains("PRR-2024-0001"));
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_requests(&[create_test_request()]).unwrap();
        assert!(output.contains("Tracking"));
        assert!(output.contains("submitted"));
    }

    #[test]
    fn test_empty_requests() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_requests(&[]).unwrap();
        assert!(output.contains("No requests found"));
    }

    #[test]
    fn test_detail_includes_notes() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let mut request = create_test_request();
        request.add_note("staff.reviewer", "checked archive", request.updated_at);
        let output = formatter.format_request_detail(&request).unwrap();
        assert!(output.contains("staff.reviewer"));
        assert!(output.contains("checked archive"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let msg = formatter.success("test");
        assert_eq!(msg, "✓ test");
    }
}
