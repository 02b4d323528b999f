//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Recordsdesk CLI - Manage public-records requests from the command line.
#[derive(Debug, Parser)]
#[command(name = "recordsdesk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to the request store database
    #[arg(long, global = true, default_value = "recordsdesk.db")]
    pub store: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Submit a new records request
    Submit(SubmitArgs),

    /// List requests, optionally filtered
    List(ListArgs),

    /// Show a single request by tracking code
    Show(ShowArgs),

    /// Change the status of a request
    SetStatus(SetStatusArgs),

    /// Attach an internal staff note to a request
    Note(NoteArgs),

    /// Run the similarity matcher against a description
    Match(MatchArgs),

    /// Look up PII findings for a record id
    Pii(PiiArgs),
}

/// Arguments for the submit command.
#[derive(Debug, Parser)]
pub struct SubmitArgs {
    /// Short title of the request
    #[arg(short, long)]
    pub title: String,

    /// Description of the records sought
    #[arg(short, long)]
    pub description: String,

    /// Owning department tag
    #[arg(short = 'D', long)]
    pub department: String,

    /// Contact email for the citizen
    #[arg(short, long)]
    pub email: String,

    /// Number of attached files
    #[arg(long, default_value = "0")]
    pub attachments: u32,
}

/// Arguments for the list command.
#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Filter by department (repeatable)
    #[arg(short, long = "department")]
    pub departments: Vec<String>,

    /// Filter by status (repeatable)
    #[arg(short, long = "status", value_enum)]
    pub statuses: Vec<StatusArg>,

    /// Free-text search over title, description, tracking code, and email
    #[arg(short, long)]
    pub query: Option<String>,

    /// Earliest submission date (YYYY-MM-DD, inclusive)
    #[arg(long)]
    pub from: Option<String>,

    /// Latest submission date (YYYY-MM-DD, inclusive)
    #[arg(long)]
    pub to: Option<String>,
}

/// Arguments for the show command.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Public tracking code (e.g., PRR-2024-0042)
    pub tracking_code: String,
}

/// Arguments for the set-status command.
#[derive(Debug, Parser)]
pub struct SetStatusArgs {
    /// Internal request id (e.g., req-000042)
    pub id: String,

    /// New status
    #[arg(value_enum)]
    pub status: StatusArg,
}

/// Arguments for the note command.
#[derive(Debug, Parser)]
pub struct NoteArgs {
    /// Internal request id (e.g., req-000042)
    pub id: String,

    /// Staff member writing the note
    #[arg(short, long)]
    pub author: String,

    /// Note text
    #[arg(short, long)]
    pub body: String,
}

/// Arguments for the match command.
#[derive(Debug, Parser)]
pub struct MatchArgs {
    /// Request description to score against the candidate pool
    pub description: String,

    /// Additional search terms (repeatable)
    #[arg(short, long = "term")]
    pub terms: Vec<String>,

    /// Seed for score variation; omitted means no variation
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for the pii command.
#[derive(Debug, Parser)]
pub struct PiiArgs {
    /// Record id to look up findings for
    pub record_id: String,

    /// Path to the findings CSV export
    #[arg(long)]
    pub csv: String,
}

/// Status argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum StatusArg {
    /// Received, not yet triaged
    Submitted,
    /// Staff are gathering records
    Processing,
    /// Pending redaction review
    UnderReview,
    /// Package delivered
    Completed,
    /// Denied or withdrawn
    Rejected,
}

impl From<StatusArg> for recordsdesk_domain::RequestStatus {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::Submitted => recordsdesk_domain::RequestStatus::Submitted,
            StatusArg::Processing => recordsdesk_domain::RequestStatus::Processing,
            StatusArg::UnderReview => recordsdesk_domain::RequestStatus::UnderReview,
            StatusArg::Completed => recordsdesk_domain::RequestStatus::Completed,
            StatusArg::Rejected => recordsdesk_domain::RequestStatus::Rejected,
        }
    }
}

impl From<CliFormat> for crate::output::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::output::OutputFormat::Table,
            CliFormat::Json => crate::output::OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recordsdesk_domain::RequestStatus;

    #[test]
    fn test_submit_command() {
        let cli = Cli::parse_from([
            "recordsdesk",
            "submit",
            "--title",
            "Incident report",
            "--description",
            "Report from 5th and Main",
            "--department",
            "police",
            "--email",
            "citizen@example.com",
        ]);
        match cli.command {
            Command::Submit(args) => assert_eq!(args.attachments, 0),
            _ => panic!("Expected Submit command"),
        }
    }

    #[test]
    fn test_list_filters_are_repeatable() {
        let cli = Cli::parse_from([
            "recordsdesk",
            "list",
            "-d",
            "police",
            "-d",
            "fire",
            "-s",
            "submitted",
            "--from",
            "2024-01-01",
        ]);
        match cli.command {
            Command::List(args) => {
                assert_eq!(args.departments, vec!["police", "fire"]);
                assert_eq!(args.statuses.len(), 1);
                assert_eq!(args.from.as_deref(), Some("2024-01-01"));
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_status_conversion() {
        let status: RequestStatus = StatusArg::UnderReview.into();
        assert!(matches!(status, RequestStatus::UnderReview));
    }

    #[test]
    fn test_global_store_flag() {
        let cli = Cli::parse_from(["recordsdesk", "--store", "/tmp/test.db", "list"]);
        assert_eq!(cli.store, "/tmp/test.db");
    }
}
