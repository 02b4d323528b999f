//! Submit command implementation.

use crate::cli::SubmitArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use recordsdesk_domain::{NewRequest, RequestStore};
use recordsdesk_store::StoreError;

/// Execute the submit command.
pub fn execute_submit<S>(args: SubmitArgs, store: &mut S, formatter: &Formatter) -> Result<()>
where
    S: RequestStore<Error = StoreError>,
{
    if args.title.trim().is_empty() {
        return Err(CliError::InvalidInput("Title must not be empty".to_string()));
    }
    if args.description.trim().is_empty() {
        return Err(CliError::InvalidInput(
            "Description must not be empty".to_string(),
        ));
    }

    let saved = store.save(NewRequest {
        title: args.title,
        description: args.description,
        department: args.department,
        contact_email: args.email,
        attachment_count: args.attachments,
    })?;

    println!("{}", formatter.format_saved(&saved)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use recordsdesk_store::MemoryStore;

    #[test]
    fn test_submit_rejects_empty_title() {
        let args = SubmitArgs {
            title: "  ".to_string(),
            description: "Incident report".to_string(),
            department: "police".to_string(),
            email: "a@b.c".to_string(),
            attachments: 0,
        };
        let mut store = MemoryStore::new();
        let formatter = Formatter::new(OutputFormat::Table, false);
        let err = execute_submit(args, &mut store, &formatter).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput(_)));
    }

    #[test]
    fn test_submit_persists_request() {
        let args = SubmitArgs {
            title: "Budget ledger".to_string(),
            description: "FY24 ledger".to_string(),
            department: "finance".to_string(),
            email: "a@b.c".to_string(),
            attachments: 2,
        };
        let mut store = MemoryStore::new();
        let formatter = Formatter::new(OutputFormat::Table, false);
        execute_submit(args, &mut store, &formatter).unwrap();
        assert_eq!(store.list_all().unwrap().len(), 1);
    }
}
