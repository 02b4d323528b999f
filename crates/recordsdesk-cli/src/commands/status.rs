//! Set-status command implementation.

use crate::cli::SetStatusArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use recordsdesk_domain::{RequestId, RequestStore, Timestamp};
use recordsdesk_store::StoreError;

/// Execute the set-status command.
pub fn execute_set_status<S>(args: SetStatusArgs, store: &mut S, formatter: &Formatter) -> Result<()>
where
    S: RequestStore<Error = StoreError>,
{
    let id = RequestId::from_raw(args.id);
    let mut request = store
        .get(&id)?
        .ok_or_else(|| CliError::NotFound(format!("No request with id {}", id)))?;

    request.set_status(args.status.into(), Timestamp::now());
    store.update(&request)?;

    println!(
        "{}",
        formatter.success(&format!("{} is now {}", request.tracking_code, request.status))
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::StatusArg;
    use crate::output::OutputFormat;
    use recordsdesk_domain::{NewRequest, RequestStatus};
    use recordsdesk_store::MemoryStore;

    #[test]
    fn test_set_status_updates_record() {
        let mut store = MemoryStore::new();
        let saved = store
            .save(NewRequest {
                title: "Incident report".to_string(),
                description: "Report from 5th and Main".to_string(),
                department: "police".to_string(),
                contact_email: "a@b.c".to_string(),
                attachment_count: 0,
            })
            .unwrap();

        let formatter = Formatter::new(OutputFormat::Table, false);
        let args = SetStatusArgs {
            id: saved.id.as_str().to_string(),
            status: StatusArg::Processing,
        };
        execute_set_status(args, &mut store, &formatter).unwrap();

        let request = store.get(&saved.id).unwrap().unwrap();
        assert_eq!(request.status, RequestStatus::Processing);
    }

    #[test]
    fn test_set_status_unknown_id() {
        let mut store = MemoryStore::new();
        let formatter = Formatter::new(OutputFormat::Table, false);
        let args = SetStatusArgs {
            id: "req-999999".to_string(),
            status: StatusArg::Completed,
        };
        let err = execute_set_status(args, &mut store, &formatter).unwrap_err();
        assert!(matches!(err, CliError::NotFound(_)));
    }
}
