//! Note command implementation.

use crate::cli::NoteArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use recordsdesk_domain::{RequestId, RequestStore, Timestamp};
use recordsdesk_store::StoreError;

/// Execute the note command.
pub fn execute_note<S>(args: NoteArgs, store: &mut S, formatter: &Formatter) -> Result<()>
where
    S: RequestStore<Error = StoreError>,
{
    if args.body.trim().is_empty() {
        return Err(CliError::InvalidInput("Note body must not be empty".to_string()));
    }

    let id = RequestId::from_raw(args.id);
    let mut request = store
        .get(&id)?
        .ok_or_else(|| CliError::NotFound(format!("No request with id {}", id)))?;

    request.add_note(args.author, args.body, Timestamp::now());
    store.update(&request)?;

    println!(
        "{}",
        formatter.success(&format!(
            "Note added to {} ({} total)",
            request.tracking_code,
            request.notes.len()
        ))
    );
    Ok(())
}
