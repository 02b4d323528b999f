//! Show command implementation.

use crate::cli::ShowArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use recordsdesk_domain::RequestStore;
use recordsdesk_store::StoreError;

/// Execute the show command.
pub fn execute_show<S>(args: ShowArgs, store: &S, formatter: &Formatter) -> Result<()>
where
    S: RequestStore<Error = StoreError>,
{
    let request = store
        .find_by_tracking_code(&args.tracking_code)?
        .ok_or_else(|| CliError::NotFound(format!("No request with tracking code {}", args.tracking_code)))?;

    println!("{}", formatter.format_request_detail(&request)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use recordsdesk_store::MemoryStore;

    #[test]
    fn test_show_unknown_code() {
        let store = MemoryStore::new();
        let formatter = Formatter::new(OutputFormat::Table, false);
        let args = ShowArgs {
            tracking_code: "PRR-2024-9999".to_string(),
        };
        let err = execute_show(args, &store, &formatter).unwrap_err();
        assert!(matches!(err, CliError::NotFound(_)));
    }
}
