//! List command implementation.

use crate::cli::ListArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use recordsdesk_domain::timestamp::parse_date;
use recordsdesk_domain::{FilterCriteria, RequestStore};
use recordsdesk_search::filter;
use recordsdesk_store::StoreError;

/// Execute the list command.
pub fn execute_list<S>(args: ListArgs, store: &S, formatter: &Formatter) -> Result<()>
where
    S: RequestStore<Error = StoreError>,
{
    let criteria = build_criteria(&args)?;

    let requests = store.list_all()?;
    let matched = filter::apply(&requests, &criteria);

    println!("{}", formatter.format_requests(&matched)?);
    Ok(())
}

/// Build filter criteria from command-line flags.
///
/// Unlike query parameters, an explicit `--from`/`--to` flag with a bad
/// date is rejected rather than silently ignored.
fn build_criteria(args: &ListArgs) -> Result<FilterCriteria> {
    let start_date = args
        .from
        .as_deref()
        .map(|s| {
            parse_date(s).ok_or_else(|| {
                CliError::InvalidInput(format!("Invalid --from date (expected YYYY-MM-DD): {}", s))
            })
        })
        .transpose()?;
    let end_date = args
        .to
        .as_deref()
        .map(|s| {
            parse_date(s).ok_or_else(|| {
                CliError::InvalidInput(format!("Invalid --to date (expected YYYY-MM-DD): {}", s))
            })
        })
        .transpose()?;

    Ok(FilterCriteria {
        departments: args.departments.clone(),
        statuses: args.statuses.iter().map(|s| (*s).into()).collect(),
        start_date,
        end_date,
        query: args.query.clone().unwrap_or_default(),
    })
}
