//! Match command implementation.

use crate::cli::MatchArgs;
use crate::error::Result;
use crate::output::Formatter;
use recordsdesk_matcher::{Jitter, Matcher};

/// Execute the match command.
///
/// Scores the built-in candidate pool against the given description.
/// Without `--seed` the scores are the raw overlap scores, which makes
/// scripted output stable.
pub fn execute_match(args: MatchArgs, formatter: &Formatter) -> Result<()> {
    let matcher = Matcher::with_builtin_pool();
    let mut jitter = match args.seed {
        Some(seed) => Jitter::seeded(seed),
        None => Jitter::none(),
    };

    let outcome = matcher.search(&args.description, &args.terms, &mut jitter);
    println!("{}", formatter.format_match_outcome(&outcome)?);
    Ok(())
}
