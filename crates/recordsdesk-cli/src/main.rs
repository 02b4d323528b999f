//! Recordsdesk CLI - Command-line interface for the public-records portal.

use clap::Parser;
use recordsdesk_cli::commands;
use recordsdesk_cli::{Cli, Command, Formatter, OutputFormat};
use recordsdesk_store::SqliteStore;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> recordsdesk_cli::Result<()> {
    let cli = Cli::parse();

    let format = cli.format.map(Into::into).unwrap_or(OutputFormat::Table);
    let formatter = Formatter::new(format, !cli.no_color);

    match cli.command {
        // Commands that never touch the store
        Command::Match(args) => commands::execute_match(args, &formatter),
        Command::Pii(args) => commands::execute_pii(args, &formatter),

        cmd => {
            let mut store = SqliteStore::new(&cli.store)?;
            match cmd {
                Command::Submit(args) => commands::execute_submit(args, &mut store, &formatter),
                Command::List(args) => commands::execute_list(args, &store, &formatter),
                Command::Show(args) => commands::execute_show(args, &store, &formatter),
                Command::SetStatus(args) => {
                    commands::execute_set_status(args, &mut store, &formatter)
                }
                Command::Note(args) => commands::execute_note(args, &mut store, &formatter),
                _ => unreachable!(),
            }
        }
    }
}
