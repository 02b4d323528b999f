//! Recordsdesk API server binary
//!
//! Starts the portal HTTP server.

use recordsdesk_api::{config::ApiConfig, start_server, ApiError};
use std::env;
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), ApiError> {
    // Parse command-line arguments
    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 2 && args[1] == "--config" {
        let config_path = &args[2];
        ApiConfig::from_file(config_path)?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else {
        eprintln!("Warning: No config file specified, using default test configuration");
        eprintln!("Usage: recordsdesk-api --config <path-to-config.toml>");
        eprintln!();
        ApiConfig::default_test_config()
    };

    start_server(config).await?;

    Ok(())
}

fn print_help() {
    println!("Recordsdesk API - Public Records Request Portal Backend");
    println!();
    println!("USAGE:");
    println!("    recordsdesk-api --config <path-to-config.toml>");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("CONFIGURATION:");
    println!("    The TOML config file should contain:");
    println!("    - bind_address: IP address to bind (e.g., '127.0.0.1')");
    println!("    - bind_port: Port number (e.g., 8080)");
    println!("    - store_path: SQLite path, or ':memory:' (default)");
    println!("    - pii_csv: optional path to the findings CSV");
    println!("    - match_delay_min_ms / match_delay_max_ms: simulated match latency");
    println!("    - view_debounce_ms: browse-view persistence quiet period (default 500)");
    println!();
}
