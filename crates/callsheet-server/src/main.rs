//! Callsheet Server CLI
//!
//! Starts the HTTP server for actor submissions.

use callsheet_server::{cli::Cli, start_server, ServerError};
use clap::Parser;
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Bad arguments exit here with clap's usage message
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), ServerError> {
    if cli.config.is_none() {
        eprintln!("Warning: No config file specified, using default development configuration");
        eprintln!("Usage: callsheet-server --config <path-to-config.toml>");
        eprintln!();
    }

    let config = cli.server_config()?;

    init_tracing(&config.log_filter);

    start_server(config).await?;

    Ok(())
}

/// RUST_LOG wins over the configured filter when set
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
