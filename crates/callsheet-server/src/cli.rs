//! Command-line arguments for the server binary.

use crate::config::{ConfigError, ServerConfig};
use clap::Parser;
use std::path::PathBuf;

/// Callsheet Server - Actor Information Intake
#[derive(Debug, Parser)]
#[command(name = "callsheet-server")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Load configuration from a TOML file
    ///
    /// Without it the server starts with the development defaults
    /// (127.0.0.1:8080, ./callsheet.db).
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Resolve the server configuration these arguments select
    pub fn server_config(&self) -> Result<ServerConfig, ConfigError> {
        match &self.config {
            Some(path) => ServerConfig::from_file(path),
            None => Ok(ServerConfig::default_dev_config()),
        }
    }
}
