//! Callsheet Server
//!
//! HTTP front end for actor submissions: the HTML form and list view, a
//! small JSON API and a health check.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod handlers;
pub mod views;

use callsheet_extractor::{ExtractorError, PatternExtractor};
use callsheet_gatekeeper::Gatekeeper;
use callsheet_intake::SubmissionService;
use callsheet_store::{SqliteStore, StoreError};
use config::ServerConfig;
use handlers::{create_router, AppState};
use tokio::net::TcpListener;
use tracing::info;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Database could not be opened
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Extractor could not be built
    #[error("Extractor error: {0}")]
    Extractor(#[from] ExtractorError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Build the shared state from configuration
///
/// Opens the database and wires the extractor and gatekeeper into a
/// submission service.
pub fn build_state(config: &ServerConfig) -> Result<AppState, ServerError> {
    let store = SqliteStore::new(&config.database_path)?;
    let extractor = PatternExtractor::new(config.extractor.clone())?;
    let gatekeeper = Gatekeeper::new(config.validation.clone());

    Ok(AppState::new(SubmissionService::new(
        store, extractor, gatekeeper,
    )))
}

/// Start the HTTP server
///
/// Builds the application state and serves until the process exits.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    info!("Starting Callsheet server");
    info!("Bind address: {}", config.bind_addr());
    info!("Database: {}", config.database_path);
    info!(
        "Fixture overrides: {}",
        if config.extractor.apply_fixture_overrides {
            "enabled"
        } else {
            "disabled"
        }
    );

    let state = build_state(&config)?;
    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Server listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}
