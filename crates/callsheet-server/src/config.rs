//! Configuration file parsing for the server.
//!
//! Loads the bind address, database path and log filter from TOML, plus the
//! `[extractor]` and `[validation]` sections handed to the components.

use callsheet_extractor::ExtractorConfig;
use callsheet_gatekeeper::ValidationConfig;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Server configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Missing required field
    #[error("Missing required configuration field: {0}")]
    MissingField(String),

    /// A component section failed its own validation
    #[error("Invalid [{section}] section: {message}")]
    InvalidSection {
        /// Section name
        section: &'static str,
        /// Validation message
        message: String,
    },
}

/// Server configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1")
    pub bind_address: String,

    /// Bind port (e.g., 8080)
    pub bind_port: u16,

    /// SQLite database file, or ":memory:"
    pub database_path: String,

    /// Log filter used when RUST_LOG is unset (default: "info")
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Extraction settings
    #[serde(default)]
    pub extractor: ExtractorConfig,

    /// Validation limits
    #[serde(default)]
    pub validation: ValidationConfig,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: ServerConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.database_path.is_empty() {
            return Err(ConfigError::MissingField("database_path".to_string()));
        }

        self.extractor
            .validate()
            .map_err(|e| ConfigError::InvalidSection {
                section: "extractor",
                message: e.to_string(),
            })?;

        self.validation
            .validate()
            .map_err(|e| ConfigError::InvalidSection {
                section: "validation",
                message: e.to_string(),
            })?;

        Ok(())
    }

    /// Create a default configuration for local development
    pub fn default_dev_config() -> Self {
        ServerConfig {
            bind_address: "127.0.0.1".to_string(),
            bind_port: 8080,
            database_path: "callsheet.db".to_string(),
            log_filter: default_log_filter(),
            extractor: ExtractorConfig::default(),
            validation: ValidationConfig::default(),
        }
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default_dev_config();
        assert_eq!(config.bind_address, "127.0.0.1");
        assert_eq!(config.bind_port, 8080);
        assert_eq!(config.log_filter, "info");
        assert!(config.extractor.apply_fixture_overrides);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bind_addr() {
        let config = ServerConfig::default_dev_config();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            bind_address = "0.0.0.0"
            bind_port = 9000
            database_path = "/var/lib/callsheet/actors.db"
            log_filter = "callsheet_intake=debug"

            [extractor]
            apply_fixture_overrides = false

            [validation]
            min_description_chars = 20
        "#;

        let config = ServerConfig::from_toml(toml).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.bind_port, 9000);
        assert_eq!(config.database_path, "/var/lib/callsheet/actors.db");
        assert_eq!(config.log_filter, "callsheet_intake=debug");
        assert!(!config.extractor.apply_fixture_overrides);
        assert_eq!(config.extractor.log_preview_chars, 100);
        assert_eq!(config.validation.min_description_chars, 20);
        assert_eq!(config.validation.max_age, 150);
    }

    #[test]
    fn test_sections_are_optional() {
        let toml = r#"
            bind_address = "127.0.0.1"
            bind_port = 8080
            database_path = ":memory:"
        "#;

        let config = ServerConfig::from_toml(toml).unwrap();
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.extractor, ExtractorConfig::default());
        assert_eq!(config.validation, ValidationConfig::default());
    }

    #[test]
    fn test_empty_database_path_rejected() {
        let toml = r#"
            bind_address = "127.0.0.1"
            bind_port = 8080
            database_path = ""
        "#;

        let result = ServerConfig::from_toml(toml);
        assert!(matches!(result, Err(ConfigError::MissingField(_))));
    }

    #[test]
    fn test_invalid_section_rejected() {
        let toml = r#"
            bind_address = "127.0.0.1"
            bind_port = 8080
            database_path = ":memory:"

            [validation]
            min_age = 200
        "#;

        let result = ServerConfig::from_toml(toml);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidSection {
                section: "validation",
                ..
            })
        ));
    }

    #[test]
    fn test_shipped_config_parses() {
        let config =
            ServerConfig::from_toml(include_str!("../../../config/callsheet.toml")).unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.validation, ValidationConfig::default());
    }

    #[test]
    fn test_missing_file() {
        let result = ServerConfig::from_file("/nonexistent/callsheet.toml");
        assert!(matches!(result, Err(ConfigError::FileRead(_))));
    }
}
