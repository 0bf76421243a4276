//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur while building an extractor
///
/// Extraction itself never fails; these only come out of construction and
/// configuration loading.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// A rule pattern failed to compile
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Configuration values are out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration could not be parsed
    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}
