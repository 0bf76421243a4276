//! Gatekeeper error types

use thiserror::Error;

/// Failures that stop validation from reaching a verdict
///
/// A rejected form is not an error; it comes back as a `ValidationResult`.
#[derive(Error, Debug)]
pub enum GatekeeperError {
    /// The uniqueness lookup for an email could not be completed
    #[error("Could not check whether {email} is taken: {message}")]
    EmailLookup {
        /// Email being checked
        email: String,
        /// Store failure
        message: String,
    },

    /// Limits in `ValidationConfig` are unusable
    #[error("Invalid validation config: {0}")]
    Config(String),
}
