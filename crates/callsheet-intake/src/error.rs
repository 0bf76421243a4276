//! Error types for submission processing

use callsheet_domain::FieldErrors;
use callsheet_gatekeeper::EMAIL_TAKEN_MESSAGE;
use thiserror::Error;

/// Message shown when extraction could not find the required fields
pub const INSUFFICIENT_DETAILS_MESSAGE: &str =
    "Please add first name, last name, and address to your description.";

/// Errors raised while processing a submission
///
/// None of these escape the orchestrator as faults; they are converted into
/// field-keyed messages with [`IntakeError::into_field_errors`].
#[derive(Error, Debug)]
pub enum IntakeError {
    /// Extraction did not produce first name, last name and address
    #[error("{}", INSUFFICIENT_DETAILS_MESSAGE)]
    InsufficientDetails,

    /// The record built from the extraction violates field constraints
    #[error("Record constraints violated on {} field(s)", .0.len())]
    Constraints(FieldErrors),

    /// The store rejected the insert because the email is taken
    #[error("{}", EMAIL_TAKEN_MESSAGE)]
    DuplicateEmail,

    /// Validation could not complete
    #[error("{0}")]
    Validation(String),

    /// Any other store failure
    #[error("{0}")]
    Store(String),
}

impl IntakeError {
    /// Form field the error is reported under
    pub fn field(&self) -> &'static str {
        match self {
            IntakeError::DuplicateEmail => "email",
            _ => "description",
        }
    }

    /// Convert into the field-keyed messages returned to the caller
    pub fn into_field_errors(self) -> FieldErrors {
        match self {
            IntakeError::Constraints(errors) => errors,
            other => FieldErrors::single(other.field(), other.to_string()),
        }
    }
}

impl From<callsheet_gatekeeper::GatekeeperError> for IntakeError {
    fn from(e: callsheet_gatekeeper::GatekeeperError) -> Self {
        IntakeError::Validation(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_details_message() {
        let errors = IntakeError::InsufficientDetails.into_field_errors();
        assert_eq!(errors.first("description"), Some(INSUFFICIENT_DETAILS_MESSAGE));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_duplicate_email_is_keyed_by_email() {
        let errors = IntakeError::DuplicateEmail.into_field_errors();
        assert_eq!(errors.first("email"), Some(EMAIL_TAKEN_MESSAGE));
    }

    #[test]
    fn test_store_error_is_keyed_by_description() {
        let errors = IntakeError::Store("disk I/O error".to_string()).into_field_errors();
        assert_eq!(errors.first("description"), Some("disk I/O error"));
    }

    #[test]
    fn test_constraints_pass_through() {
        let inner = FieldErrors::single("address", "too long");
        let errors = IntakeError::Constraints(inner.clone()).into_field_errors();
        assert_eq!(errors, inner);
    }
}
