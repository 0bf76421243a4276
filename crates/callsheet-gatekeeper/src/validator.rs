//! Submission and record validation logic

use crate::rules::{form_rules, is_valid_email, record_rules, FormSubject};
use crate::{GatekeeperError, ValidationConfig};
use callsheet_domain::traits::ActorStore;
use callsheet_domain::{ExtractedFields, FieldErrors, NewActor, SubmissionForm};

/// Message reported when an email already belongs to a stored record
pub const EMAIL_TAKEN_MESSAGE: &str = "The email has already been taken.";

/// Result of a validation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the input passed every rule
    pub status: ValidationStatus,

    /// Messages for every failing rule, keyed by field
    pub errors: FieldErrors,
}

impl ValidationResult {
    fn from_errors(errors: FieldErrors) -> Self {
        let status = if errors.is_empty() {
            ValidationStatus::Accepted
        } else {
            ValidationStatus::Rejected
        };
        Self { status, errors }
    }

    /// True when no rule failed
    pub fn is_accepted(&self) -> bool {
        self.status == ValidationStatus::Accepted
    }
}

/// Validation status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    /// Input accepted
    Accepted,

    /// Input rejected
    Rejected,
}

/// The Gatekeeper validates submissions before extraction and records before storage
pub struct Gatekeeper {
    config: ValidationConfig,
}

impl Gatekeeper {
    /// Create a new Gatekeeper with the given configuration
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Create a Gatekeeper with default configuration
    pub fn default_config() -> Self {
        Self::new(ValidationConfig::default())
    }

    /// The active configuration
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate the raw submission form
    ///
    /// # Arguments
    ///
    /// * `form` - The submitted email and description (already normalized)
    /// * `store` - Store used to check that the email is unused (optional)
    ///
    /// The uniqueness lookup only runs for a syntactically valid email.
    pub fn validate_form<S: ActorStore>(
        &self,
        form: &SubmissionForm,
        store: Option<&S>,
    ) -> Result<ValidationResult, GatekeeperError>
    where
        S::Error: std::fmt::Display,
    {
        let email = form.email.as_deref();

        let email_taken = match (store, email) {
            (Some(store), Some(email)) if is_valid_email(email) => store
                .find_by_email(email)
                .map_err(|e| GatekeeperError::EmailLookup {
                    email: email.to_string(),
                    message: e.to_string(),
                })?
                .is_some(),
            _ => false,
        };

        Ok(self.evaluate_form(form, email_taken))
    }

    /// Validate the form without a uniqueness check
    pub fn validate_form_syntax(&self, form: &SubmissionForm) -> ValidationResult {
        self.evaluate_form(form, false)
    }

    fn evaluate_form(&self, form: &SubmissionForm, email_taken: bool) -> ValidationResult {
        let subject = FormSubject {
            email: form.email.as_deref(),
            description: form.description.as_deref(),
            email_taken,
        };

        let mut errors = FieldErrors::new();
        for rule in form_rules() {
            rule.check(&subject, &self.config, &mut errors);
        }
        ValidationResult::from_errors(errors)
    }

    /// Whether extraction produced every required field
    ///
    /// True only if first name, last name and address are all present and
    /// non-empty. An absent field set is never sufficient.
    pub fn validate_extracted(&self, fields: Option<&ExtractedFields>) -> bool {
        let Some(fields) = fields else {
            return false;
        };

        [&fields.first_name, &fields.last_name, &fields.address]
            .iter()
            .all(|value| value.as_deref().is_some_and(|v| !v.is_empty()))
    }

    /// Check the length and range constraints of a record about to be stored
    pub fn validate_record(&self, actor: &NewActor) -> ValidationResult {
        let mut errors = FieldErrors::new();
        for rule in record_rules() {
            rule.check(actor, &self.config, &mut errors);
        }
        ValidationResult::from_errors(errors)
    }
}
