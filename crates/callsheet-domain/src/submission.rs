//! Submission module - raw form input and the outcome of processing it

use crate::ActorRecord;
use std::collections::BTreeMap;

/// Raw input posted through the submission form
///
/// Both fields are optional so that a missing form field can be reported as
/// a validation error rather than a parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmissionForm {
    /// Submitter email
    pub email: Option<String>,

    /// Free-text actor description
    pub description: Option<String>,
}

impl SubmissionForm {
    /// Create a form from an email and description
    pub fn new(email: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            description: Some(description.into()),
        }
    }

    /// Trim surrounding whitespace; blank values become absent
    pub fn normalized(self) -> Self {
        fn clean(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        Self {
            email: clean(self.email),
            description: clean(self.description),
        }
    }
}

/// Field-keyed validation messages
///
/// Keys iterate in sorted order so rendered output is stable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl FieldErrors {
    /// Create an empty error map
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a map holding a single message
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    /// Append a message under a field
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// True when no field has a message
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields carrying at least one message
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// True when the field has at least one message
    pub fn has(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// First message recorded for a field
    pub fn first(&self, field: &str) -> Option<&str> {
        self.errors
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    /// All messages recorded for a field
    pub fn get(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate over `(field, messages)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.errors
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }
}

/// Outcome of processing a submission
///
/// Either the created record or the errors that prevented it, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    /// The submission was validated and persisted
    Accepted(ActorRecord),

    /// The submission was rejected
    Rejected(FieldErrors),
}

impl SubmissionResult {
    /// Whether a record was created
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionResult::Accepted(_))
    }

    /// The created record, on success
    pub fn data(&self) -> Option<&ActorRecord> {
        match self {
            SubmissionResult::Accepted(record) => Some(record),
            SubmissionResult::Rejected(_) => None,
        }
    }

    /// The errors, on failure
    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            SubmissionResult::Accepted(_) => None,
            SubmissionResult::Rejected(errors) => Some(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ActorId, NewActor};

    #[test]
    fn test_normalized_trims_and_drops_blank() {
        let form = SubmissionForm {
            email: Some("  jane@example.com \n".to_string()),
            description: Some("   ".to_string()),
        }
        .normalized();

        assert_eq!(form.email.as_deref(), Some("jane@example.com"));
        assert_eq!(form.description, None);
    }

    #[test]
    fn test_field_errors_collects_per_field() {
        let mut errors = FieldErrors::new();
        errors.add("email", "first");
        errors.add("email", "second");
        errors.add("description", "third");

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.first("email"), Some("first"));
        assert_eq!(errors.get("email").len(), 2);
        assert!(errors.get("address").is_empty());

        let fields: Vec<&str> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec!["description", "email"]);
    }

    #[test]
    fn test_result_exposes_exactly_one_side() {
        let record = ActorRecord::from_new(ActorId::new(), NewActor::default(), 0);
        let accepted = SubmissionResult::Accepted(record);
        assert!(accepted.is_success());
        assert!(accepted.data().is_some());
        assert!(accepted.errors().is_none());

        let rejected = SubmissionResult::Rejected(FieldErrors::single("email", "bad"));
        assert!(!rejected.is_success());
        assert!(rejected.data().is_none());
        assert_eq!(rejected.errors().and_then(|e| e.first("email")), Some("bad"));
    }
}
