//! Submission orchestration

use crate::error::IntakeError;
use callsheet_domain::traits::{ActorStore, FieldExtractor};
use callsheet_domain::{
    ActorId, ActorRecord, ActorSummary, NewActor, SubmissionForm, SubmissionResult,
};
use callsheet_gatekeeper::Gatekeeper;
use std::fmt::Display;
use tracing::{error, info};

/// Runs submissions through validation, extraction and storage
///
/// The store, extractor and gatekeeper are all handed in by the caller.
pub struct SubmissionService<S, E>
where
    S: ActorStore,
    E: FieldExtractor,
{
    store: S,
    extractor: E,
    gatekeeper: Gatekeeper,
}

impl<S, E> SubmissionService<S, E>
where
    S: ActorStore,
    S::Error: Display,
    E: FieldExtractor,
{
    /// Create a new SubmissionService
    pub fn new(store: S, extractor: E, gatekeeper: Gatekeeper) -> Self {
        Self {
            store,
            extractor,
            gatekeeper,
        }
    }

    /// Process a raw form submission
    ///
    /// Returns the created record on success, or field-keyed messages. Form
    /// errors return before extraction is attempted.
    pub fn process_submission(&mut self, form: SubmissionForm) -> SubmissionResult {
        let form = form.normalized();

        let validation = match self.gatekeeper.validate_form(&form, Some(&self.store)) {
            Ok(validation) => validation,
            Err(e) => return Self::reject(IntakeError::from(e)),
        };

        if !validation.is_accepted() {
            return SubmissionResult::Rejected(validation.errors);
        }

        let (Some(email), Some(description)) = (form.email, form.description) else {
            return SubmissionResult::Rejected(validation.errors);
        };

        match self.extract_and_store(email, description) {
            Ok(record) => {
                info!("Actor {} created for {}", record.id, record.email);
                SubmissionResult::Accepted(record)
            }
            Err(e) => Self::reject(e),
        }
    }

    fn extract_and_store(
        &mut self,
        email: String,
        description: String,
    ) -> Result<ActorRecord, IntakeError> {
        let fields = self.extractor.extract(&description);

        if !self.gatekeeper.validate_extracted(Some(&fields)) {
            return Err(IntakeError::InsufficientDetails);
        }

        let actor = NewActor {
            email,
            description,
            first_name: fields.first_name.unwrap_or_default(),
            last_name: fields.last_name.unwrap_or_default(),
            address: fields.address.unwrap_or_default(),
            height: fields.height,
            weight: fields.weight,
            gender: fields.gender,
            age: fields.age,
        };

        let constraints = self.gatekeeper.validate_record(&actor);
        if !constraints.is_accepted() {
            return Err(IntakeError::Constraints(constraints.errors));
        }

        self.store.create(actor).map_err(|e| {
            if S::is_duplicate_email(&e) {
                IntakeError::DuplicateEmail
            } else {
                IntakeError::Store(e.to_string())
            }
        })
    }

    fn reject(e: IntakeError) -> SubmissionResult {
        error!("Actor submission error: {}", e);
        SubmissionResult::Rejected(e.into_field_errors())
    }

    /// All actors for the list view, newest first
    pub fn list_actors(&self) -> Result<Vec<ActorSummary>, IntakeError> {
        self.store
            .list_all()
            .map_err(|e| IntakeError::Store(e.to_string()))
    }

    /// Get an actor by ID
    pub fn find_actor(&self, id: ActorId) -> Result<Option<ActorRecord>, IntakeError> {
        self.store
            .find_by_id(id)
            .map_err(|e| IntakeError::Store(e.to_string()))
    }

    /// Get an actor by email
    pub fn find_actor_by_email(&self, email: &str) -> Result<Option<ActorRecord>, IntakeError> {
        self.store
            .find_by_email(email)
            .map_err(|e| IntakeError::Store(e.to_string()))
    }
}
