//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::{ActorId, ActorRecord, ActorSummary, ExtractedFields, NewActor};

/// Trait for storing and retrieving actor records
///
/// Implemented by the infrastructure layer (callsheet-store). Records are
/// append-only: there is no update or delete.
pub trait ActorStore {
    /// Error type for store operations
    type Error;

    /// Persist a new record; fails if the email is already taken
    fn create(&mut self, actor: NewActor) -> Result<ActorRecord, Self::Error>;

    /// All records projected for the list view, newest first
    fn list_all(&self) -> Result<Vec<ActorSummary>, Self::Error>;

    /// Get a record by ID
    fn find_by_id(&self, id: ActorId) -> Result<Option<ActorRecord>, Self::Error>;

    /// Get a record by email
    fn find_by_email(&self, email: &str) -> Result<Option<ActorRecord>, Self::Error>;

    /// Whether an error returned by `create` means the email was already taken
    fn is_duplicate_email(error: &Self::Error) -> bool {
        let _ = error;
        false
    }
}

/// Trait for turning a free-text description into candidate fields
///
/// Implemented by the application layer (callsheet-extractor). Extraction
/// never fails; unmatched fields are simply left empty.
pub trait FieldExtractor {
    /// Extract candidate fields from a description
    fn extract(&self, description: &str) -> ExtractedFields;
}
