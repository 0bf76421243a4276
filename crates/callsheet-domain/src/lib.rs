//! Callsheet Domain Layer
//!
//! Core types and trait interfaces for the actor intake service. Every other
//! crate in the workspace depends on this one; it depends on nothing but `uuid`.
//!
//! ## Key Concepts
//!
//! - **ActorRecord**: one validated, persisted submission
//! - **ExtractedFields**: candidate fields pulled out of a free-text description
//! - **SubmissionForm**: the raw email + description pair posted by a user
//! - **SubmissionResult**: either the created record or a field-keyed error map
//!
//! ## Architecture
//!
//! - Pure data and logic only
//! - Storage and extraction live behind the traits in [`traits`]
//! - Infrastructure implementations live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod actor;
pub mod fields;
pub mod submission;
pub mod traits;

// Re-exports for convenience
pub use actor::{ActorId, ActorRecord, ActorSummary, NewActor};
pub use fields::ExtractedFields;
pub use submission::{FieldErrors, SubmissionForm, SubmissionResult};
