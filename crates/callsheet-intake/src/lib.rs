//! Callsheet Intake
//!
//! Orchestrates a submission from raw form input to a stored record.
//!
//! # Architecture
//!
//! ```text
//! Form → Gatekeeper (form) → Extractor → Gatekeeper (fields, record) → ActorStore
//! ```
//!
//! Each step short-circuits on failure. Every failure comes back as a
//! [`SubmissionResult::Rejected`](callsheet_domain::SubmissionResult) with
//! field-keyed messages; nothing is retried and nothing is partially stored.
//!
//! # Example Usage
//!
//! ```no_run
//! use callsheet_domain::SubmissionForm;
//! use callsheet_extractor::PatternExtractor;
//! use callsheet_gatekeeper::Gatekeeper;
//! use callsheet_intake::SubmissionService;
//! use callsheet_store::SqliteStore;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = SqliteStore::new(":memory:")?;
//! let extractor = PatternExtractor::default_config()?;
//! let mut service = SubmissionService::new(store, extractor, Gatekeeper::default_config());
//!
//! let result = service.process_submission(SubmissionForm::new(
//!     "jazib@example.com",
//!     "Hello World, I live at 128 Tulip Overseas. My weight is 150 pounds.",
//! ));
//! assert!(result.is_success());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod service;

pub use error::{IntakeError, INSUFFICIENT_DETAILS_MESSAGE};
pub use service::SubmissionService;
