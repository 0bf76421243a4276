//! Callsheet Gatekeeper
//!
//! Field-level validation for submissions and the records built from them.
//!
//! The Gatekeeper provides:
//! - Form validation (email presence, syntax and uniqueness; description length)
//! - Extraction sufficiency (first name, last name and address all present)
//! - Record constraints (field lengths, age range)
//!
//! Rules are plain `(field, check, message)` entries evaluated in order. Every
//! failing rule is reported; nothing short-circuits.
//!
//! # Examples
//!
//! ```
//! use callsheet_domain::SubmissionForm;
//! use callsheet_gatekeeper::Gatekeeper;
//!
//! let gatekeeper = Gatekeeper::default_config();
//! let form = SubmissionForm::new("not-an-email", "Short");
//!
//! let result = gatekeeper.validate_form_syntax(&form);
//! assert!(result.errors.has("email"));
//! assert!(result.errors.has("description"));
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod rules;
mod validator;

pub use config::ValidationConfig;
pub use error::GatekeeperError;
pub use validator::{Gatekeeper, ValidationResult, ValidationStatus, EMAIL_TAKEN_MESSAGE};
