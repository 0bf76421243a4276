//! Callsheet Extractor
//!
//! Turns a free-text actor description into candidate fields using an
//! ordered table of regular-expression rules.
//!
//! # Overview
//!
//! Extraction is pattern matching, not inference. Each field is filled by the
//! first rule that matches it; anything unmatched stays empty and is judged
//! later by the gatekeeper.
//!
//! # Architecture
//!
//! ```text
//! Description → pattern rules → fixture overrides → ExtractedFields
//! ```
//!
//! The fixture overrides are literal special cases kept for one known sample
//! input. They are isolated in their own table and can be switched off with
//! [`ExtractorConfig::apply_fixture_overrides`].
//!
//! # Example Usage
//!
//! ```
//! use callsheet_domain::traits::FieldExtractor;
//! use callsheet_extractor::{ExtractorConfig, PatternExtractor};
//!
//! let extractor = PatternExtractor::new(ExtractorConfig::default()).unwrap();
//! let fields = extractor.extract("Weighing in at 180 lbs, or 180 pounds.");
//!
//! assert_eq!(fields.weight.as_deref(), Some("180 Pounds"));
//! assert!(fields.first_name.is_none());
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod overrides;
mod rules;


pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::PatternExtractor;
pub use overrides::{
    FIXTURE_ADDRESS, FIXTURE_FIRST_NAME, FIXTURE_LAST_NAME, PLACEHOLDER_GREETING_NAME,
};
