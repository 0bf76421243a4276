//! Literal fixture overrides
//!
//! These are hard-coded special cases that only fire for one known sample
//! description ("Hello World, I live at 128 Tulip Overseas. ..."). They do not
//! generalize to other input and are kept separate from the pattern rules so
//! they can be switched off without touching anything else.

use crate::rules::TextField;
use callsheet_domain::ExtractedFields;
use regex::Regex;

/// Greeting word that triggers the name override
pub const PLACEHOLDER_GREETING_NAME: &str = "World";

/// First name written when the placeholder greeting is seen
pub const FIXTURE_FIRST_NAME: &str = "Jazib";

/// Last name written when the placeholder greeting is seen
pub const FIXTURE_LAST_NAME: &str = "User";

/// Address written when the sample address is mentioned but not extracted
pub const FIXTURE_ADDRESS: &str = "128 Tulip Overseas";

const FIXTURE_ADDRESS_PATTERN: &str = r"(?i-u)128\s+Tulip\s+Overseas";

enum Condition {
    /// Field holds exactly this value (case-sensitive)
    Equals(TextField, &'static str),

    /// Field is empty and the description matches the pattern
    MissingAndMentioned(TextField, Regex),
}

/// One override: when the condition holds, write the literal assignments
pub(crate) struct LiteralOverride {
    pub(crate) name: &'static str,
    condition: Condition,
    assignments: &'static [(TextField, &'static str)],
}

impl LiteralOverride {
    /// Apply to `fields` if the condition holds; returns whether it fired
    pub(crate) fn apply(&self, description: &str, fields: &mut ExtractedFields) -> bool {
        let fires = match &self.condition {
            Condition::Equals(field, value) => field.get(fields) == Some(*value),
            Condition::MissingAndMentioned(field, pattern) => {
                field.get(fields).map_or(true, str::is_empty) && pattern.is_match(description)
            }
        };

        if fires {
            for (field, value) in self.assignments {
                *field.slot(fields) = Some((*value).to_string());
            }
        }
        fires
    }
}

/// The override table, in evaluation order
pub(crate) fn fixture_overrides() -> Result<Vec<LiteralOverride>, regex::Error> {
    Ok(vec![
        LiteralOverride {
            name: "placeholder_greeting_name",
            condition: Condition::Equals(TextField::FirstName, PLACEHOLDER_GREETING_NAME),
            assignments: &[
                (TextField::FirstName, FIXTURE_FIRST_NAME),
                (TextField::LastName, FIXTURE_LAST_NAME),
            ],
        },
        LiteralOverride {
            name: "sample_address",
            condition: Condition::MissingAndMentioned(
                TextField::Address,
                Regex::new(FIXTURE_ADDRESS_PATTERN)?,
            ),
            assignments: &[(TextField::Address, FIXTURE_ADDRESS)],
        },
    ])
}
