//! Ordered pattern rules

use callsheet_domain::ExtractedFields;
use regex::{Captures, Regex};

/// Text fields a rule or override can write to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TextField {
    FirstName,
    LastName,
    Address,
    Weight,
}

impl TextField {
    pub(crate) fn slot(self, fields: &mut ExtractedFields) -> &mut Option<String> {
        match self {
            TextField::FirstName => &mut fields.first_name,
            TextField::LastName => &mut fields.last_name,
            TextField::Address => &mut fields.address,
            TextField::Weight => &mut fields.weight,
        }
    }

    pub(crate) fn get(self, fields: &ExtractedFields) -> Option<&str> {
        match self {
            TextField::FirstName => fields.first_name.as_deref(),
            TextField::LastName => fields.last_name.as_deref(),
            TextField::Address => fields.address.as_deref(),
            TextField::Weight => fields.weight.as_deref(),
        }
    }
}

/// A single pattern rule: the field it fills, the regex, and how to render a match
pub(crate) struct PatternRule {
    pub(crate) name: &'static str,
    pub(crate) field: TextField,
    regex: Regex,
    render: fn(&Captures<'_>) -> Option<String>,
}

impl PatternRule {
    fn new(
        name: &'static str,
        field: TextField,
        pattern: &str,
        render: fn(&Captures<'_>) -> Option<String>,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            name,
            field,
            regex: Regex::new(pattern)?,
            render,
        })
    }

    /// Rendered value of the first match, if any
    pub(crate) fn apply(&self, text: &str) -> Option<String> {
        self.regex
            .captures(text)
            .and_then(|caps| (self.render)(&caps))
            .filter(|value| !value.is_empty())
    }
}

fn first_capture(caps: &Captures<'_>) -> Option<String> {
    caps.get(1).map(|m| m.as_str().to_string())
}

fn trimmed_capture(caps: &Captures<'_>) -> Option<String> {
    caps.get(1).map(|m| m.as_str().trim().to_string())
}

fn pounds(caps: &Captures<'_>) -> Option<String> {
    caps.get(1).map(|m| format!("{} Pounds", m.as_str()))
}

/// The rule table, in evaluation order
///
/// Patterns run with `-u`, so `\w`, `\d` and `\s` are ASCII classes: "Hello José"
/// yields "Jos".
pub(crate) fn default_rules() -> Result<Vec<PatternRule>, regex::Error> {
    Ok(vec![
        // Greeting followed by a word: "Hello Ada"
        PatternRule::new(
            "greeting_first_name",
            TextField::FirstName,
            r"(?i-u)Hello\s+(\w+)",
            first_capture,
        )?,
        // House number and street words, ending at a newline, end of text, or "My weight"
        PatternRule::new(
            "numbered_address",
            TextField::Address,
            r"(?i-u)(\d+\s+[A-Za-z\s]+?)(?:\n|$|My\s+weight)",
            trimmed_capture,
        )?,
        PatternRule::new(
            "weight_in_pounds",
            TextField::Weight,
            r"(?i-u)(\d+)\s*[Pp]ounds?",
            pounds,
        )?,
    ])
}
