//! Rule tables
//!
//! A rule passes when its precondition does not apply (e.g. the syntax rule
//! for an absent email); the `required` rules report absence.

use crate::ValidationConfig;
use callsheet_domain::{FieldErrors, NewActor};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@.]+(?:\.[^\s@.]+)+$").unwrap());

/// `(field, check, message)` entry
pub(crate) struct FieldRule<T> {
    pub(crate) field: &'static str,
    passes: fn(&T, &ValidationConfig) -> bool,
    message: fn(&ValidationConfig) -> String,
}

impl<T> FieldRule<T> {
    /// Record the message under the field if the check fails
    pub(crate) fn check(&self, subject: &T, config: &ValidationConfig, errors: &mut FieldErrors) {
        if !(self.passes)(subject, config) {
            errors.add(self.field, (self.message)(config));
        }
    }
}

/// Form input as seen by the rules
pub(crate) struct FormSubject<'a> {
    pub(crate) email: Option<&'a str>,
    pub(crate) description: Option<&'a str>,
    pub(crate) email_taken: bool,
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn optional_within(value: &Option<String>, max: usize) -> bool {
    value.as_deref().map_or(true, |v| char_len(v) <= max)
}

/// Form rules, in evaluation order
pub(crate) fn form_rules<'a>() -> Vec<FieldRule<FormSubject<'a>>> {
    vec![
        FieldRule {
            field: "email",
            passes: |form: &FormSubject<'_>, _: &ValidationConfig| form.email.is_some(),
            message: |_: &ValidationConfig| "The email field is required.".to_string(),
        },
        FieldRule {
            field: "email",
            passes: |form: &FormSubject<'_>, _: &ValidationConfig| {
                form.email.map_or(true, is_valid_email)
            },
            message: |_: &ValidationConfig| {
                "The email field must be a valid email address.".to_string()
            },
        },
        FieldRule {
            field: "email",
            passes: |form: &FormSubject<'_>, _: &ValidationConfig| !form.email_taken,
            message: |_: &ValidationConfig| crate::EMAIL_TAKEN_MESSAGE.to_string(),
        },
        FieldRule {
            field: "description",
            passes: |form: &FormSubject<'_>, _: &ValidationConfig| form.description.is_some(),
            message: |_: &ValidationConfig| "The description field is required.".to_string(),
        },
        FieldRule {
            field: "description",
            passes: |form: &FormSubject<'_>, config: &ValidationConfig| {
                form.description
                    .map_or(true, |d| char_len(d) >= config.min_description_chars)
            },
            message: |config: &ValidationConfig| {
                format!(
                    "The description field must be at least {} characters.",
                    config.min_description_chars
                )
            },
        },
    ]
}

/// Constraints on a record about to be persisted
pub(crate) fn record_rules() -> Vec<FieldRule<NewActor>> {
    vec![
        FieldRule {
            field: "first_name",
            passes: |actor: &NewActor, config: &ValidationConfig| {
                char_len(&actor.first_name) <= config.max_name_chars
            },
            message: |config: &ValidationConfig| {
                format!(
                    "The first name field must not be greater than {} characters.",
                    config.max_name_chars
                )
            },
        },
        FieldRule {
            field: "last_name",
            passes: |actor: &NewActor, config: &ValidationConfig| {
                char_len(&actor.last_name) <= config.max_name_chars
            },
            message: |config: &ValidationConfig| {
                format!(
                    "The last name field must not be greater than {} characters.",
                    config.max_name_chars
                )
            },
        },
        FieldRule {
            field: "address",
            passes: |actor: &NewActor, config: &ValidationConfig| {
                char_len(&actor.address) <= config.max_address_chars
            },
            message: |config: &ValidationConfig| {
                format!(
                    "The address field must not be greater than {} characters.",
                    config.max_address_chars
                )
            },
        },
        FieldRule {
            field: "height",
            passes: |actor: &NewActor, config: &ValidationConfig| {
                optional_within(&actor.height, config.max_attribute_chars)
            },
            message: |config: &ValidationConfig| {
                format!(
                    "The height field must not be greater than {} characters.",
                    config.max_attribute_chars
                )
            },
        },
        FieldRule {
            field: "weight",
            passes: |actor: &NewActor, config: &ValidationConfig| {
                optional_within(&actor.weight, config.max_attribute_chars)
            },
            message: |config: &ValidationConfig| {
                format!(
                    "The weight field must not be greater than {} characters.",
                    config.max_attribute_chars
                )
            },
        },
        FieldRule {
            field: "gender",
            passes: |actor: &NewActor, config: &ValidationConfig| {
                optional_within(&actor.gender, config.max_attribute_chars)
            },
            message: |config: &ValidationConfig| {
                format!(
                    "The gender field must not be greater than {} characters.",
                    config.max_attribute_chars
                )
            },
        },
        FieldRule {
            field: "age",
            passes: |actor: &NewActor, config: &ValidationConfig| {
                actor
                    .age
                    .map_or(true, |age| (config.min_age..=config.max_age).contains(&age))
            },
            message: |config: &ValidationConfig| {
                format!(
                    "The age field must be between {} and {}.",
                    config.min_age, config.max_age
                )
            },
        },
    ]
}
