//! Field validators.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

const MAX_EMAIL_LENGTH: usize = 254;
const MAX_LOCAL_PART_LENGTH: usize = 64;

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(concat!(
            r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*",
            r"@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?",
            r"(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
        ))
        .expect("Invalid regex")
    })
}

/// Returns whether the value is a plausible email address.
#[must_use]
pub fn is_plausible_email(value: &str) -> bool {
    if value.len() > MAX_EMAIL_LENGTH {
        return false;
    }

    match value.split_once('@') {
        Some((local, _)) if !local.is_empty() && local.len() <= MAX_LOCAL_PART_LENGTH => {
            email_regex().is_match(value)
        }
        _ => false,
    }
}

/// Validation failure for a single rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum ValidationError {
    #[error("this field is required")]
    Required,

    #[error("enter a valid email address")]
    Email,

    #[error("must be at least {required} characters (currently {actual})")]
    MinLength { required: usize, actual: usize },
}

/// Rule applied to a form control value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    /// Value must be non-empty.
    Required,
    /// Value must look like an email address. Empty values pass.
    Email,
    /// Value must have at least this many characters. Empty values pass.
    MinLength(usize),
}

impl Validator {
    /// Checks value against the rule.
    #[must_use]
    pub fn validate(self, value: &str) -> Option<ValidationError> {
        match self {
            Self::Required => value.is_empty().then_some(ValidationError::Required),
            Self::Email => {
                (!value.is_empty() && !is_plausible_email(value)).then_some(ValidationError::Email)
            }
            Self::MinLength(required) => {
                let actual = value.chars().count();
                (actual > 0 && actual < required)
                    .then_some(ValidationError::MinLength { required, actual })
            }
        }
    }
}
