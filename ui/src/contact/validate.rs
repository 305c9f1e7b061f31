//! Per-field validation rules.
//!
//! Rules run independently per field. A value counts as empty when it is empty after
//! trimming, but the format rules see the value exactly as typed. `phone` is the only
//! optional field and is checked only when non-empty.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[A-Za-z]{2,}$").expect("email pattern compiles")
});

// Optional leading `+`, optional parenthesised area code, then digits and separators.
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+]*[(]?[0-9]{1,4}[)]?[-\s./0-9]*$").expect("phone pattern compiles")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Message];

    /// Form control name, also used as the payload key.
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Message => "message",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Self::Phone)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required")]
    Required,
    #[error("invalid format")]
    InvalidFormat,
}

pub fn validate_field(field: Field, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return if field.is_required() {
            Err(ValidationError::Required)
        } else {
            Ok(())
        };
    }

    let well_formed = match field {
        Field::Email => EMAIL_PATTERN.is_match(value),
        Field::Phone => PHONE_PATTERN.is_match(value),
        Field::Name | Field::Message => true,
    };
    if well_formed {
        Ok(())
    } else {
        Err(ValidationError::InvalidFormat)
    }
}

/// Errors found in one submission attempt, keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<Field, ValidationError>);

impl FormErrors {
    pub fn get(&self, field: Field) -> Option<ValidationError> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, ValidationError)> + '_ {
        self.0.iter().map(|(field, err)| (*field, *err))
    }

    /// Record the outcome of checking `field`, replacing any earlier error for it.
    pub fn record(&mut self, field: Field, outcome: Result<(), ValidationError>) {
        match outcome {
            Ok(()) => {
                self.0.remove(&field);
            }
            Err(err) => {
                self.0.insert(field, err);
            }
        }
    }

    /// Re-run the rule for a single edited field.
    pub fn recheck(&mut self, field: Field, value: &str) {
        self.record(field, validate_field(field, value));
    }
}
