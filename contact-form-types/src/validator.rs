use std::sync::LazyLock;

use regex::Regex;

use crate::{Field, FieldValues, SubmittedValues, ValidationErrors, Violation};

/// Minimum number of characters in a first name.
pub const DEFAULT_MIN_FIRST_NAME_LEN: usize = 5;

/// `local@domain.suffix`: one `@`, no whitespace, at least one dot after the domain label.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("email pattern is a valid regex")
});

/// The contact form's field rules.
///
/// Every field is checked on its own; there are no cross-field rules. The result
/// only depends on the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validator {
    min_first_name_len: usize,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// Create a validator with the default rules.
    pub fn new() -> Self {
        Self {
            min_first_name_len: DEFAULT_MIN_FIRST_NAME_LEN,
        }
    }

    /// Set the minimum first name length (in characters).
    pub fn with_min_first_name_len(mut self, min: usize) -> Self {
        self.min_first_name_len = min;
        self
    }

    pub fn min_first_name_len(&self) -> usize {
        self.min_first_name_len
    }

    /// Check a single field value against its rule.
    pub fn check(&self, field: Field, value: &str) -> Option<Violation> {
        if value.is_empty() {
            return field.is_required().then_some(Violation::Required);
        }

        match field {
            Field::FirstName if value.chars().count() < self.min_first_name_len => {
                Some(Violation::TooShort {
                    min: self.min_first_name_len,
                })
            }
            Field::Email if !is_email(value) => Some(Violation::InvalidEmail),
            _ => None,
        }
    }

    /// Check every field, collecting one entry per invalid field.
    pub fn validate(&self, values: &FieldValues) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for (field, value) in values.iter() {
            if let Some(violation) = self.check(field, value) {
                errors.insert(field, violation);
            }
        }
        errors
    }

    /// Snapshot the draft if it passes every rule.
    pub fn accept(&self, values: &FieldValues) -> Result<SubmittedValues, ValidationErrors> {
        let errors = self.validate(values);
        if errors.is_empty() {
            Ok(SubmittedValues::new(values.clone()))
        } else {
            Err(errors)
        }
    }
}

/// Check if a string has the shape of an email address.
pub fn is_email(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}
