use std::collections::BTreeMap;
use std::fmt;

use crate::Field;

/// Why a field value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// A required field is empty.
    Required,

    /// The value has fewer than `min` characters.
    TooShort { min: usize },

    /// The value does not have the shape `local@domain.suffix`.
    InvalidEmail,
}

impl Violation {
    /// The human-readable message for this violation on `field`.
    pub fn message(self, field: Field) -> String {
        match self {
            Self::Required => format!("{} is a required field", field.key()),
            Self::TooShort { min } => {
                format!("{} must be at least {min} characters", field.key())
            }
            Self::InvalidEmail => format!("{} must be a valid email address", field.key()),
        }
    }
}

/// Field-level validation errors.
///
/// A field appears here only while its current value breaks its rule, and then
/// with exactly one violation. Iteration follows form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, Violation>,
}

impl ValidationErrors {
    /// Create an empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation, replacing any earlier one for the same field.
    pub fn insert(&mut self, field: Field, violation: Violation) {
        self.errors.insert(field, violation);
    }

    /// Drop the entry for a field. Returns the removed violation, if any.
    pub fn remove(&mut self, field: Field) -> Option<Violation> {
        self.errors.remove(&field)
    }

    /// Set or clear the entry for a field in one go.
    pub fn update(&mut self, field: Field, violation: Option<Violation>) {
        match violation {
            Some(violation) => self.insert(field, violation),
            None => {
                self.remove(field);
            }
        }
    }

    pub fn get(&self, field: Field) -> Option<Violation> {
        self.errors.get(&field).copied()
    }

    /// The message for a field, if it is invalid.
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(|violation| violation.message(field))
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Iterate over invalid fields and their violations.
    pub fn iter(&self) -> impl Iterator<Item = (Field, Violation)> + '_ {
        self.errors.iter().map(|(field, violation)| (*field, *violation))
    }

    /// All messages, in form order.
    pub fn messages(&self) -> Vec<String> {
        self.iter()
            .map(|(field, violation)| violation.message(field))
            .collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Violation::Required.message(Field::LastName),
            "lastName is a required field"
        );
        assert_eq!(
            Violation::TooShort { min: 5 }.message(Field::FirstName),
            "firstName must be at least 5 characters"
        );
        assert_eq!(
            Violation::InvalidEmail.message(Field::Email),
            "email must be a valid email address"
        );
    }

    #[test]
    fn one_entry_per_field() {
        let mut errors = ValidationErrors::new();
        errors.insert(Field::Email, Violation::Required);
        errors.insert(Field::Email, Violation::InvalidEmail);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Email), Some(Violation::InvalidEmail));
    }

    #[test]
    fn update_clears() {
        let mut errors = ValidationErrors::new();
        errors.update(Field::LastName, Some(Violation::Required));
        assert!(errors.contains(Field::LastName));

        errors.update(Field::LastName, None);
        assert!(errors.is_empty());
    }

    #[test]
    fn form_order() {
        let mut errors = ValidationErrors::new();
        errors.insert(Field::Email, Violation::Required);
        errors.insert(Field::FirstName, Violation::Required);

        assert_eq!(
            errors.messages(),
            vec![
                "firstName is a required field".to_string(),
                "email is a required field".to_string(),
            ]
        );
        assert_eq!(
            errors.to_string(),
            "firstName is a required field, email is a required field"
        );
    }
}
