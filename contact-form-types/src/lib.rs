//! Core types for the contact-form crate.
//!
//! This crate provides the presentation-agnostic parts of the form:
//! - `Field` - The four inputs and their keys/labels
//! - `FieldValues` and `SubmittedValues` - Draft contents and accepted snapshots
//! - `Violation` and `ValidationErrors` - Per-field rule failures
//! - `Validator` - The field rules themselves

mod field;
pub use field::Field;

mod field_values;
pub use field_values::{FieldValues, SubmittedValues};

mod validation_errors;
pub use validation_errors::{ValidationErrors, Violation};

mod validator;
pub use validator::{DEFAULT_MIN_FIRST_NAME_LEN, Validator, is_email};

mod error;
pub use error::{FormError, ParseFieldError};
