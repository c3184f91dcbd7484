//! Scripted backend for driving the form without a user.
//!
//! `ScriptedBackend` replays a fixed list of user actions against a form.
//! Typing happens one keystroke at a time, so live validation sees every
//! intermediate value, just as it would with a person at the keyboard.
//!
//! # Example
//!
//! ```rust
//! use contact_form::{ContactForm, ScriptedBackend};
//!
//! let mut form = ContactForm::new();
//! form.run(
//!     ScriptedBackend::new()
//!         .type_into("First Name", "Thomas")
//!         .type_into("Last Name", "Anderson")
//!         .type_into("Email", "TAnderson@Cmail.com")
//!         .click_submit(),
//! )
//! .unwrap();
//!
//! assert!(form.surface().query_by_text("First Name: Thomas").is_some());
//! ```

use contact_form_types::{Field, FormError, ParseFieldError};

use crate::{ContactForm, FormBackend};

/// One simulated user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Type text at the end of the field named by `target` (key or label).
    Type { target: String, text: String },

    /// Empty the field named by `target`.
    Clear { target: String },

    /// Press the submit button.
    Submit,
}

/// A backend that replays pre-recorded user actions.
#[derive(Debug, Clone, Default)]
pub struct ScriptedBackend {
    steps: Vec<Step>,
}

/// Error type for ScriptedBackend.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Step {step}: {source}")]
    UnknownField {
        step: usize,
        #[source]
        source: ParseFieldError,
    },
}

impl From<ScriptError> for FormError {
    fn from(err: ScriptError) -> Self {
        match err {
            ScriptError::UnknownField { source, .. } => FormError::UnknownField(source),
        }
    }
}

impl ScriptedBackend {
    /// Create an empty script.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append an arbitrary step.
    pub fn with_step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Type `text` into the field with the given label or key.
    pub fn type_into(self, target: impl Into<String>, text: impl Into<String>) -> Self {
        self.with_step(Step::Type {
            target: target.into(),
            text: text.into(),
        })
    }

    /// Clear the field with the given label or key.
    pub fn clear(self, target: impl Into<String>) -> Self {
        self.with_step(Step::Clear {
            target: target.into(),
        })
    }

    /// Click the submit button.
    pub fn click_submit(self) -> Self {
        self.with_step(Step::Submit)
    }

    /// The recorded steps.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

impl FormBackend for ScriptedBackend {
    type Error = ScriptError;

    fn drive(&self, form: &mut ContactForm) -> Result<(), Self::Error> {
        for (idx, step) in self.steps.iter().enumerate() {
            let resolve = |target: &str| {
                target
                    .parse::<Field>()
                    .map_err(|source| ScriptError::UnknownField { step: idx, source })
            };

            match step {
                Step::Type { target, text } => {
                    let field = resolve(target)?;
                    let mut value = form.values().get(field).to_string();
                    for c in text.chars() {
                        value.push(c);
                        form.change(field, value.clone());
                    }
                }
                Step::Clear { target } => {
                    let field = resolve(target)?;
                    form.change(field, "");
                }
                Step::Submit => {
                    form.submit();
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_records_steps() {
        let backend = ScriptedBackend::new()
            .type_into("email", "a@b.co")
            .clear("email")
            .click_submit();

        assert_eq!(backend.steps().len(), 3);
        assert_eq!(backend.steps()[2], Step::Submit);
    }

    #[test]
    fn types_one_key_at_a_time() {
        let mut form = ContactForm::new();
        let backend = ScriptedBackend::new().type_into("First Name*", "Neo");
        backend.drive(&mut form).unwrap();

        assert_eq!(form.values().first_name(), "Neo");
        assert!(form.errors().contains(Field::FirstName));
    }

    #[test]
    fn typing_appends() {
        let mut form = ContactForm::new();
        ScriptedBackend::new()
            .type_into("Message", "What is ")
            .type_into("Message", "the Matrix?")
            .drive(&mut form)
            .unwrap();

        assert_eq!(form.values().message(), Some("What is the Matrix?"));
    }

    #[test]
    fn unknown_label() {
        let mut form = ContactForm::new();
        let err = ScriptedBackend::new()
            .click_submit()
            .type_into("Phone", "555")
            .drive(&mut form)
            .unwrap_err();

        assert_eq!(err.to_string(), "Step 1: Unknown field: Phone");
        // Earlier steps already ran.
        assert_eq!(form.errors().len(), 3);

        let err = FormError::from(err);
        assert!(matches!(&err, FormError::UnknownField(ParseFieldError(name)) if name == "Phone"));
    }
}
