//! The form controller: draft values, live errors and the last accepted submission.

use std::fmt;

use contact_form_types::{
    Field, FieldValues, FormError, SubmittedValues, ValidationErrors, Validator,
};
use tracing::{debug, info};

use crate::{FormBackend, FormConfig, Surface, ValidationMode};

/// Something that happened to the form.
///
/// Observers receive one of these after every state change, together with the
/// re-rendered [`Surface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// A field's draft value was replaced.
    FieldChanged { field: Field, value: String },

    /// A submit passed validation and the draft was committed.
    SubmitAccepted(SubmittedValues),

    /// A submit failed validation; nothing was committed.
    SubmitRejected(ValidationErrors),
}

/// The result of [`ContactForm::submit`].
///
/// A rejected submit is an ordinary outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(SubmittedValues),
    Rejected(ValidationErrors),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// The errors of a rejected submit.
    pub fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Rejected(errors) => Some(errors),
            Self::Accepted(_) => None,
        }
    }
}

/// Handle returned by [`ContactForm::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&FormEvent, &Surface)>;

/// The contact form.
///
/// Holds the draft, the current field errors and the last submitted snapshot.
/// The form stays editable after a successful submit and can be submitted again.
pub struct ContactForm {
    config: FormConfig,
    validator: Validator,
    draft: FieldValues,
    errors: ValidationErrors,
    submitted: Option<SubmittedValues>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ContactForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactForm")
            .field("config", &self.config)
            .field("draft", &self.draft)
            .field("errors", &self.errors)
            .field("submitted", &self.submitted)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl ContactForm {
    /// Create an empty form with the default configuration.
    pub fn new() -> Self {
        Self::with_config(FormConfig::default())
    }

    /// Create an empty form with a custom configuration.
    pub fn with_config(config: FormConfig) -> Self {
        Self {
            validator: config.validator(),
            config,
            draft: FieldValues::new(),
            errors: ValidationErrors::new(),
            submitted: None,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// The current draft.
    pub fn values(&self) -> &FieldValues {
        &self.draft
    }

    /// The errors currently on display.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// The last accepted submission, if any.
    pub fn submitted(&self) -> Option<&SubmittedValues> {
        self.submitted.as_ref()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted.is_some()
    }

    /// Replace the draft value of a field.
    pub fn change(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        debug!(%field, len = value.chars().count(), "field changed");

        let recheck = match self.config.validation_mode {
            ValidationMode::OnChange => true,
            ValidationMode::OnSubmit => self.errors.contains(field),
        };
        if recheck {
            self.errors.update(field, self.validator.check(field, &value));
        }

        self.draft.set(field, value.clone());
        self.notify(&FormEvent::FieldChanged { field, value });
    }

    /// Validate the draft and commit it if it passes.
    pub fn submit(&mut self) -> SubmitOutcome {
        match self.validator.accept(&self.draft) {
            Ok(submitted) => {
                info!(
                    has_message = submitted.message().is_some(),
                    "submission accepted"
                );
                self.errors.clear();
                self.submitted = Some(submitted.clone());
                self.notify(&FormEvent::SubmitAccepted(submitted.clone()));
                SubmitOutcome::Accepted(submitted)
            }
            Err(errors) => {
                debug!(errors = errors.len(), "submission rejected");
                self.errors = errors.clone();
                self.notify(&FormEvent::SubmitRejected(errors.clone()));
                SubmitOutcome::Rejected(errors)
            }
        }
    }

    /// Render what a user would currently see.
    pub fn surface(&self) -> Surface {
        Surface::render(self)
    }

    /// Hand the form to a backend that feeds it user input.
    pub fn run<B: FormBackend>(&mut self, backend: B) -> Result<(), FormError> {
        backend.drive(self).map_err(Into::into)
    }

    /// Register a callback invoked after every state change.
    pub fn subscribe(
        &mut self,
        observer: impl FnMut(&FormEvent, &Surface) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove a callback. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    fn notify(&mut self, event: &FormEvent) {
        if self.observers.is_empty() {
            return;
        }
        let surface = self.surface();
        for (_, observer) in &mut self.observers {
            observer(event, &surface);
        }
    }
}
