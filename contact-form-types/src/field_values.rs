use crate::Field;

/// The draft contents of the form, updated on every keystroke.
///
/// An empty string means "not filled in". The message is optional, so it is
/// reported as `None` by [`FieldValues::message`] when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    first_name: String,
    last_name: String,
    email: String,
    message: String,
}

impl FieldValues {
    /// Create an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, builder style.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Get the current value of a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Replace the value of a field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot(field) = value.into();
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// The message, if one was entered.
    pub fn message(&self) -> Option<&str> {
        Some(self.message.as_str()).filter(|m| !m.is_empty())
    }

    /// Check if no field has been filled in.
    pub fn is_empty(&self) -> bool {
        Field::ALL.into_iter().all(|field| self.get(field).is_empty())
    }

    /// Iterate over all fields and their values, in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL.into_iter().map(|field| (field, self.get(field)))
    }
}

/// A snapshot of a draft that passed validation.
///
/// Only [`Validator::accept`](crate::Validator::accept) creates these, so a
/// `SubmittedValues` always satisfies every field rule. It owns its data: editing
/// the draft afterwards leaves it untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedValues {
    values: FieldValues,
}

impl SubmittedValues {
    pub(crate) fn new(values: FieldValues) -> Self {
        Self { values }
    }

    pub fn first_name(&self) -> &str {
        self.values.first_name()
    }

    pub fn last_name(&self) -> &str {
        self.values.last_name()
    }

    pub fn email(&self) -> &str {
        self.values.email()
    }

    pub fn message(&self) -> Option<&str> {
        self.values.message()
    }

    /// Get the submitted value of a field.
    pub fn get(&self, field: Field) -> &str {
        self.values.get(field)
    }

    /// The labeled lines shown after a successful submit.
    ///
    /// The message line is left out entirely when no message was entered.
    pub fn display_lines(&self) -> Vec<(Field, &str)> {
        self.values
            .iter()
            .filter(|(field, value)| field.is_required() || !value.is_empty())
            .collect()
    }

    /// Borrow the underlying values.
    pub fn values(&self) -> &FieldValues {
        &self.values
    }
}
