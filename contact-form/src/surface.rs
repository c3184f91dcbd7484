//! What the form shows to the outside world.
//!
//! A `Surface` is a flat, ordered list of labeled elements rendered from the
//! form's state. Front ends draw it; tests query it the way one queries a DOM
//! (by text, by label, by role) without caring about markup.

use contact_form_types::{Field, FormError};

use crate::ContactForm;

/// Text of the header shown above the form.
pub const HEADER: &str = "Contact Form";

/// Text of the submit control.
pub const SUBMIT: &str = "Submit";

/// Prefix of every error element's text.
pub const ERROR_PREFIX: &str = "Error: ";

/// What kind of element this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The form header.
    Heading,
    /// A labeled text input.
    TextBox,
    /// One active validation error.
    Alert,
    /// The submit control.
    Button,
    /// One line of the submitted-values display.
    Output,
}

/// A single element on the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    role: Role,
    field: Option<Field>,
    label: Option<String>,
    text: String,
}

impl Element {
    fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            field: None,
            label: None,
            text: text.into(),
        }
    }

    fn for_field(mut self, field: Field) -> Self {
        self.field = Some(field);
        self
    }

    fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// The field this element belongs to, if any.
    pub fn field(&self) -> Option<Field> {
        self.field
    }

    /// The label of a text box.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The visible text (the current value, for a text box).
    pub fn text(&self) -> &str {
        &self.text
    }

    fn text_matches(&self, needle: &str) -> bool {
        contains_ignore_case(&self.text, needle)
    }
}

/// The rendered form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    elements: Vec<Element>,
}

impl Surface {
    /// Render the current state of a form.
    ///
    /// Order: header, the four inputs, one alert per error, the submit button,
    /// then the submitted display lines (if a submit was ever accepted).
    pub fn render(form: &ContactForm) -> Self {
        let mut elements = vec![Element::new(Role::Heading, HEADER)];

        for (field, value) in form.values().iter() {
            elements.push(
                Element::new(Role::TextBox, value)
                    .for_field(field)
                    .labeled(field.input_label()),
            );
        }

        for (field, violation) in form.errors().iter() {
            elements.push(
                Element::new(
                    Role::Alert,
                    format!("{ERROR_PREFIX}{}", violation.message(field)),
                )
                .for_field(field),
            );
        }

        elements.push(Element::new(Role::Button, SUBMIT));

        if let Some(submitted) = form.submitted() {
            for (field, value) in submitted.display_lines() {
                elements.push(
                    Element::new(Role::Output, format!("{}: {value}", field.label()))
                        .for_field(field),
                );
            }
        }

        Self { elements }
    }

    /// All elements, in display order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// The header element.
    pub fn header(&self) -> Option<&Element> {
        self.all_by_role(Role::Heading).next()
    }

    /// Elements with the given role.
    pub fn all_by_role(&self, role: Role) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(move |e| e.role == role)
    }

    /// The first element whose text contains `needle`, ignoring case.
    ///
    /// Text boxes are matched on their value, like any other element.
    pub fn query_by_text(&self, needle: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.text_matches(needle))
    }

    /// Like [`Surface::query_by_text`], but a miss is an error.
    pub fn get_by_text(&self, needle: &str) -> Result<&Element, FormError> {
        self.query_by_text(needle)
            .ok_or_else(|| FormError::ElementNotFound(format!("text {needle:?}")))
    }

    /// The text box whose label contains `label`, ignoring case.
    pub fn get_by_label_text(&self, label: &str) -> Result<&Element, FormError> {
        self.all_by_role(Role::TextBox)
            .find(|e| e.label().is_some_and(|l| contains_ignore_case(l, label)))
            .ok_or_else(|| FormError::ElementNotFound(format!("label {label:?}")))
    }

    /// The display line for a submitted field, if it is shown.
    pub fn output(&self, field: Field) -> Option<&Element> {
        self.all_by_role(Role::Output).find(|e| e.field == Some(field))
    }

    /// The error element for a field, if it is invalid.
    pub fn error(&self, field: Field) -> Option<&Element> {
        self.all_by_role(Role::Alert).find(|e| e.field == Some(field))
    }

    /// Number of error elements on display.
    pub fn error_count(&self) -> usize {
        self.all_by_role(Role::Alert).count()
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn fresh_form() {
        let surface = ContactForm::new().surface();

        assert_eq!(surface.header().map(Element::text), Some("Contact Form"));
        assert_eq!(surface.all_by_role(Role::TextBox).count(), 4);
        assert_eq!(surface.all_by_role(Role::Button).count(), 1);
        assert_eq!(surface.error_count(), 0);
        assert_eq!(surface.all_by_role(Role::Output).count(), 0);
    }

    #[test]
    fn header_query_is_case_insensitive() {
        let surface = ContactForm::new().surface();
        let header = surface.query_by_text("contact form").unwrap();
        assert_eq!(header.role(), Role::Heading);
    }

    #[test]
    fn labels() {
        let surface = ContactForm::new().surface();
        let labels: Vec<_> = surface
            .all_by_role(Role::TextBox)
            .filter_map(Element::label)
            .collect();
        assert_eq!(labels, vec!["First Name*", "Last Name*", "Email*", "Message"]);

        let email = surface.get_by_label_text("email").unwrap();
        assert_eq!(email.field(), Some(Field::Email));
    }

    #[test]
    fn missing_label() {
        let surface = ContactForm::new().surface();
        let err = surface.get_by_label_text("Phone").unwrap_err();
        assert!(matches!(err, FormError::ElementNotFound(_)));
    }

    #[test]
    fn text_box_shows_draft() {
        let mut form = ContactForm::new();
        form.change(Field::LastName, "Anderson");

        let surface = form.surface();
        assert_eq!(surface.get_by_label_text("Last Name").unwrap().text(), "Anderson");
    }

    #[test]
    fn error_elements() {
        let mut form = ContactForm::new();
        form.submit();

        let surface = form.surface();
        assert_eq!(surface.error_count(), 3);
        assert_eq!(
            surface.error(Field::LastName).map(Element::text),
            Some("Error: lastName is a required field")
        );
        assert!(surface.error(Field::Message).is_none());
    }

    #[test]
    fn outputs_follow_submission() {
        let mut form = ContactForm::new();
        form.change(Field::FirstName, "Thomas");
        form.change(Field::LastName, "Anderson");
        form.change(Field::Email, "TAnderson@Cmail.com");
        form.submit();

        let surface = form.surface();
        let outputs: Vec<_> = surface.all_by_role(Role::Output).map(Element::text).collect();
        assert_eq!(
            outputs,
            vec![
                "First Name: Thomas",
                "Last Name: Anderson",
                "Email: TAnderson@Cmail.com",
            ]
        );
        assert!(surface.output(Field::Message).is_none());
    }
}
