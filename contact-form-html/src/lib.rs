//! # contact-form-html
//!
//! Renders a contact form as HTML.
//!
//! The output mirrors the form's `Surface`: the "Contact Form" header, one
//! labeled input per field, one `data-testid="error"` element per active
//! validation error, the submit button, and the submitted values once a
//! submit was accepted.
//!
//! ## Usage
//!
//! ```rust
//! use contact_form::{ContactForm, Field};
//! use contact_form_html::{HtmlOptions, to_html};
//!
//! let mut form = ContactForm::new();
//! form.change(Field::FirstName, "bad");
//!
//! let html = to_html(&form, &HtmlOptions::new().with_title("Contact"));
//! assert!(html.contains("firstName must be at least 5 characters"));
//! ```

mod generator;

pub use generator::{HtmlOptions, surface_to_html, to_html};
