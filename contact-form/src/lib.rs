//! # contact-form
//!
//! A contact form: first name, last name, email and an optional message.
//! Backend-agnostic.
//!
//! The form keeps a draft of what the user typed, checks it against the field
//! rules, and on a successful submit commits a snapshot that front ends display.
//!
//! ## Usage
//!
//! ```rust
//! use contact_form::{ContactForm, Field, SubmitOutcome};
//!
//! let mut form = ContactForm::new();
//! form.change(Field::FirstName, "Thomas");
//! form.change(Field::LastName, "Anderson");
//! form.change(Field::Email, "TAnderson@Cmail.com");
//!
//! match form.submit() {
//!     SubmitOutcome::Accepted(values) => assert_eq!(values.first_name(), "Thomas"),
//!     SubmitOutcome::Rejected(errors) => panic!("unexpected errors: {errors}"),
//! }
//! ```
//!
//! ## Rules
//! - `firstName` - required, at least 5 characters
//! - `lastName` - required
//! - `email` - required, must look like `local@domain.suffix`
//! - `message` - optional, no rule
//!
//! ## Backends
//!
//! Backends implement `FormBackend` and feed user input into the form:
//! - `ScriptedBackend` (this crate) - replays recorded input, for tests
//! - `contact-form-ratatui` - interactive terminal form
//!
//! `contact-form-html` renders the form's `Surface` as HTML.

// Re-export all types from contact-form-types
pub use contact_form_types::*;

mod config;
pub use config::{FormConfig, ValidationMode};

mod controller;
pub use controller::{ContactForm, FormEvent, SubmitOutcome, SubscriptionId};

mod surface;
pub use surface::{ERROR_PREFIX, Element, HEADER, Role, SUBMIT, Surface};

mod backend;
pub use backend::FormBackend;

// Scripted backend for driving the form without user interaction
mod scripted_backend;
pub use scripted_backend::{ScriptError, ScriptedBackend, Step};
