//! # contact-form-ratatui
//!
//! Ratatui backend for contact-form.
//!
//! This backend displays the whole contact form at once in the terminal:
//! the header, the four inputs with their errors, a submit button and the
//! last submitted values. Users move between fields with Tab/Shift+Tab or
//! the arrow keys and submit with Enter on the button or F10 anywhere.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contact_form::ContactForm;
//! use contact_form_ratatui::RatatuiFormBackend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut form = ContactForm::new();
//!     form.run(RatatuiFormBackend::new())?;
//!     println!("{:#?}", form.submitted());
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::{RatatuiFormBackend, RatatuiFormError, Theme};
