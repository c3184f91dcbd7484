use contact_form_types::FormError;

use crate::ContactForm;

/// Trait for front ends that feed user input into a [`ContactForm`].
///
/// A backend decides how the form is presented (terminal, scripted input, ...).
/// It calls [`ContactForm::change`] and [`ContactForm::submit`] as the user acts
/// and returns once the user is done with the form.
pub trait FormBackend {
    /// The error type for this backend.
    type Error: Into<FormError>;

    /// Drive the form until the user leaves it.
    ///
    /// # Returns
    /// * `Ok(())` when the user is done
    /// * `Err` on cancellation or backend failure
    fn drive(&self, form: &mut ContactForm) -> Result<(), Self::Error>;
}
