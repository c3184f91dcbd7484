/// A string that names none of the form's fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown field: {0}")]
pub struct ParseFieldError(pub String);

/// Error type for form operations.
///
/// Field validation failures are not errors; they are reported as
/// [`ValidationErrors`](crate::ValidationErrors) data.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// A label or key did not match any field.
    #[error(transparent)]
    UnknownField(#[from] ParseFieldError),

    /// A surface query found no matching element.
    #[error("Unable to find an element matching: {0}")]
    ElementNotFound(String),

    /// User left the form without submitting it (Esc, closed window, etc.)
    #[error("Form cancelled by user")]
    Cancelled,

    /// Backend-specific failure (I/O, terminal crash, etc.)
    #[error("Backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl FormError {
    /// Create a backend error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }

    /// Check if this error represents user cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
