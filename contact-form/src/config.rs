use contact_form_types::{DEFAULT_MIN_FIRST_NAME_LEN, Validator};

/// When field errors are computed while the user is typing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Every change re-checks the edited field and updates its error.
    #[default]
    OnChange,

    /// Errors first appear on submit. Afterwards, editing a field that has an
    /// error re-checks it, so fixed fields lose their error right away.
    OnSubmit,
}

/// Options for a [`ContactForm`](crate::ContactForm).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    pub validation_mode: ValidationMode,
    pub min_first_name_len: usize,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl FormConfig {
    /// Create a config with live validation and the default rules.
    pub fn new() -> Self {
        Self {
            validation_mode: ValidationMode::default(),
            min_first_name_len: DEFAULT_MIN_FIRST_NAME_LEN,
        }
    }

    /// Set when errors are computed.
    pub fn with_validation_mode(mut self, mode: ValidationMode) -> Self {
        self.validation_mode = mode;
        self
    }

    /// Set the minimum first name length.
    pub fn with_min_first_name_len(mut self, min: usize) -> Self {
        self.min_first_name_len = min;
        self
    }

    pub(crate) fn validator(&self) -> Validator {
        Validator::new().with_min_first_name_len(self.min_first_name_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = FormConfig::default();
        assert_eq!(config.validation_mode, ValidationMode::OnChange);
        assert_eq!(config.min_first_name_len, 5);
    }

    #[test]
    fn builder() {
        let config = FormConfig::new()
            .with_validation_mode(ValidationMode::OnSubmit)
            .with_min_first_name_len(3);
        assert_eq!(config.validation_mode, ValidationMode::OnSubmit);
        assert_eq!(config.validator().min_first_name_len(), 3);
    }
}
