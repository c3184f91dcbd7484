use std::fmt;
use std::str::FromStr;

use crate::ParseFieldError;

/// One of the four inputs of the contact form.
///
/// The declaration order is the display order, and `Ord` follows it, so
/// anything keyed by `Field` in a sorted map comes out in form order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Message,
}

impl Field {
    /// All fields, in form order.
    pub const ALL: [Field; 4] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Message,
    ];

    /// The machine key, e.g. `"firstName"`. Error messages are phrased with it.
    pub fn key(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// The human label, e.g. `"First Name"`.
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    /// Whether the field must be filled in before the form can be submitted.
    pub fn is_required(self) -> bool {
        !matches!(self, Self::Message)
    }

    /// The label as shown next to the input, with a `*` marking required fields.
    pub fn input_label(self) -> String {
        if self.is_required() {
            format!("{}*", self.label())
        } else {
            self.label().to_string()
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Parses a field from its key (`"lastName"`) or its label (`"Last Name"`).
///
/// Matching is case-insensitive and tolerates the trailing `*` of input labels.
impl FromStr for Field {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().trim_end_matches('*').trim();
        Field::ALL
            .into_iter()
            .find(|field| {
                field.key().eq_ignore_ascii_case(name) || field.label().eq_ignore_ascii_case(name)
            })
            .ok_or_else(|| ParseFieldError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_and_labels() {
        assert_eq!(Field::FirstName.key(), "firstName");
        assert_eq!(Field::LastName.label(), "Last Name");
        assert_eq!(Field::Email.to_string(), "email");
    }

    #[test]
    fn only_message_is_optional() {
        let optional: Vec<_> = Field::ALL.into_iter().filter(|f| !f.is_required()).collect();
        assert_eq!(optional, vec![Field::Message]);
    }

    #[test]
    fn input_label_marks_required() {
        assert_eq!(Field::Email.input_label(), "Email*");
        assert_eq!(Field::Message.input_label(), "Message");
    }

    #[test]
    fn parse_key_and_label() {
        assert_eq!("lastName".parse::<Field>().unwrap(), Field::LastName);
        assert_eq!("First Name*".parse::<Field>().unwrap(), Field::FirstName);
        assert_eq!("email".parse::<Field>().unwrap(), Field::Email);
        assert_eq!("MESSAGE".parse::<Field>().unwrap(), Field::Message);
    }

    #[test]
    fn parse_unknown() {
        let err = "Phone".parse::<Field>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown field: Phone");
    }

    #[test]
    fn order_follows_form() {
        let mut fields = vec![Field::Message, Field::Email, Field::FirstName, Field::LastName];
        fields.sort();
        assert_eq!(fields, Field::ALL.to_vec());
    }
}
