//! Domain validation errors.

use std::fmt;

/// Errors that can occur during contact field validation.
///
/// Each variant carries the exact message shown next to the offending field,
/// so `to_string()` is the user-facing text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The name is shorter than the minimum length.
    NameTooShort,

    /// The name exceeds the maximum length.
    NameTooLong,

    /// The phone number is shorter than the minimum length.
    PhoneTooShort,

    /// The phone number exceeds the maximum length.
    PhoneTooLong,

    /// The email address does not match email syntax.
    InvalidEmail,

    /// The email address exceeds the maximum length.
    EmailTooLong,

    /// The address exceeds the maximum length.
    AddressTooLong,

    /// No service category was selected.
    MissingService,

    /// The service category is not in the offered catalog.
    UnknownService(String),

    /// The message is shorter than the minimum length.
    MessageTooShort,

    /// The message exceeds the maximum length.
    MessageTooLong,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameTooShort => write!(f, "Name must be at least 2 characters"),
            Self::NameTooLong => write!(f, "Name is too long"),
            Self::PhoneTooShort => write!(f, "Please enter a valid phone number"),
            Self::PhoneTooLong => write!(f, "Phone number is too long"),
            Self::InvalidEmail => write!(f, "Please enter a valid email address"),
            Self::EmailTooLong => write!(f, "Email is too long"),
            Self::AddressTooLong => write!(f, "Address is too long"),
            Self::MissingService => write!(f, "Please select a service"),
            Self::UnknownService(_) => write!(f, "Please select a service from the list"),
            Self::MessageTooShort => write!(f, "Message must be at least 10 characters"),
            Self::MessageTooLong => write!(f, "Message is too long"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(
            ValidationError::NameTooShort.to_string(),
            "Name must be at least 2 characters"
        );
        assert_eq!(
            ValidationError::PhoneTooShort.to_string(),
            "Please enter a valid phone number"
        );
        assert_eq!(
            ValidationError::MissingService.to_string(),
            "Please select a service"
        );
        assert_eq!(
            ValidationError::MessageTooShort.to_string(),
            "Message must be at least 10 characters"
        );
    }
}
