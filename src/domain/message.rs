//! Message value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Minimum accepted message length in characters.
pub const MIN_MESSAGE_CHARS: usize = 10;

/// Maximum accepted message length in characters.
pub const MAX_MESSAGE_CHARS: usize = 1000;

/// The free-text body of a contact submission, trimmed and length-checked
/// at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Message(String);

impl Message {
    /// Create a new Message from raw input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MessageTooShort` or
    /// `ValidationError::MessageTooLong` when the trimmed length falls
    /// outside 10..=1000 characters.
    pub fn new(message: impl Into<String>) -> Result<Self, ValidationError> {
        let message = message.into().trim().to_string();
        let len = message.chars().count();

        if len < MIN_MESSAGE_CHARS {
            return Err(ValidationError::MessageTooShort);
        }

        if len > MAX_MESSAGE_CHARS {
            return Err(ValidationError::MessageTooLong);
        }

        Ok(Self(message))
    }

    /// Get the message as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for Message {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Message {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Message::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_boundaries() {
        // Ten characters is the shortest accepted message
        assert!(Message::new("exactly 10").is_ok());
        assert_eq!(
            Message::new("too short"),
            Err(ValidationError::MessageTooShort)
        );
        assert!(Message::new("a".repeat(1000)).is_ok());
        assert_eq!(
            Message::new("a".repeat(1001)),
            Err(ValidationError::MessageTooLong)
        );
    }

    #[test]
    fn test_message_trims_before_checking() {
        assert_eq!(
            Message::new("  短いです  "),
            Err(ValidationError::MessageTooShort)
        );
    }

    #[test]
    fn test_message_serialization() {
        let message = Message::new("Hello, I need a website.").unwrap();
        assert_eq!(
            serde_json::to_string(&message).unwrap(),
            "\"Hello, I need a website.\""
        );
    }
}
