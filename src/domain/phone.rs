//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Minimum accepted phone number length in characters.
pub const MIN_PHONE_CHARS: usize = 8;

/// Maximum accepted phone number length in characters.
pub const MAX_PHONE_CHARS: usize = 20;

/// A type-safe wrapper for phone numbers.
///
/// Input is trimmed and length-checked at construction time. Length is the
/// only constraint: formatting characters (and even non-digits) are accepted
/// as-is, so numbers like `+971 50 000 0000` pass through unchanged.
///
/// # Example
///
/// ```
/// use contact_intake::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("+1-555-0134").unwrap();
/// assert_eq!(phone.as_str(), "+1-555-0134");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber from raw input.
    ///
    /// # Validation Rules
    ///
    /// - Input is trimmed before any checks
    /// - Trimmed length must be between 8 and 20 characters
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::PhoneTooShort` or
    /// `ValidationError::PhoneTooLong` when outside the length range.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into().trim().to_string();
        let len = phone.chars().count();

        if len < MIN_PHONE_CHARS {
            return Err(ValidationError::PhoneTooShort);
        }

        if len > MAX_PHONE_CHARS {
            return Err(ValidationError::PhoneTooLong);
        }

        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the phone number with only digits (no formatting).
    pub fn digits_only(&self) -> String {
        self.0.chars().filter(|c| c.is_ascii_digit()).collect()
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = PhoneNumber::new("+1-555-0134").unwrap();
        assert_eq!(phone.as_str(), "+1-555-0134");
    }

    #[test]
    fn test_phone_length_bounds() {
        assert_eq!(PhoneNumber::new(""), Err(ValidationError::PhoneTooShort));
        assert_eq!(
            PhoneNumber::new("1234567"),
            Err(ValidationError::PhoneTooShort)
        );
        assert!(PhoneNumber::new("12345678").is_ok());
        assert!(PhoneNumber::new("1".repeat(20)).is_ok());
        assert_eq!(
            PhoneNumber::new("1".repeat(21)),
            Err(ValidationError::PhoneTooLong)
        );
    }

    #[test]
    fn test_phone_length_only_accepts_non_digits() {
        // Length is the only rule; non-digit strings of the right length pass
        assert!(PhoneNumber::new("call me x").is_ok());
    }

    #[test]
    fn test_phone_trims_input() {
        let phone = PhoneNumber::new("  +14155550134  ").unwrap();
        assert_eq!(phone.as_str(), "+14155550134");
    }

    #[test]
    fn test_phone_digits_only() {
        let phone = PhoneNumber::new("+1 (555) 012-3456").unwrap();
        assert_eq!(phone.digits_only(), "15550123456");
    }

    #[test]
    fn test_phone_serialization() {
        let phone = PhoneNumber::new("+1-555-0134").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"+1-555-0134\"");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<PhoneNumber, _> = serde_json::from_str("\"123\"");
        assert!(result.is_err());
    }
}
