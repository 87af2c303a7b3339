//! EmailAddress value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Maximum accepted email length in characters.
pub const MAX_EMAIL_CHARS: usize = 255;

// Intentionally permissive: one local part, one '@', a dotted domain with an
// alphabetic TLD. Anything stricter starts rejecting real addresses.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// A type-safe wrapper for email addresses.
///
/// Input is trimmed and validated at construction time, so every
/// `EmailAddress` in the system satisfies email syntax and the length cap.
///
/// # Example
///
/// ```
/// use contact_intake::domain::EmailAddress;
///
/// let email = EmailAddress::new("user@example.com").unwrap();
/// assert_eq!(email.as_str(), "user@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress from raw input.
    ///
    /// # Validation Rules
    ///
    /// - Input is trimmed before any checks
    /// - Must match email syntax (local part, '@', dotted domain)
    /// - Trimmed length must be at most 255 characters
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` for syntax failures and
    /// `ValidationError::EmailTooLong` when over the length cap.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into().trim().to_string();

        if !EMAIL_PATTERN.is_match(&email) {
            return Err(ValidationError::InvalidEmail);
        }

        if email.chars().count() > MAX_EMAIL_CHARS {
            return Err(ValidationError::EmailTooLong);
        }

        Ok(Self(email))
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the domain part (after '@').
    pub fn domain(&self) -> &str {
        // SAFETY: Constructor validates that '@' exists
        self.0
            .rsplit('@')
            .next()
            .expect("email validated to contain '@'")
    }
}

// Serde support - serialize as string
impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
