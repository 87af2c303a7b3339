//! StreetAddress value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Maximum accepted address length in characters.
pub const MAX_ADDRESS_CHARS: usize = 500;

/// An optional street address. The field itself is optional on the form;
/// when present it only has to fit the length cap.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StreetAddress(String);

impl StreetAddress {
    /// Create a new StreetAddress from raw input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::AddressTooLong` when the trimmed length
    /// exceeds 500 characters.
    pub fn new(address: impl Into<String>) -> Result<Self, ValidationError> {
        let address = address.into().trim().to_string();

        if address.chars().count() > MAX_ADDRESS_CHARS {
            return Err(ValidationError::AddressTooLong);
        }

        Ok(Self(address))
    }

    /// Get the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for StreetAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for StreetAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        StreetAddress::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for StreetAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_valid() {
        let address = StreetAddress::new("AL Hamra Industrial Zone-FZ, RAK").unwrap();
        assert_eq!(address.as_str(), "AL Hamra Industrial Zone-FZ, RAK");
    }

    #[test]
    fn test_address_length_cap() {
        assert!(StreetAddress::new("a".repeat(500)).is_ok());
        assert_eq!(
            StreetAddress::new("a".repeat(501)),
            Err(ValidationError::AddressTooLong)
        );
    }

    #[test]
    fn test_address_allows_empty() {
        // Presence/absence is decided by the validator, not the value object
        assert!(StreetAddress::new("").is_ok());
    }
}
