//! ContactName value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Minimum accepted name length in characters.
pub const MIN_NAME_CHARS: usize = 2;

/// Maximum accepted name length in characters.
pub const MAX_NAME_CHARS: usize = 100;

/// The submitter's full name, trimmed and length-checked at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactName(String);

impl ContactName {
    /// Create a new ContactName from raw input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NameTooShort` or
    /// `ValidationError::NameTooLong` when the trimmed length falls outside
    /// 2..=100 characters.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        let len = name.chars().count();

        if len < MIN_NAME_CHARS {
            return Err(ValidationError::NameTooShort);
        }

        if len > MAX_NAME_CHARS {
            return Err(ValidationError::NameTooLong);
        }

        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for ContactName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ContactName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ContactName::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
