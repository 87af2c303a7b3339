//! ServiceCategory value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The fixed catalog of offered services. These are the exact strings the
/// contact form presents; submissions must name one of them.
pub const SERVICE_CATALOG: [&str; 8] = [
    "Web & App Development",
    "Digital Marketing & Lead Generation",
    "SEO & Online Visibility",
    "Branding & Creative Services",
    "Video Production & AI Content",
    "IT Support & Business Automation",
    "CCTV & Smart Security Solutions",
    "Other",
];

/// A service category drawn from the fixed catalog.
///
/// The original form guaranteed catalog membership through a select element;
/// here the constructor enforces it, so a `ServiceCategory` is always one of
/// the `SERVICE_CATALOG` entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServiceCategory(String);

impl ServiceCategory {
    /// Create a new ServiceCategory from raw input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingService` for empty input and
    /// `ValidationError::UnknownService` for anything outside the catalog.
    pub fn new(service: impl Into<String>) -> Result<Self, ValidationError> {
        let service = service.into().trim().to_string();

        if service.is_empty() {
            return Err(ValidationError::MissingService);
        }

        if !SERVICE_CATALOG.contains(&service.as_str()) {
            return Err(ValidationError::UnknownService(service));
        }

        Ok(Self(service))
    }

    /// Get the category as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// The full catalog of offered services.
    pub fn catalog() -> &'static [&'static str] {
        &SERVICE_CATALOG
    }
}

impl Serialize for ServiceCategory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ServiceCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ServiceCategory::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_catalog_entry_is_valid() {
        for entry in SERVICE_CATALOG {
            assert!(ServiceCategory::new(entry).is_ok(), "rejected {entry:?}");
        }
    }

    #[test]
    fn test_empty_service_rejected() {
        assert_eq!(
            ServiceCategory::new(""),
            Err(ValidationError::MissingService)
        );
        assert_eq!(
            ServiceCategory::new("   "),
            Err(ValidationError::MissingService)
        );
    }

    #[test]
    fn test_unknown_service_rejected() {
        assert_eq!(
            ServiceCategory::new("Quantum Consulting"),
            Err(ValidationError::UnknownService(
                "Quantum Consulting".to_string()
            ))
        );
    }

    #[test]
    fn test_service_serialization() {
        let service = ServiceCategory::new("Other").unwrap();
        assert_eq!(serde_json::to_string(&service).unwrap(), "\"Other\"");
    }
}
