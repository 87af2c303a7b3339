//! Single-pass form validation.
//!
//! Turns a raw [`ContactForm`] into a validated [`ContactSubmission`], or a
//! map of field name to user-facing message when one or more fields fail.
//! Validation is a pure function of its input: no network, no state, and the
//! same input always produces the same error set. It never stops at the first
//! failure, so a form with three bad fields reports all three.

use crate::domain::{
    ContactName, EmailAddress, Message, PhoneNumber, ServiceCategory, StreetAddress,
    ValidationError,
};
use crate::models::{fields, ContactForm, ContactSubmission};
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-field validation errors, keyed by wire field name.
///
/// Backed by a `BTreeMap` so iteration order (and therefore any rendered or
/// serialized output) is deterministic. Rebuilt fresh on every validation
/// pass; the form layer clears individual entries as the user edits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    /// Create an empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field, replacing any previous one.
    pub fn insert(&mut self, field: &'static str, message: String) {
        self.0.insert(field, message);
    }

    /// Get the message for a field, if it failed.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Drop the error for a single field (user started editing it).
    pub fn clear_field(&mut self, field: &str) {
        self.0.remove(field);
    }

    /// True when no field failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failed fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over `(field, message)` pairs in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

fn note_error<T>(
    errors: &mut FieldErrors,
    field: &'static str,
    result: &Result<T, ValidationError>,
) {
    if let Err(e) = result {
        errors.insert(field, e.to_string());
    }
}

/// The address field is optional: blank input is simply absent, anything
/// else must fit the length cap.
fn parse_address(raw: &str) -> Result<Option<StreetAddress>, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    StreetAddress::new(trimmed).map(Some)
}

/// Validate a raw contact form in a single pass.
///
/// Returns the validated submission when every field satisfies its rules,
/// otherwise one message per offending field. A submission is all-or-nothing:
/// there is no partially valid result.
pub fn validate(form: &ContactForm) -> Result<ContactSubmission, FieldErrors> {
    let name = ContactName::new(&form.name);
    let number = PhoneNumber::new(&form.number);
    let email = EmailAddress::new(&form.email);
    let address = parse_address(&form.address);
    let service = ServiceCategory::new(&form.service);
    let message = Message::new(&form.message);

    let mut errors = FieldErrors::new();
    note_error(&mut errors, fields::NAME, &name);
    note_error(&mut errors, fields::NUMBER, &number);
    note_error(&mut errors, fields::EMAIL, &email);
    note_error(&mut errors, fields::ADDRESS, &address);
    note_error(&mut errors, fields::SERVICE, &service);
    note_error(&mut errors, fields::MESSAGE, &message);

    match (name, number, email, address, service, message) {
        (Ok(name), Ok(number), Ok(email), Ok(address), Ok(service), Ok(message))
            if errors.is_empty() =>
        {
            Ok(ContactSubmission {
                name,
                number,
                email,
                address,
                service,
                message,
            })
        }
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "John Doe".to_string(),
            number: "+14155550134".to_string(),
            email: "john@example.com".to_string(),
            address: "12 Harbor Rd".to_string(),
            service: "Web & App Development".to_string(),
            message: "I would like a quote for a new site.".to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        let submission = validate(&valid_form()).unwrap();
        assert_eq!(submission.name.as_str(), "John Doe");
        assert_eq!(submission.address.unwrap().as_str(), "12 Harbor Rd");
    }

    #[test]
    fn test_blank_address_is_absent() {
        let mut form = valid_form();
        form.address = "   ".to_string();
        let submission = validate(&form).unwrap();
        assert!(submission.address.is_none());
    }

    #[test]
    fn test_single_bad_field_rejects_whole_form() {
        let mut form = valid_form();
        form.email = "not-an-email".to_string();

        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(fields::EMAIL),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn test_collects_all_failures_in_one_pass() {
        let form = ContactForm::default();
        let errors = validate(&form).unwrap_err();

        // Every required field fails on an empty form; address is optional
        assert_eq!(errors.len(), 5);
        assert!(errors.get(fields::NAME).is_some());
        assert!(errors.get(fields::NUMBER).is_some());
        assert!(errors.get(fields::EMAIL).is_some());
        assert!(errors.get(fields::ADDRESS).is_none());
        assert!(errors.get(fields::SERVICE).is_some());
        assert!(errors.get(fields::MESSAGE).is_some());
    }

    #[test]
    fn test_validation_is_deterministic() {
        let mut form = valid_form();
        form.name = "J".to_string();
        form.message = "short".to_string();

        let first = validate(&form).unwrap_err();
        let second = validate(&form).unwrap_err();
        assert_eq!(first, second);

        let pairs: Vec<_> = first.iter().collect();
        assert_eq!(
            pairs,
            vec![
                (fields::MESSAGE, "Message must be at least 10 characters"),
                (fields::NAME, "Name must be at least 2 characters"),
            ]
        );
    }

    #[test]
    fn test_clear_field_drops_only_that_entry() {
        let form = ContactForm::default();
        let mut errors = validate(&form).unwrap_err();

        errors.clear_field(fields::EMAIL);
        assert!(errors.get(fields::EMAIL).is_none());
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_field_errors_serialize_as_map() {
        let mut form = valid_form();
        form.service = String::new();
        let errors = validate(&form).unwrap_err();

        let value = serde_json::to_value(&errors).unwrap();
        assert_eq!(value["service"], "Please select a service");
    }
}
