//! Contact submission models: the raw form shape, the validated submission,
//! and the normalized delivery result.

use crate::domain::{
    ContactName, EmailAddress, Message, PhoneNumber, ServiceCategory, StreetAddress,
};
use serde::{Deserialize, Serialize, Serializer};

/// Wire field names, shared by the form shape, the error map, and the
/// JSON payload sent to the collection endpoint.
pub mod fields {
    pub const NAME: &str = "name";
    pub const NUMBER: &str = "number";
    pub const EMAIL: &str = "email";
    pub const ADDRESS: &str = "address";
    pub const SERVICE: &str = "service";
    pub const MESSAGE: &str = "message";
}

/// Raw contact-form values as the user typed them.
///
/// Nothing here is validated; this is the input to the validator. All fields
/// default to empty strings, which is also the post-reset state of the form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ContactForm {
    /// Full name
    pub name: String,

    /// Phone number
    pub number: String,

    /// Email address
    pub email: String,

    /// Street address (optional on the form)
    pub address: String,

    /// Selected service category
    pub service: String,

    /// Message body
    pub message: String,
}

impl ContactForm {
    /// True when every field is an empty string (the reset state).
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.number.is_empty()
            && self.email.is_empty()
            && self.address.is_empty()
            && self.service.is_empty()
            && self.message.is_empty()
    }
}

/// The endpoint expects every field present, so a missing address goes over
/// the wire as an empty string.
fn serialize_optional_address<S>(
    address: &Option<StreetAddress>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match address {
        Some(a) => serializer.serialize_str(a.as_str()),
        None => serializer.serialize_str(""),
    }
}

/// A fully validated contact submission, eligible for transmission.
///
/// Every field is a domain value object, so constructing one of these outside
/// the validator requires satisfying each field's rules individually. There
/// is no partially valid submission. Serializes to the exact JSON shape the
/// collection endpoint accepts.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ContactSubmission {
    /// Full name
    pub name: ContactName,

    /// Phone number
    pub number: PhoneNumber,

    /// Email address
    pub email: EmailAddress,

    /// Street address, if one was provided
    #[serde(serialize_with = "serialize_optional_address")]
    pub address: Option<StreetAddress>,

    /// Selected service category
    pub service: ServiceCategory,

    /// Message body
    pub message: Message,
}

/// Confirmation text for a dispatched submission.
pub const DELIVERED_MESSAGE: &str =
    "Your message has been sent successfully! We will get back to you soon.";

/// Retry-or-contact-us text for a failed dispatch.
pub const FAILED_MESSAGE: &str =
    "Failed to send message. Please try again or contact us directly.";

/// The normalized outcome of a submission attempt.
///
/// Exactly two shapes exist: delivered with a confirmation message, or failed
/// with a retry message. A delivered report is a delivery-attempt
/// confirmation only; the transport is opaque, so "the request left the
/// client without error" is the strongest guarantee available.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeliveryReport {
    /// Whether the request was dispatched without a transport-level failure
    pub delivered: bool,

    /// User-facing status text
    pub message: String,

    /// RFC 3339 timestamp of the attempt
    pub attempted_at: String,
}

impl DeliveryReport {
    /// Build the success shape.
    pub fn success() -> Self {
        Self {
            delivered: true,
            message: DELIVERED_MESSAGE.to_string(),
            attempted_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Build the failure shape.
    pub fn failure() -> Self {
        Self {
            delivered: false,
            message: FAILED_MESSAGE.to_string(),
            attempted_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
