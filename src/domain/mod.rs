//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the contact-form fields:
//! names, email addresses, phone numbers, addresses, service categories, and
//! message bodies. These value objects validate at construction time and
//! prevent invalid data from being represented in the system.

pub mod address;
pub mod email;
pub mod errors;
pub mod message;
pub mod name;
pub mod phone;
pub mod service_category;

pub use address::StreetAddress;
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use message::Message;
pub use name::ContactName;
pub use phone::PhoneNumber;
pub use service_category::{ServiceCategory, SERVICE_CATALOG};
