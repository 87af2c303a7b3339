//! Data models for contact intake.

pub mod submission;

pub use submission::{
    fields, ContactForm, ContactSubmission, DeliveryReport, DELIVERED_MESSAGE, FAILED_MESSAGE,
};
