//! Contact Intake - validation and delivery pipeline for a contact form.
//!
//! This library implements the two cooperating pieces behind an IT-services
//! company's contact form: a deterministic form validator and a submission
//! client that posts validated data to a spreadsheet-backed collection
//! endpoint. Because that endpoint offers no readable acknowledgment, the
//! client reports delivery attempts, not server-side acceptance — see
//! [`client::DeliveryClient::submit`] for the contract.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for every contact field
//! - **models**: Raw form shape, validated submission, delivery result
//! - **validation**: Single-pass, collect-all-failures form validation
//! - **client**: HTTP delivery client (sync core + async facade)
//! - **form**: The idle/submitting/success/error form state machine
//! - **services**: Orchestration of validate-then-deliver
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling
//! - **metrics**: Counters for submission and HTTP activity

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod form;
pub mod metrics;
pub mod models;
pub mod services;
pub mod validation;

pub use client::{AsyncDeliveryClient, AsyncDeliveryClientImpl, DeliveryClient};
pub use config::Config;
pub use error::{ConfigError, TransportError};
pub use form::{FormPhase, FormState};
pub use metrics::{Metrics, MetricsSummary};
pub use models::{ContactForm, ContactSubmission, DeliveryReport};
pub use services::{IntakeService, IntakeServiceImpl, SubmitOutcome};
pub use validation::{validate, FieldErrors};
