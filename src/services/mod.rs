//! Service layer.

pub mod intake_service;

pub use intake_service::{IntakeService, IntakeServiceImpl, SubmitOutcome};
