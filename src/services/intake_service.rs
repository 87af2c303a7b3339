//! Intake service layer.
//!
//! Orchestrates the contact flow: validate the raw form, and only when it
//! passes hand the submission to the delivery client. Errors never escape:
//! the outcome is always data.

use crate::client::AsyncDeliveryClient;
use crate::metrics::Metrics;
use crate::models::{ContactForm, DeliveryReport};
use crate::validation::{validate, FieldErrors};
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

/// Outcome of handling one contact form.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// Validation failed; one message per offending field
    Rejected(FieldErrors),

    /// Validation passed and a dispatch was attempted
    Completed(DeliveryReport),
}

/// Intake service trait for handling contact forms.
#[async_trait]
pub trait IntakeService: Send + Sync {
    /// Validate and, if valid, deliver one contact form.
    async fn submit(&self, form: &ContactForm) -> SubmitOutcome;
}

/// Default implementation of IntakeService.
pub struct IntakeServiceImpl {
    client: Arc<dyn AsyncDeliveryClient>,
    metrics: Metrics,
}

impl IntakeServiceImpl {
    pub fn new(client: Arc<dyn AsyncDeliveryClient>) -> Self {
        Self {
            client,
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the service-level metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}

#[async_trait]
impl IntakeService for IntakeServiceImpl {
    async fn submit(&self, form: &ContactForm) -> SubmitOutcome {
        let submission = match validate(form) {
            Ok(submission) => submission,
            Err(errors) => {
                tracing::debug!("form rejected: {} invalid field(s)", errors.len());
                self.metrics.record_validation_rejected();
                return SubmitOutcome::Rejected(errors);
            }
        };

        tracing::info!(service = %submission.service, "submitting contact form");
        let report = self.client.submit(&submission).await;

        if report.delivered {
            self.metrics.record_delivery_succeeded();
        } else {
            self.metrics.record_delivery_failed();
        }

        SubmitOutcome::Completed(report)
    }
}
