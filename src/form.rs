//! Form state machine for the contact flow.
//!
//! Drives the lifecycle `idle → submitting → {success | error} → idle`.
//! State is component-local plain data: field values, per-field errors, the
//! current phase, and the status banner. At most one submission is in flight;
//! while `Submitting`, further submit attempts are refused. Once dispatched,
//! a submission runs to completion — there is no cancel.

use crate::models::{fields, ContactForm, ContactSubmission, DeliveryReport};
use crate::validation::{validate, FieldErrors};
use std::time::{Duration, Instant};

/// The phase of the submission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Ready for input
    Idle,

    /// A submission is in flight
    Submitting,

    /// The last submission was dispatched; banner visible
    Success,

    /// The last submission failed; banner visible
    Error,
}

/// Component-local state of the contact form.
#[derive(Debug, Clone)]
pub struct FormState {
    form: ContactForm,
    errors: FieldErrors,
    phase: FormPhase,
    status_message: String,
    banner_deadline: Option<Instant>,
    banner_window: Duration,
}

impl FormState {
    /// Create an empty form whose status banner stays visible for
    /// `banner_window` after a submission completes.
    pub fn new(banner_window: Duration) -> Self {
        Self {
            form: ContactForm::default(),
            errors: FieldErrors::new(),
            phase: FormPhase::Idle,
            status_message: String::new(),
            banner_deadline: None,
            banner_window,
        }
    }

    /// Current field values.
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Current per-field validation errors.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Text of the status banner ("" when no banner is shown).
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True while a submission is in flight.
    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Update one field by its wire name and clear that field's error.
    ///
    /// Unknown field names are ignored. Only the edited field's error is
    /// cleared; other fields keep their messages until the next validation.
    pub fn set_field(&mut self, field: &str, value: &str) {
        match field {
            fields::NAME => self.form.name = value.to_string(),
            fields::NUMBER => self.form.number = value.to_string(),
            fields::EMAIL => self.form.email = value.to_string(),
            fields::ADDRESS => self.form.address = value.to_string(),
            fields::SERVICE => self.form.service = value.to_string(),
            fields::MESSAGE => self.form.message = value.to_string(),
            _ => return,
        }
        self.errors.clear_field(field);
    }

    /// Validate the current fields and, if they pass, enter `Submitting`.
    ///
    /// Returns the validated submission to hand to the delivery client, or
    /// `None` when validation failed (errors are recorded on the state) or a
    /// submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<ContactSubmission> {
        if self.phase == FormPhase::Submitting {
            tracing::debug!("submit refused: a submission is already in flight");
            return None;
        }

        self.errors = FieldErrors::new();

        match validate(&self.form) {
            Ok(submission) => {
                self.phase = FormPhase::Submitting;
                self.status_message.clear();
                self.banner_deadline = None;
                Some(submission)
            }
            Err(errors) => {
                tracing::debug!("validation rejected {} field(s)", errors.len());
                self.errors = errors;
                self.phase = FormPhase::Idle;
                None
            }
        }
    }

    /// Record the outcome of the in-flight submission.
    ///
    /// Moves to `Success` or `Error`, shows the banner, and resets every
    /// field to empty when the report says delivered. Ignored unless a
    /// submission is actually in flight.
    pub fn finish_submit(&mut self, report: &DeliveryReport) {
        if self.phase != FormPhase::Submitting {
            return;
        }

        self.phase = if report.delivered {
            FormPhase::Success
        } else {
            FormPhase::Error
        };
        self.status_message = report.message.clone();
        self.banner_deadline = Some(Instant::now() + self.banner_window);

        if report.delivered {
            self.form = ContactForm::default();
        }
    }

    /// Advance time-driven transitions: clears the status banner back to
    /// `Idle` once its display window has elapsed.
    pub fn poll(&mut self, now: Instant) {
        if matches!(self.phase, FormPhase::Success | FormPhase::Error) {
            if let Some(deadline) = self.banner_deadline {
                if now >= deadline {
                    self.phase = FormPhase::Idle;
                    self.status_message.clear();
                    self.banner_deadline = None;
                }
            }
        }
    }
}
