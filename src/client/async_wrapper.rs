//! Async facade over the synchronous DeliveryClient.
//!
//! Runs the blocking HTTP dispatch on tokio's blocking thread pool via
//! `tokio::task::spawn_blocking`, so an async caller can await the single
//! in-flight submission without stalling the runtime.

use crate::client::DeliveryClient;
use crate::models::{ContactSubmission, DeliveryReport};
use async_trait::async_trait;
use std::sync::Arc;

/// Async interface for delivering submissions.
///
/// Like the sync client, implementations must always resolve to a normalized
/// [`DeliveryReport`] — no error type appears in the signature on purpose.
#[async_trait]
pub trait AsyncDeliveryClient: Send + Sync {
    async fn submit(&self, submission: &ContactSubmission) -> DeliveryReport;
}

/// Async wrapper around the synchronous DeliveryClient.
#[derive(Clone)]
pub struct AsyncDeliveryClientImpl {
    client: Arc<DeliveryClient>,
}

impl AsyncDeliveryClientImpl {
    pub fn new(client: DeliveryClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Access the wrapped sync client (metrics, endpoint).
    pub fn inner(&self) -> &DeliveryClient {
        &self.client
    }
}

#[async_trait]
impl AsyncDeliveryClient for AsyncDeliveryClientImpl {
    async fn submit(&self, submission: &ContactSubmission) -> DeliveryReport {
        let client = self.client.clone();
        let submission = submission.clone();

        match tokio::task::spawn_blocking(move || client.submit(&submission)).await {
            Ok(report) => report,
            // A join failure is still a failed dispatch from the caller's
            // point of view; nothing escapes as an error.
            Err(e) => {
                tracing::error!("submission task failed to join: {}", e);
                DeliveryReport::failure()
            }
        }
    }
}
