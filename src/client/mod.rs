//! HTTP client for delivering submissions to the collection endpoint.
//!
//! The endpoint is a third-party spreadsheet-backed script that accepts a
//! JSON POST and nothing else: no authentication, no readable acknowledgment.
//! The client therefore treats the transport as opaque and reports a
//! delivery attempt, not server-side acceptance.

mod async_wrapper;
pub use async_wrapper::{AsyncDeliveryClient, AsyncDeliveryClientImpl};

use crate::config::Config;
use crate::error::{TransportError, TransportResult};
use crate::metrics::Metrics;
use crate::models::{ContactSubmission, DeliveryReport};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// HTTP client for the collection endpoint.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts through [`AsyncDeliveryClientImpl`].
#[derive(Clone)]
pub struct DeliveryClient {
    /// URL of the collection endpoint
    endpoint_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl DeliveryClient {
    /// Create a new DeliveryClient from configuration.
    pub fn new(config: &Config) -> Self {
        // The endpoint answers POSTs with redirects whose targets we may not
        // read; never follow them.
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .redirects(0)
            .build();

        Self {
            endpoint_url: config.endpoint_url.clone(),
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Create a DeliveryClient with a custom endpoint (useful for testing).
    #[doc(hidden)]
    pub fn with_endpoint(endpoint_url: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .redirects(0)
            .build();

        Self {
            endpoint_url,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// The endpoint this client posts to.
    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// Deliver a validated submission to the collection endpoint.
    ///
    /// Exactly one POST per invocation; there is no retry policy. The result
    /// is always a normalized [`DeliveryReport`] — this method never returns
    /// an error and never panics on transport failure.
    ///
    /// # Opaque-transport contract
    ///
    /// The endpoint does not expose a readable acknowledgment (the original
    /// caller used a `no-cors` fetch, where only network-level faults reject).
    /// Accordingly, *any* HTTP response — including 4xx/5xx — counts as a
    /// successful dispatch, and `delivered: true` means "the request left the
    /// client without error", not "the server confirmed processing". Do not
    /// "fix" this by inspecting the status: no acknowledgment channel exists.
    pub fn submit(&self, submission: &ContactSubmission) -> DeliveryReport {
        self.metrics.record_submission_attempted();

        let body = match serde_json::to_value(submission) {
            Ok(body) => body,
            Err(e) => {
                tracing::error!("failed to serialize submission: {}", e);
                self.metrics.record_delivery_failed();
                return DeliveryReport::failure();
            }
        };

        match self.dispatch(&body) {
            Ok(()) => {
                tracing::info!("submission dispatched to collection endpoint");
                self.metrics.record_delivery_succeeded();
                DeliveryReport::success()
            }
            Err(e) => {
                tracing::error!("failed to dispatch submission: {}", e);
                self.metrics.record_delivery_failed();
                DeliveryReport::failure()
            }
        }
    }

    /// Execute the POST, applying the opaque-transport policy.
    fn dispatch(&self, body: &serde_json::Value) -> TransportResult<()> {
        let start = Instant::now();

        tracing::debug!("POST {}", self.endpoint_url);

        let result = self
            .agent
            .post(&self.endpoint_url)
            .set("Content-Type", "application/json")
            .send_json(body);

        let duration = start.elapsed();
        self.metrics.record_http_request(duration);

        match result {
            Ok(response) => {
                tracing::debug!("dispatch complete (status: {})", response.status());
                Ok(())
            }
            // A status error means a response came back, so the request was
            // dispatched; the opaque contract forbids interpreting it.
            Err(ureq::Error::Status(code, _)) => {
                tracing::debug!("dispatch complete (unreadable status: {})", code);
                Ok(())
            }
            Err(ureq::Error::Transport(transport)) => {
                self.metrics.record_http_error();
                Err(map_transport_error(transport))
            }
        }
    }
}

/// Map a ureq transport failure to a TransportError.
fn map_transport_error(transport: ureq::Transport) -> TransportError {
    match transport.kind() {
        ureq::ErrorKind::ConnectionFailed | ureq::ErrorKind::Dns => {
            TransportError::Connection(transport.to_string())
        }
        ureq::ErrorKind::Io => TransportError::Io(transport.to_string()),
        _ => TransportError::Other(transport.to_string()),
    }
}
