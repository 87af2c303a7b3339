//! Basic metrics instrumentation for the intake pipeline.
//!
//! Provides counters and duration tracking for HTTP dispatches and
//! submission outcomes.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Metrics collector for tracking intake activity.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Total number of HTTP requests made
    http_requests_total: Arc<AtomicU64>,

    /// Total number of HTTP transport errors
    http_errors_total: Arc<AtomicU64>,

    /// Total duration of all HTTP requests in milliseconds
    http_duration_total_ms: Arc<AtomicU64>,

    /// Number of submissions handed to the client
    submissions_attempted_total: Arc<AtomicU64>,

    /// Number of submissions rejected by validation
    validation_rejections_total: Arc<AtomicU64>,

    /// Number of submissions dispatched without transport failure
    deliveries_succeeded_total: Arc<AtomicU64>,

    /// Number of submissions that failed at transport level
    deliveries_failed_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            http_requests_total: Arc::new(AtomicU64::new(0)),
            http_errors_total: Arc::new(AtomicU64::new(0)),
            http_duration_total_ms: Arc::new(AtomicU64::new(0)),
            submissions_attempted_total: Arc::new(AtomicU64::new(0)),
            validation_rejections_total: Arc::new(AtomicU64::new(0)),
            deliveries_succeeded_total: Arc::new(AtomicU64::new(0)),
            deliveries_failed_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record an HTTP request with duration.
    pub fn record_http_request(&self, duration: Duration) {
        self.http_requests_total.fetch_add(1, Ordering::Relaxed);
        self.http_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record an HTTP transport error.
    pub fn record_http_error(&self) {
        self.http_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a submission handed to the client.
    pub fn record_submission_attempted(&self) {
        self.submissions_attempted_total
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Record a submission rejected by validation.
    pub fn record_validation_rejected(&self) {
        self.validation_rejections_total
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Record a dispatch that completed without transport failure.
    pub fn record_delivery_succeeded(&self) {
        self.deliveries_succeeded_total
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Record a dispatch that failed at transport level.
    pub fn record_delivery_failed(&self) {
        self.deliveries_failed_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Get total HTTP requests.
    pub fn http_requests_total(&self) -> u64 {
        self.http_requests_total.load(Ordering::Relaxed)
    }

    /// Get total HTTP transport errors.
    pub fn http_errors_total(&self) -> u64 {
        self.http_errors_total.load(Ordering::Relaxed)
    }

    /// Get total HTTP duration in milliseconds.
    pub fn http_duration_total_ms(&self) -> u64 {
        self.http_duration_total_ms.load(Ordering::Relaxed)
    }

    /// Get total submissions attempted.
    pub fn submissions_attempted_total(&self) -> u64 {
        self.submissions_attempted_total.load(Ordering::Relaxed)
    }

    /// Get total validation rejections.
    pub fn validation_rejections_total(&self) -> u64 {
        self.validation_rejections_total.load(Ordering::Relaxed)
    }

    /// Get total successful deliveries.
    pub fn deliveries_succeeded_total(&self) -> u64 {
        self.deliveries_succeeded_total.load(Ordering::Relaxed)
    }

    /// Get total failed deliveries.
    pub fn deliveries_failed_total(&self) -> u64 {
        self.deliveries_failed_total.load(Ordering::Relaxed)
    }

    /// Reset all metrics to zero.
    pub fn reset(&self) {
        self.http_requests_total.store(0, Ordering::Relaxed);
        self.http_errors_total.store(0, Ordering::Relaxed);
        self.http_duration_total_ms.store(0, Ordering::Relaxed);
        self.submissions_attempted_total.store(0, Ordering::Relaxed);
        self.validation_rejections_total.store(0, Ordering::Relaxed);
        self.deliveries_succeeded_total.store(0, Ordering::Relaxed);
        self.deliveries_failed_total.store(0, Ordering::Relaxed);
    }

    /// Get a snapshot of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            http_requests_total: self.http_requests_total(),
            http_errors_total: self.http_errors_total(),
            http_duration_total_ms: self.http_duration_total_ms(),
            submissions_attempted_total: self.submissions_attempted_total(),
            validation_rejections_total: self.validation_rejections_total(),
            deliveries_succeeded_total: self.deliveries_succeeded_total(),
            deliveries_failed_total: self.deliveries_failed_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone)]
pub struct MetricsSummary {
    pub http_requests_total: u64,
    pub http_errors_total: u64,
    pub http_duration_total_ms: u64,
    pub submissions_attempted_total: u64,
    pub validation_rejections_total: u64,
    pub deliveries_succeeded_total: u64,
    pub deliveries_failed_total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new();
        assert_eq!(metrics.http_requests_total(), 0);
        assert_eq!(metrics.submissions_attempted_total(), 0);
        assert_eq!(metrics.deliveries_failed_total(), 0);
    }

    #[test]
    fn test_record_http_request() {
        let metrics = Metrics::new();
        metrics.record_http_request(Duration::from_millis(100));
        assert_eq!(metrics.http_requests_total(), 1);
        assert_eq!(metrics.http_duration_total_ms(), 100);
    }

    #[test]
    fn test_record_submission_outcomes() {
        let metrics = Metrics::new();
        metrics.record_submission_attempted();
        metrics.record_submission_attempted();
        metrics.record_delivery_succeeded();
        metrics.record_delivery_failed();
        metrics.record_validation_rejected();

        assert_eq!(metrics.submissions_attempted_total(), 2);
        assert_eq!(metrics.deliveries_succeeded_total(), 1);
        assert_eq!(metrics.deliveries_failed_total(), 1);
        assert_eq!(metrics.validation_rejections_total(), 1);
    }

    #[test]
    fn test_reset() {
        let metrics = Metrics::new();
        metrics.record_http_request(Duration::from_millis(100));
        metrics.record_http_error();
        metrics.record_submission_attempted();

        metrics.reset();

        assert_eq!(metrics.http_requests_total(), 0);
        assert_eq!(metrics.http_errors_total(), 0);
        assert_eq!(metrics.submissions_attempted_total(), 0);
    }

    #[test]
    fn test_summary() {
        let metrics = Metrics::new();
        metrics.record_submission_attempted();
        metrics.record_delivery_succeeded();

        let summary = metrics.summary();
        assert_eq!(summary.submissions_attempted_total, 1);
        assert_eq!(summary.deliveries_succeeded_total, 1);
        assert_eq!(summary.deliveries_failed_total, 0);
    }

    #[test]
    fn test_concurrent_access() {
        let metrics = Metrics::new();
        let metrics1 = metrics.clone();
        let metrics2 = metrics.clone();

        let handle1 = thread::spawn(move || {
            for _ in 0..100 {
                metrics1.record_submission_attempted();
            }
        });

        let handle2 = thread::spawn(move || {
            for _ in 0..100 {
                metrics2.record_submission_attempted();
            }
        });

        handle1.join().unwrap();
        handle2.join().unwrap();

        assert_eq!(metrics.submissions_attempted_total(), 200);
    }
}
