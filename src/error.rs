//! Error types for the contact intake pipeline.
//!
//! This module defines custom error types using `thiserror` for precise error
//! handling. Transport errors never reach callers of the submission client:
//! they exist for logging and metrics and are absorbed into the normalized
//! `DeliveryReport` at the client boundary.

use thiserror::Error;

/// Errors that can occur while dispatching a submission.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Could not reach the endpoint (connection refused, DNS failure)
    #[error("connection failed: {0}")]
    Connection(String),

    /// The request failed mid-flight (I/O error, timeout)
    #[error("request I/O error: {0}")]
    Io(String),

    /// The submission could not be serialized to JSON
    #[error("failed to serialize submission: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Any other transport-level failure
    #[error("transport error: {0}")]
    Other(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with TransportError
pub type TransportResult<T> = Result<T, TransportError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
