//! Error types for lexrank_scribe
//!
//! This module defines the error types used throughout the library.
//! Invalid input is always reported as an error; ranking that runs out of
//! iterations is reported as a [`ConvergenceWarning`] next to a usable result.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SummarizeError>;

/// Main error type for lexrank_scribe
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SummarizeError {
    /// Input text is empty, whitespace-only, or otherwise unusable
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// The generative-language service could not be reached
    /// (network, authentication, quota, missing credentials)
    #[error("Service unavailable: {message}")]
    ServiceUnavailable { message: String },

    /// The generative-language service answered with something unusable
    #[error("Malformed service response: {message}")]
    ServiceResponse { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Internal error (should not occur in normal usage)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl SummarizeError {
    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a service unavailable error
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable {
            message: message.into(),
        }
    }

    /// Create a malformed service response error
    pub fn service_response(message: impl Into<String>) -> Self {
        Self::ServiceResponse {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Check if this error was caused by the caller's input
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// Check if this error came from the external generative service
    pub fn is_service_failure(&self) -> bool {
        matches!(
            self,
            Self::ServiceUnavailable { .. } | Self::ServiceResponse { .. }
        )
    }
}

impl From<serde_json::Error> for SummarizeError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

/// Ranking stopped at the iteration cap before reaching the threshold.
///
/// Informational only: the last iterate is still a valid distribution.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("Ranking did not converge after {iterations} iterations (delta={delta:.6})")]
pub struct ConvergenceWarning {
    /// Iterations performed
    pub iterations: usize,
    /// L1 change of the final iteration
    pub delta: f64,
}

impl ConvergenceWarning {
    pub fn new(iterations: usize, delta: f64) -> Self {
        Self { iterations, delta }
    }
}
