//! Error types for the torque model.

use thiserror::Error;

/// Result type alias for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised while setting up or evaluating the torque sweep.
#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    /// A physical parameter makes a formula undefined.
    #[error("domain error: {0}")]
    Domain(String),

    /// A sweep parameter is unusable (empty set, zero samples, empty series).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ModelError {
    /// Create a domain error.
    #[must_use]
    pub fn domain(details: impl Into<String>) -> Self {
        Self::Domain(details.into())
    }

    /// Create an invalid input error.
    #[must_use]
    pub fn invalid_input(details: impl Into<String>) -> Self {
        Self::InvalidInput(details.into())
    }
}
