//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Historical weather data is missing or malformed
    #[error("Data error: {0}")]
    Data(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Create a data error
    pub fn data(reason: impl Into<String>) -> Self {
        Self::Data(reason.into())
    }

    /// Check if this error is the caller's fault rather than bad data or setup
    pub const fn is_precondition_violation(&self) -> bool {
        match self {
            Self::Domain(e) => e.is_precondition_violation(),
            _ => false,
        }
    }
}
