//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A weather record failed validation
    #[error("Invalid weather record: {0}")]
    InvalidWeatherRecord(String),

    /// Cloud cover outside the 0-9 scale
    #[error("Invalid cloud cover: {0} is out of range (must be 0-9)")]
    InvalidCloudCover(u8),

    /// Event details failed validation
    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    /// A prediction model was requested over an empty history
    #[error("Weather history is empty")]
    EmptyHistory,

    /// A prediction model was requested over zero days of history
    #[error("Invalid number of days: {0} (must be at least 1)")]
    InvalidDayCount(usize),

    /// Unknown prediction model selector
    #[error("Invalid model choice: {0}")]
    InvalidModelChoice(String),
}

impl DomainError {
    /// Create an invalid weather record error
    pub fn invalid_record(reason: impl Into<String>) -> Self {
        Self::InvalidWeatherRecord(reason.into())
    }

    /// Check if this error is a violated caller precondition rather than bad input data
    #[must_use]
    pub const fn is_precondition_violation(&self) -> bool {
        matches!(self, Self::EmptyHistory | Self::InvalidDayCount(_))
    }
}
