//! Weather history port
//!
//! Defines how historical weather records are loaded into a store.

#[cfg(test)]
use mockall::automock;

use domain::WeatherHistory;

use crate::error::ApplicationError;

/// Port for loading historical weather data
#[cfg_attr(test, automock)]
pub trait WeatherHistoryPort: Send + Sync {
    /// Load every record from the source, oldest first
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Data` if the source is missing or malformed.
    fn load(&self) -> Result<WeatherHistory, ApplicationError>;

    /// Human-readable description of the source (e.g. a file path)
    fn source_name(&self) -> String;
}
