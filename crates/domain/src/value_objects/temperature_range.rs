//! Daily temperature range value object

use serde::Serialize;
use std::fmt;

use crate::errors::DomainError;

/// Observed high and low temperature for a day
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TemperatureRange {
    high: f64,
    low: f64,
}

impl TemperatureRange {
    /// Create a validated temperature range
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidWeatherRecord` if either value is not
    /// finite or the low is above the high.
    pub fn new(high: f64, low: f64) -> Result<Self, DomainError> {
        if !high.is_finite() || !low.is_finite() {
            return Err(DomainError::invalid_record("temperature must be finite"));
        }
        if low > high {
            return Err(DomainError::invalid_record(format!(
                "low temperature {low} is above high temperature {high}"
            )));
        }
        Ok(Self { high, low })
    }

    /// Daily maximum
    #[must_use]
    pub const fn high(&self) -> f64 {
        self.high
    }

    /// Daily minimum
    #[must_use]
    pub const fn low(&self) -> f64 {
        self.low
    }
}

impl fmt::Display for TemperatureRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}° / {:.1}°", self.high, self.low)
    }
}
