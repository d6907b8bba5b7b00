//! Wind value objects
//!
//! Compass direction plus the average/maximum speeds observed over a day.

use serde::Serialize;
use std::fmt;

use crate::errors::DomainError;

/// Compass direction the wind blew from (e.g. "NNE", "SW", "E")
///
/// Kept as recorded apart from surrounding whitespace. Direction checks
/// are case-sensitive, so only upper-case points count.
///
/// # Examples
///
/// ```
/// use domain::value_objects::WindDirection;
///
/// assert!(WindDirection::new("ESE").has_easterly_component());
/// assert!(!WindDirection::new("NW").has_easterly_component());
/// assert!(!WindDirection::new("ese").has_easterly_component());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct WindDirection(String);

impl WindDirection {
    /// Create a direction from a compass string
    pub fn new(direction: impl AsRef<str>) -> Self {
        Self(direction.as_ref().trim().to_string())
    }

    /// Get the direction as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the direction contains an easterly component (an upper-case `E`)
    #[must_use]
    pub fn has_easterly_component(&self) -> bool {
        self.0.contains('E')
    }
}

impl fmt::Display for WindDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Daily wind observation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Wind {
    average: f64,
    maximum: f64,
    direction: WindDirection,
}

impl Wind {
    /// Create a validated wind observation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidWeatherRecord` if a speed is negative or
    /// non-finite, or if the maximum is below the average.
    pub fn new(average: f64, maximum: f64, direction: WindDirection) -> Result<Self, DomainError> {
        if !average.is_finite() || !maximum.is_finite() {
            return Err(DomainError::invalid_record("wind speed must be finite"));
        }
        if average < 0.0 {
            return Err(DomainError::invalid_record(format!(
                "average wind speed {average} is negative"
            )));
        }
        if maximum < average {
            return Err(DomainError::invalid_record(format!(
                "maximum wind speed {maximum} is below average {average}"
            )));
        }
        Ok(Self {
            average,
            maximum,
            direction,
        })
    }

    /// Average wind speed over the day
    #[must_use]
    pub const fn average(&self) -> f64 {
        self.average
    }

    /// Strongest wind speed of the day
    #[must_use]
    pub const fn maximum(&self) -> f64 {
        self.maximum
    }

    /// Prevailing direction
    #[must_use]
    pub const fn direction(&self) -> &WindDirection {
        &self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_is_trimmed() {
        let d = WindDirection::new("  SSE ");
        assert_eq!(d.as_str(), "SSE");
        assert_eq!(d.to_string(), "SSE");
        assert_eq!(WindDirection::new("sse").as_str(), "sse");
    }

    #[test]
    fn easterly_component_detection() {
        for dir in ["E", "ENE", "SE", "NNE", "ESE"] {
            assert!(WindDirection::new(dir).has_easterly_component(), "{dir}");
        }
        for dir in ["N", "SW", "WNW", "S", ""] {
            assert!(!WindDirection::new(dir).has_easterly_component(), "{dir}");
        }
    }

    #[test]
    fn lower_case_east_is_not_easterly() {
        for dir in ["ese", "se", "nne", "e"] {
            assert!(!WindDirection::new(dir).has_easterly_component(), "{dir}");
        }
    }

    #[test]
    fn wind_accepts_valid_speeds() {
        let wind = Wind::new(12.0, 30.0, WindDirection::new("W")).unwrap();
        assert!((wind.average() - 12.0).abs() < f64::EPSILON);
        assert!((wind.maximum() - 30.0).abs() < f64::EPSILON);
        assert_eq!(wind.direction().as_str(), "W");
    }

    #[test]
    fn wind_accepts_calm_day() {
        assert!(Wind::new(0.0, 0.0, WindDirection::new("N")).is_ok());
    }

    #[test]
    fn wind_rejects_negative_average() {
        assert!(Wind::new(-1.0, 5.0, WindDirection::new("N")).is_err());
    }

    #[test]
    fn wind_rejects_maximum_below_average() {
        let err = Wind::new(10.0, 5.0, WindDirection::new("N")).unwrap_err();
        assert!(err.to_string().contains("below average"));
    }

    #[test]
    fn wind_rejects_nan() {
        assert!(Wind::new(f64::NAN, 5.0, WindDirection::new("N")).is_err());
    }
}
