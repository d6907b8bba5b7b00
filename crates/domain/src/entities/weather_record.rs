//! Historical weather record entity
//!
//! One day of observed measurements. Records are validated on construction
//! and immutable afterwards.

use serde::Serialize;
use validator::Validate;

use crate::errors::DomainError;
use crate::value_objects::{CloudCover, TemperatureRange, Wind};

/// A single day of observed weather
///
/// # Examples
///
/// ```
/// use domain::{CloudCover, TemperatureRange, WeatherRecord, Wind, WindDirection};
///
/// let record = WeatherRecord::new(
///     1,
///     2.4,
///     TemperatureRange::new(28.0, 19.5).unwrap(),
///     64,
///     CloudCover::new(5).unwrap(),
///     Wind::new(11.0, 35.0, WindDirection::new("SE")).unwrap(),
///     1012.3,
/// )
/// .unwrap();
///
/// assert_eq!(record.humidity(), 64);
/// assert!(record.wind().direction().has_easterly_component());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct WeatherRecord {
    /// Day index of the observation
    date: u32,
    /// Rainfall in mm
    #[validate(range(min = 0.0, message = "rainfall must not be negative"))]
    rainfall: f64,
    temperature: TemperatureRange,
    /// Relative humidity in percent
    #[validate(range(max = 100, message = "humidity must be 0-100"))]
    humidity: u8,
    cloud_cover: CloudCover,
    wind: Wind,
    /// Air pressure in hPa
    #[validate(range(exclusive_min = 0.0, message = "air pressure must be positive"))]
    air_pressure: f64,
}

impl WeatherRecord {
    /// Create a validated weather record
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidWeatherRecord` if rainfall is negative,
    /// humidity is above 100, air pressure is not positive, or a measurement
    /// is not finite.
    pub fn new(
        date: u32,
        rainfall: f64,
        temperature: TemperatureRange,
        humidity: u8,
        cloud_cover: CloudCover,
        wind: Wind,
        air_pressure: f64,
    ) -> Result<Self, DomainError> {
        if !rainfall.is_finite() || !air_pressure.is_finite() {
            return Err(DomainError::invalid_record(
                "rainfall and air pressure must be finite",
            ));
        }

        let candidate = Self {
            date,
            rainfall,
            temperature,
            humidity,
            cloud_cover,
            wind,
            air_pressure,
        };
        candidate
            .validate()
            .map_err(|e| DomainError::InvalidWeatherRecord(e.to_string()))?;

        Ok(candidate)
    }

    /// Day index of the observation
    #[must_use]
    pub const fn date(&self) -> u32 {
        self.date
    }

    /// Rainfall in mm
    #[must_use]
    pub const fn rainfall(&self) -> f64 {
        self.rainfall
    }

    /// High and low temperature
    #[must_use]
    pub const fn temperature(&self) -> TemperatureRange {
        self.temperature
    }

    #[must_use]
    pub const fn high_temperature(&self) -> f64 {
        self.temperature.high()
    }

    #[must_use]
    pub const fn low_temperature(&self) -> f64 {
        self.temperature.low()
    }

    /// Relative humidity in percent
    #[must_use]
    pub const fn humidity(&self) -> u8 {
        self.humidity
    }

    #[must_use]
    pub const fn cloud_cover(&self) -> CloudCover {
        self.cloud_cover
    }

    /// Wind speeds and direction
    #[must_use]
    pub const fn wind(&self) -> &Wind {
        &self.wind
    }

    #[must_use]
    pub const fn average_wind_speed(&self) -> f64 {
        self.wind.average()
    }

    #[must_use]
    pub const fn maximum_wind_speed(&self) -> f64 {
        self.wind.maximum()
    }

    /// Air pressure in hPa
    #[must_use]
    pub const fn air_pressure(&self) -> f64 {
        self.air_pressure
    }
}
