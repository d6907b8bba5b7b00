//! Yesterday's weather model
//!
//! Predicts tomorrow to be the same as the most recent observed day.

use domain::{DomainError, WeatherHistory, WeatherRecord};

use super::WeatherPrediction;

/// Rainfall (mm) below which no rain is expected
const NO_RAIN: f64 = 0.1;
/// Rainfall (mm) below which only a little rain is expected
const LITTLE_RAIN: f64 = 3.0;
/// Rainfall (mm) below which some rain is expected
const SOME_RAIN: f64 = 8.0;

const CHANCE_NONE: i32 = 0;
const CHANCE_MILD: i32 = 40;
const CHANCE_PROBABLE: i32 = 75;
const CHANCE_LIKELY: i32 = 90;

/// Prediction based solely on yesterday's observations
#[derive(Debug, Clone, Copy)]
pub struct YesterdaysWeather<'a> {
    yesterday: &'a WeatherRecord,
}

impl<'a> YesterdaysWeather<'a> {
    pub const NAME: &'static str = "YesterdaysWeather";

    /// Build the model from the most recent record
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyHistory` if the history holds no records.
    pub fn new(history: &'a WeatherHistory) -> Result<Self, DomainError> {
        let yesterday = history.latest().ok_or(DomainError::EmptyHistory)?;
        Ok(Self { yesterday })
    }
}

impl WeatherPrediction for YesterdaysWeather<'_> {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn number_days(&self) -> usize {
        1
    }

    fn chance_of_rain(&self) -> i32 {
        let rainfall = self.yesterday.rainfall();
        if rainfall < NO_RAIN {
            CHANCE_NONE
        } else if rainfall < LITTLE_RAIN {
            CHANCE_MILD
        } else if rainfall < SOME_RAIN {
            CHANCE_PROBABLE
        } else {
            CHANCE_LIKELY
        }
    }

    fn high_temperature(&self) -> f64 {
        self.yesterday.high_temperature()
    }

    fn low_temperature(&self) -> f64 {
        self.yesterday.low_temperature()
    }

    fn humidity(&self) -> i32 {
        i32::from(self.yesterday.humidity())
    }

    fn cloud_cover(&self) -> i32 {
        i32::from(self.yesterday.cloud_cover().value())
    }

    fn wind_speed(&self) -> f64 {
        self.yesterday.average_wind_speed()
    }
}
