//! Forecast snapshot
//!
//! Captures every output of a prediction model in a plain, serializable
//! value. A snapshot is itself a [`WeatherPrediction`], so it can be fed to
//! the advisability scorer directly.

use std::fmt;

use serde::Serialize;

use super::WeatherPrediction;

/// Frozen outputs of a prediction model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Forecast {
    /// Name of the model that produced the forecast
    pub model: &'static str,
    /// Days of history used
    pub number_days: usize,
    /// Percentage chance of rain
    pub chance_of_rain: i32,
    /// Expected high temperature
    pub high_temperature: f64,
    /// Expected low temperature
    pub low_temperature: f64,
    /// Relative humidity (percent)
    pub humidity: i32,
    /// Cloud cover (0-9)
    pub cloud_cover: i32,
    /// Average wind speed
    pub wind_speed: f64,
}

impl Forecast {
    /// Snapshot every output of a model
    pub fn from_prediction(model: &dyn WeatherPrediction) -> Self {
        Self {
            model: model.name(),
            number_days: model.number_days(),
            chance_of_rain: model.chance_of_rain(),
            high_temperature: model.high_temperature(),
            low_temperature: model.low_temperature(),
            humidity: model.humidity(),
            cloud_cover: model.cloud_cover(),
            wind_speed: model.wind_speed(),
        }
    }
}

impl WeatherPrediction for Forecast {
    fn name(&self) -> &'static str {
        self.model
    }

    fn number_days(&self) -> usize {
        self.number_days
    }

    fn chance_of_rain(&self) -> i32 {
        self.chance_of_rain
    }

    fn high_temperature(&self) -> f64 {
        self.high_temperature
    }

    fn low_temperature(&self) -> f64 {
        self.low_temperature
    }

    fn humidity(&self) -> i32 {
        self.humidity
    }

    fn cloud_cover(&self) -> i32 {
        self.cloud_cover
    }

    fn wind_speed(&self) -> f64 {
        self.wind_speed
    }
}

impl fmt::Display for Forecast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} day{}): rain {}%, high {:.1}°, low {:.1}°, humidity {}%, cloud {}/9, wind {:.0}",
            self.model,
            self.number_days,
            if self.number_days == 1 { "" } else { "s" },
            self.chance_of_rain,
            self.high_temperature,
            self.low_temperature,
            self.humidity,
            self.cloud_cover,
            self.wind_speed,
        )
    }
}
