//! Pressure-adjusted multi-day model
//!
//! Starts from window averages and conditions every output on whether the
//! most recent day's air pressure sits below, above, or at the window mean.
//! Falling pressure signals approaching rain, cloud and cooler nights.

use serde::Serialize;

use domain::{DomainError, WeatherHistory, WeatherRecord};

use super::{WeatherPrediction, capture_window, clamp_days, round_half_even, window_mean};

const FALLING_RAIN_MULTIPLIER: f64 = 10.0;
const STEADY_RAIN_MULTIPLIER: f64 = 7.0;
const EASTERLY_RAIN_BOOST: f64 = 1.2;
const TEMPERATURE_SHIFT: f64 = 2.0;
const HUMIDITY_SHIFT: f64 = 15.0;
const CLOUD_SHIFT: f64 = 2.0;
/// Gusts stronger than this multiple of the mean wind mark a windy spell
const GUST_RATIO: f64 = 4.0;
const GUST_BOOST: f64 = 1.2;

/// Most recent air pressure relative to the window mean
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PressureTrend {
    /// Latest reading below the mean
    Falling,
    /// Latest reading equal to the mean
    Steady,
    /// Latest reading above the mean
    Rising,
}

impl PressureTrend {
    /// Classify a reading against a reference mean
    #[must_use]
    pub fn classify(latest: f64, mean: f64) -> Self {
        if latest < mean {
            Self::Falling
        } else if latest > mean {
            Self::Rising
        } else {
            Self::Steady
        }
    }

    #[must_use]
    pub const fn is_falling(self) -> bool {
        matches!(self, Self::Falling)
    }

    #[must_use]
    pub const fn is_rising(self) -> bool {
        matches!(self, Self::Rising)
    }
}

/// Prediction from window averages adjusted by the pressure trend
#[derive(Debug, Clone, Copy)]
pub struct SophisticatedPrediction<'a> {
    window: &'a [WeatherRecord],
    latest: &'a WeatherRecord,
    number_days: usize,
    mean_air_pressure: f64,
    trend: PressureTrend,
}

impl<'a> SophisticatedPrediction<'a> {
    pub const NAME: &'static str = "SophisticatedPrediction";

    /// Build the model over the most recent `number_days` records (at most 28)
    ///
    /// The mean air pressure of the window is computed once here.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDayCount` for zero days and
    /// `DomainError::EmptyHistory` if the history holds no records.
    pub fn new(history: &'a WeatherHistory, number_days: usize) -> Result<Self, DomainError> {
        let number_days = clamp_days(number_days)?;
        let window = capture_window(history, number_days)?;
        let latest = window.last().ok_or(DomainError::EmptyHistory)?;
        let mean_air_pressure = window_mean(window, WeatherRecord::air_pressure);
        let trend = PressureTrend::classify(latest.air_pressure(), mean_air_pressure);

        Ok(Self {
            window,
            latest,
            number_days,
            mean_air_pressure,
            trend,
        })
    }

    /// Mean air pressure over the window
    #[must_use]
    pub const fn mean_air_pressure(&self) -> f64 {
        self.mean_air_pressure
    }

    /// Pressure trend of the most recent day
    #[must_use]
    pub const fn pressure_trend(&self) -> PressureTrend {
        self.trend
    }

    fn mean(&self, field: impl Fn(&WeatherRecord) -> f64) -> f64 {
        window_mean(self.window, field)
    }
}

impl WeatherPrediction for SophisticatedPrediction<'_> {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn number_days(&self) -> usize {
        self.number_days
    }

    fn chance_of_rain(&self) -> i32 {
        let multiplier = if self.trend.is_falling() {
            FALLING_RAIN_MULTIPLIER
        } else {
            STEADY_RAIN_MULTIPLIER
        };
        let rainfall = self.mean(WeatherRecord::rainfall) * multiplier;

        let chance = if self.latest.wind().direction().has_easterly_component() {
            round_half_even(rainfall * EASTERLY_RAIN_BOOST)
        } else {
            round_half_even(rainfall)
        };
        chance.min(100)
    }

    fn high_temperature(&self) -> f64 {
        let high = self.mean(WeatherRecord::high_temperature);
        if self.trend.is_rising() {
            high + TEMPERATURE_SHIFT
        } else {
            high
        }
    }

    fn low_temperature(&self) -> f64 {
        let low = self.mean(WeatherRecord::low_temperature);
        if self.trend.is_falling() {
            low - TEMPERATURE_SHIFT
        } else {
            low
        }
    }

    fn humidity(&self) -> i32 {
        let humidity = self.mean(|r| f64::from(r.humidity()));
        let adjusted = match self.trend {
            PressureTrend::Falling => humidity + HUMIDITY_SHIFT,
            PressureTrend::Rising => humidity - HUMIDITY_SHIFT,
            PressureTrend::Steady => humidity,
        };
        round_half_even(adjusted).clamp(0, 100)
    }

    fn cloud_cover(&self) -> i32 {
        let cloud_cover = self.mean(|r| f64::from(r.cloud_cover().value()));
        let adjusted = if self.trend.is_falling() {
            cloud_cover + CLOUD_SHIFT
        } else {
            cloud_cover
        };
        round_half_even(adjusted).min(9)
    }

    fn wind_speed(&self) -> f64 {
        let wind_speed = self.mean(WeatherRecord::average_wind_speed);
        let rounded = if self.latest.maximum_wind_speed() > GUST_RATIO * wind_speed {
            round_half_even(wind_speed * GUST_BOOST)
        } else {
            round_half_even(wind_speed)
        };
        f64::from(rounded)
    }
}
