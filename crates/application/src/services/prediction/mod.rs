//! Weather prediction models
//!
//! Every model derives a one-day-ahead forecast from a window of the most
//! recent historical records. Windows are borrowed from the
//! [`WeatherHistory`] at construction time and never re-queried, so a
//! model's outputs are fixed once it has been built.

mod forecast;
mod model_choice;
mod simple_prediction;
mod sophisticated_prediction;
mod yesterdays_weather;

use domain::{DomainError, WeatherHistory, WeatherRecord};

pub use forecast::Forecast;
pub use model_choice::{ModelChoice, ModelKind};
pub use simple_prediction::SimplePrediction;
pub use sophisticated_prediction::{PressureTrend, SophisticatedPrediction};
pub use yesterdays_weather::YesterdaysWeather;

/// Upper bound on the number of days a multi-day model will look back
pub const MAX_PREDICTION_DAYS: usize = 28;

/// Forecast capabilities shared by every prediction model
pub trait WeatherPrediction: Send + Sync {
    /// Display name of the model
    fn name(&self) -> &'static str;

    /// Number of days of history the prediction is based on
    fn number_days(&self) -> usize;

    /// Percentage chance of rain
    fn chance_of_rain(&self) -> i32;

    /// Expected high temperature
    fn high_temperature(&self) -> f64;

    /// Expected low temperature
    fn low_temperature(&self) -> f64;

    /// Expected relative humidity (percent)
    fn humidity(&self) -> i32;

    /// Expected cloud cover (0-9 scale)
    fn cloud_cover(&self) -> i32;

    /// Expected average wind speed
    fn wind_speed(&self) -> f64;
}

/// Clamp a requested day count to `1..=MAX_PREDICTION_DAYS`
pub(crate) fn clamp_days(requested: usize) -> Result<usize, DomainError> {
    if requested == 0 {
        return Err(DomainError::InvalidDayCount(requested));
    }
    Ok(requested.min(MAX_PREDICTION_DAYS))
}

/// Borrow the most recent `days` records, failing on an empty history
pub(crate) fn capture_window(
    history: &WeatherHistory,
    days: usize,
) -> Result<&[WeatherRecord], DomainError> {
    if history.is_empty() {
        return Err(DomainError::EmptyHistory);
    }
    Ok(history.recent(days))
}

/// Arithmetic mean of one measurement across a non-empty window
pub(crate) fn window_mean(window: &[WeatherRecord], field: impl Fn(&WeatherRecord) -> f64) -> f64 {
    let total: f64 = window.iter().map(field).sum();
    total / window.len() as f64
}

/// Round half to even, the convention used for every integral forecast value
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn round_half_even(value: f64) -> i32 {
    value.round_ties_even() as i32
}
