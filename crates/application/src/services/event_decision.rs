//! Event advisability scoring
//!
//! Combines an [`Event`] with a model's forecast into a single score in
//! `[-5, 5]`: -5 is strongly inadvisable, 0 neutral, 5 strongly favourable.
//! The score is the sum of an independent temperature factor and rain
//! factor.

use std::fmt;

use serde::Serialize;

use domain::Event;

use super::prediction::{Forecast, WeatherPrediction};

/// Lowest possible advisability
pub const MIN_ADVISABILITY: f64 = -5.0;
/// Highest possible advisability
pub const MAX_ADVISABILITY: f64 = 5.0;

/// Floor applied to the rain factor
const MIN_RAIN_FACTOR: f64 = -9.0;
/// Humidity above which it feels hotter (or colder)
const MUGGY_HUMIDITY: f64 = 70.0;
const HEAT_RISK_OUTDOORS: f64 = 30.0;
const HEAT_RISK_ANYWHERE: f64 = 45.0;
const COLD_NIGHT_LOW: f64 = 5.0;
const MILD_LOW: f64 = 15.0;
const LOW_RAIN_CHANCE: i32 = 20;
const HIGH_RAIN_CHANCE: i32 = 50;
const SHELTERED_WIND_LIMIT: f64 = 5.0;
const STRONG_WIND: f64 = 15.0;

/// Move a temperature further from zero by `adjustment`
fn away_from_zero(temperature: f64, adjustment: f64) -> f64 {
    if temperature > 0.0 {
        temperature + adjustment
    } else if temperature < 0.0 {
        temperature - adjustment
    } else {
        temperature
    }
}

/// Decides how suitable the predicted weather is for an event
#[derive(Clone, Copy)]
pub struct EventDecision<'a> {
    event: &'a Event,
    model: &'a dyn WeatherPrediction,
}

impl fmt::Debug for EventDecision<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventDecision")
            .field("event", &self.event)
            .field("model", &self.model.name())
            .finish()
    }
}

impl<'a> EventDecision<'a> {
    pub const fn new(event: &'a Event, model: &'a dyn WeatherPrediction) -> Self {
        Self { event, model }
    }

    /// Temperature component of the advisability
    ///
    /// Humid air pushes both temperatures away from zero before they are
    /// tested against the heat, cold and mild-comfort bands, in that order.
    #[must_use]
    pub fn temperature_factor(&self) -> f64 {
        let humidity = f64::from(self.model.humidity());
        let adjustment = if humidity > MUGGY_HUMIDITY {
            humidity / 20.0
        } else {
            0.0
        };
        let high = away_from_zero(self.model.high_temperature(), adjustment);
        let low = away_from_zero(self.model.low_temperature(), adjustment);

        let heat_risk = (self.event.is_daytime()
            && self.event.is_outdoors()
            && high >= HEAT_RISK_OUTDOORS)
            || high >= HEAT_RISK_ANYWHERE;

        // The temperature clause only applies to evening events.
        let cold_risk = self.event.is_early_morning()
            || (self.event.is_evening() && low < COLD_NIGHT_LOW && high < HEAT_RISK_ANYWHERE);

        if heat_risk {
            let mut factor = high / -5.0 + 6.0;
            if factor < 0.0 {
                let wind_speed = self.model.wind_speed();
                if self.event.has_cover() {
                    factor += 1.0;
                }
                if wind_speed > 3.0 && wind_speed < 10.0 {
                    factor += 1.0;
                }
                if self.model.cloud_cover() > 4 {
                    factor += 1.0;
                }
            }
            factor
        } else if cold_risk {
            low / 5.0 - 1.1
        } else if low > MILD_LOW && high < HEAT_RISK_OUTDOORS {
            (high - low) / 5.0
        } else {
            0.0
        }
    }

    /// Rain component of the advisability, never below -9
    #[must_use]
    pub fn rain_factor(&self) -> f64 {
        let chance = self.model.chance_of_rain();
        let wind_speed = self.model.wind_speed();

        let mut factor = if chance < LOW_RAIN_CHANCE {
            f64::from(chance) / -5.0 + 4.0
        } else if chance > HIGH_RAIN_CHANCE {
            f64::from(chance) / -20.0 + 1.0
        } else {
            0.0
        };

        if self.event.is_outdoors() && self.event.has_cover() && wind_speed < SHELTERED_WIND_LIMIT {
            factor += 1.0;
        }

        if factor < 2.0 && wind_speed > STRONG_WIND {
            factor -= wind_speed / 15.0;
        }

        factor.max(MIN_RAIN_FACTOR)
    }

    /// Overall advisability in `[-5, 5]`
    #[must_use]
    pub fn advisability(&self) -> f64 {
        (self.temperature_factor() + self.rain_factor()).clamp(MIN_ADVISABILITY, MAX_ADVISABILITY)
    }

    /// Full breakdown of the decision
    #[must_use]
    pub fn report(&self) -> AdvisabilityReport {
        AdvisabilityReport {
            event: self.event.name().to_string(),
            model: self.model.name(),
            number_days: self.model.number_days(),
            temperature_factor: self.temperature_factor(),
            rain_factor: self.rain_factor(),
            advisability: self.advisability(),
            forecast: Forecast::from_prediction(self.model),
        }
    }
}

/// Outcome of scoring an event against one model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvisabilityReport {
    /// Event name
    pub event: String,
    /// Model used
    pub model: &'static str,
    /// Days of history the model used
    pub number_days: usize,
    /// Temperature component
    pub temperature_factor: f64,
    /// Rain component
    pub rain_factor: f64,
    /// Clamped overall score
    pub advisability: f64,
    /// Forecast the score was based on
    pub forecast: Forecast,
}

impl AdvisabilityReport {
    /// Short verdict for the score
    #[must_use]
    pub fn verdict(&self) -> &'static str {
        if self.advisability >= 2.0 {
            "go ahead"
        } else if self.advisability > -2.0 {
            "proceed with caution"
        } else {
            "reconsider"
        }
    }
}

impl fmt::Display for AdvisabilityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Based on {} model, the advisability of holding {} is {:?}",
            self.model, self.event, self.advisability
        )
    }
}
