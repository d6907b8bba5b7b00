//! Application services - Use case implementations

mod advisability_service;
mod event_decision;
pub mod prediction;

pub use advisability_service::AdvisabilityService;
pub use event_decision::{AdvisabilityReport, EventDecision, MAX_ADVISABILITY, MIN_ADVISABILITY};
pub use prediction::{
    Forecast, MAX_PREDICTION_DAYS, ModelChoice, ModelKind, PressureTrend, SimplePrediction,
    SophisticatedPrediction, WeatherPrediction, YesterdaysWeather,
};
