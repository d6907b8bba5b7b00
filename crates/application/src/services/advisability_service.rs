//! Advisability service
//!
//! Owns a loaded weather history and answers forecast and advisability
//! questions against it with any of the prediction models.

use tracing::{debug, info, instrument};

use domain::{DomainError, Event, WeatherHistory};

use super::event_decision::{AdvisabilityReport, EventDecision};
use super::prediction::{Forecast, ModelChoice, ModelKind};
use crate::error::ApplicationError;
use crate::ports::WeatherHistoryPort;

/// Service for scoring events against predicted weather
#[derive(Debug, Clone)]
pub struct AdvisabilityService {
    history: WeatherHistory,
}

impl AdvisabilityService {
    /// Create a service over an already loaded history
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyHistory` if the history holds no records.
    pub fn new(history: WeatherHistory) -> Result<Self, ApplicationError> {
        if history.is_empty() {
            return Err(DomainError::EmptyHistory.into());
        }
        Ok(Self { history })
    }

    /// Load the history through a port and create the service
    #[instrument(skip(port), fields(source = %port.source_name()))]
    pub fn from_port(port: &dyn WeatherHistoryPort) -> Result<Self, ApplicationError> {
        let history = port.load()?;
        info!(records = history.len(), "Loaded weather history");
        Self::new(history)
    }

    /// The loaded history
    #[must_use]
    pub const fn history(&self) -> &WeatherHistory {
        &self.history
    }

    /// Predict tomorrow's weather with the chosen model
    #[instrument(skip(self))]
    pub fn forecast(&self, choice: ModelChoice) -> Result<Forecast, ApplicationError> {
        let model = choice.build(&self.history)?;
        let forecast = Forecast::from_prediction(model.as_ref());
        debug!(%forecast, "Forecast computed");
        Ok(forecast)
    }

    /// Score an event against the chosen model's forecast
    #[instrument(skip(self, event), fields(event = %event.name()))]
    pub fn assess(
        &self,
        event: &Event,
        choice: ModelChoice,
    ) -> Result<AdvisabilityReport, ApplicationError> {
        let model = choice.build(&self.history)?;
        let report = EventDecision::new(event, model.as_ref()).report();
        info!(
            model = report.model,
            days = report.number_days,
            temperature_factor = report.temperature_factor,
            rain_factor = report.rain_factor,
            advisability = report.advisability,
            "Event assessed"
        );
        Ok(report)
    }

    /// Score an event against every model, in menu order
    ///
    /// `days` is passed to the multi-day models.
    pub fn compare(
        &self,
        event: &Event,
        days: usize,
    ) -> Result<Vec<AdvisabilityReport>, ApplicationError> {
        ModelKind::ALL
            .iter()
            .map(|kind| self.assess(event, kind.with_days(days)))
            .collect()
    }
}
