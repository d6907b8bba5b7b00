//! Prediction model selection

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use domain::{DomainError, WeatherHistory};

use super::{SimplePrediction, SophisticatedPrediction, WeatherPrediction, YesterdaysWeather};

/// Which prediction model to use, without its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    /// Tomorrow looks like yesterday
    Yesterday,
    /// Plain averages over several days
    Simple,
    /// Averages adjusted by the pressure trend
    #[default]
    Sophisticated,
}

impl ModelKind {
    /// All models in menu order
    pub const ALL: [Self; 3] = [Self::Yesterday, Self::Simple, Self::Sophisticated];

    /// Position in the interactive menu (1-based)
    #[must_use]
    pub const fn menu_number(self) -> u8 {
        match self {
            Self::Yesterday => 1,
            Self::Simple => 2,
            Self::Sophisticated => 3,
        }
    }

    /// Human-readable menu label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Yesterday => "Yesterday's weather.",
            Self::Simple => "Simple prediction.",
            Self::Sophisticated => "Sophisticated prediction.",
        }
    }

    /// Whether the model takes a number of days
    #[must_use]
    pub const fn uses_days(self) -> bool {
        !matches!(self, Self::Yesterday)
    }

    /// Attach a day count (ignored by the yesterday model)
    #[must_use]
    pub const fn with_days(self, days: usize) -> ModelChoice {
        match self {
            Self::Yesterday => ModelChoice::Yesterday,
            Self::Simple => ModelChoice::Simple { days },
            Self::Sophisticated => ModelChoice::Sophisticated { days },
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yesterday => write!(f, "yesterday"),
            Self::Simple => write!(f, "simple"),
            Self::Sophisticated => write!(f, "sophisticated"),
        }
    }
}

impl FromStr for ModelKind {
    type Err = DomainError;

    /// Accepts menu numbers (`1`-`3`) or model names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "yesterday" | "yesterdays" => Ok(Self::Yesterday),
            "2" | "simple" => Ok(Self::Simple),
            "3" | "sophisticated" => Ok(Self::Sophisticated),
            other => Err(DomainError::InvalidModelChoice(format!(
                "'{other}'. Use 1-3 or yesterday, simple, sophisticated"
            ))),
        }
    }
}

/// A fully parameterized prediction model selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "lowercase")]
pub enum ModelChoice {
    /// Yesterday's weather
    Yesterday,
    /// Simple average over `days` days
    Simple { days: usize },
    /// Pressure-adjusted average over `days` days
    Sophisticated { days: usize },
}

impl ModelChoice {
    #[must_use]
    pub const fn kind(&self) -> ModelKind {
        match self {
            Self::Yesterday => ModelKind::Yesterday,
            Self::Simple { .. } => ModelKind::Simple,
            Self::Sophisticated { .. } => ModelKind::Sophisticated,
        }
    }

    /// Build the selected model over `history`
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyHistory` or `DomainError::InvalidDayCount`
    /// when the model's preconditions are not met.
    pub fn build<'a>(
        &self,
        history: &'a WeatherHistory,
    ) -> Result<Box<dyn WeatherPrediction + 'a>, DomainError> {
        let model: Box<dyn WeatherPrediction + 'a> = match *self {
            Self::Yesterday => Box::new(YesterdaysWeather::new(history)?),
            Self::Simple { days } => Box::new(SimplePrediction::new(history, days)?),
            Self::Sophisticated { days } => Box::new(SophisticatedPrediction::new(history, days)?),
        };
        Ok(model)
    }
}

impl fmt::Display for ModelChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yesterday => write!(f, "yesterday"),
            Self::Simple { days } => write!(f, "simple ({days} days)"),
            Self::Sophisticated { days } => write!(f, "sophisticated ({days} days)"),
        }
    }
}
