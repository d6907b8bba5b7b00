//! CSV weather history adapter - Implements WeatherHistoryPort over a file
//!
//! Expected header:
//!
//! ```text
//! date,rainfall,high_temperature,low_temperature,humidity,cloud_cover,average_wind_speed,maximum_wind_speed,wind_direction,air_pressure
//! ```
//!
//! Rows are chronological with the most recent day last.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use application::error::ApplicationError;
use application::ports::WeatherHistoryPort;
use csv::StringRecord;
use domain::{
    CloudCover, DomainError, TemperatureRange, WeatherHistory, WeatherRecord, Wind, WindDirection,
};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

/// Columns every history file must provide
pub const REQUIRED_COLUMNS: [&str; 10] = [
    "date",
    "rainfall",
    "high_temperature",
    "low_temperature",
    "humidity",
    "cloud_cover",
    "average_wind_speed",
    "maximum_wind_speed",
    "wind_direction",
    "air_pressure",
];

/// One raw CSV row before domain validation
#[derive(Debug, Deserialize)]
struct CsvRow {
    date: u32,
    rainfall: f64,
    high_temperature: f64,
    low_temperature: f64,
    humidity: u8,
    cloud_cover: u8,
    average_wind_speed: f64,
    maximum_wind_speed: f64,
    wind_direction: String,
    air_pressure: f64,
}

impl TryFrom<CsvRow> for WeatherRecord {
    type Error = DomainError;

    fn try_from(row: CsvRow) -> Result<Self, Self::Error> {
        Self::new(
            row.date,
            row.rainfall,
            TemperatureRange::new(row.high_temperature, row.low_temperature)?,
            row.humidity,
            CloudCover::new(row.cloud_cover)?,
            Wind::new(
                row.average_wind_speed,
                row.maximum_wind_speed,
                WindDirection::new(row.wind_direction),
            )?,
            row.air_pressure,
        )
    }
}

/// Weather history stored in a CSV file
#[derive(Debug, Clone)]
pub struct CsvWeatherHistory {
    path: PathBuf,
}

impl CsvWeatherHistory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse a history from any CSV source
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Data` naming the 1-based line of the first
    /// row that cannot be parsed or fails record validation.
    pub fn read_from<R: Read>(source: R) -> Result<WeatherHistory, ApplicationError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);

        let headers: StringRecord = reader
            .headers()
            .map_err(|e| ApplicationError::data(format!("Failed to read CSV header: {e}")))?
            .iter()
            .map(normalize_header_name)
            .collect();
        ensure_required_columns(&headers)?;

        let mut history = WeatherHistory::new();
        for (idx, result) in reader.records().enumerate() {
            // records() starts after the header, lines are 1-based
            let fallback_line = idx as u64 + 2;

            let record = result.map_err(|e| {
                let line = e.position().map_or(fallback_line, csv::Position::line);
                ApplicationError::data(format!("line {line}: {e}"))
            })?;
            let line = record.position().map_or(fallback_line, csv::Position::line);

            let row: CsvRow = record
                .deserialize(Some(&headers))
                .map_err(|e| ApplicationError::data(format!("line {line}: {e}")))?;
            let weather = WeatherRecord::try_from(row)
                .map_err(|e| ApplicationError::data(format!("line {line}: {e}")))?;

            history.push(weather);
        }

        Ok(history)
    }
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports may prefix the first header with a BOM.
    name.trim().trim_start_matches('\u{feff}').to_lowercase()
}

fn ensure_required_columns(headers: &StringRecord) -> Result<(), ApplicationError> {
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|column| !headers.iter().any(|h| h == *column))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ApplicationError::data(format!(
            "line 1: missing column(s): {}",
            missing.join(", ")
        )))
    }
}

impl WeatherHistoryPort for CsvWeatherHistory {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<WeatherHistory, ApplicationError> {
        let file = File::open(&self.path).map_err(|e| {
            warn!(error = %e, "Cannot open weather history");
            ApplicationError::data(format!(
                "Failed to open weather history '{}': {e}",
                self.path.display()
            ))
        })?;

        let history = Self::read_from(file)?;
        debug!(records = history.len(), "Parsed weather history");
        Ok(history)
    }

    fn source_name(&self) -> String {
        self.path.display().to_string()
    }
}
