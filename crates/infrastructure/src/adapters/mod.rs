//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod csv_weather_history;

pub use csv_weather_history::{CsvWeatherHistory, REQUIRED_COLUMNS};
