//! Application configuration
//!
//! Loaded in layers: built-in defaults, then an optional `config.toml`,
//! then `EVENTCAST_*` environment variables (e.g.
//! `EVENTCAST_PREDICTION__DEFAULT_DAYS=14`).

use std::path::PathBuf;

use application::{ApplicationError, ModelKind};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Where historical weather data is read from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConfig {
    /// CSV file holding the weather history
    #[serde(default = "default_history_path")]
    pub history_path: PathBuf,
}

fn default_history_path() -> PathBuf {
    PathBuf::from("weather_data.csv")
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            history_path: default_history_path(),
        }
    }
}

/// Defaults for model selection when the caller does not choose
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionConfig {
    /// Model used when none is given on the command line
    #[serde(default)]
    pub default_model: ModelKind,

    /// Days of history used by the multi-day models
    #[serde(default = "default_days")]
    pub default_days: usize,
}

const fn default_days() -> usize {
    7
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            default_model: ModelKind::default(),
            default_days: default_days(),
        }
    }
}

/// Log output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub filter: String,

    /// Emit structured JSON instead of human-readable lines
    #[serde(default)]
    pub json: bool,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Weather data source
    #[serde(default)]
    pub data: DataConfig,

    /// Prediction defaults
    #[serde(default)]
    pub prediction: PredictionConfig,

    /// Logging
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and the environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a named file (extension optional) and the environment
    pub fn load_from(file: &str) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("data.history_path", "weather_data.csv")?
            .set_default("prediction.default_model", "sophisticated")?
            .set_default("prediction.default_days", 7)?
            .set_default("logging.filter", "warn")?
            .set_default("logging.json", false)?
            // Load from file if exists
            .add_source(config::File::with_name(file).required(false))
            // Override with environment variables (e.g., EVENTCAST_LOGGING__JSON)
            .add_source(
                config::Environment::with_prefix("EVENTCAST")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Check values the type system cannot
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` naming the offending key.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        if self.prediction.default_days == 0 {
            return Err(ApplicationError::Configuration(
                "prediction.default_days must be at least 1".to_string(),
            ));
        }
        if self.logging.filter.trim().is_empty() {
            return Err(ApplicationError::Configuration(
                "logging.filter must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn write_config(dir: &TempDir, contents: &str) -> String {
        let path = dir.path().join("eventcast.toml");
        fs::write(&path, contents).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.data.history_path, PathBuf::from("weather_data.csv"));
        assert_eq!(config.prediction.default_model, ModelKind::Sophisticated);
        assert_eq!(config.prediction.default_days, 7);
        assert_eq!(config.logging.filter, "warn");
        assert!(!config.logging.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent");
        let config = AppConfig::load_from(&missing.to_string_lossy()).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let file = write_config(
            &dir,
            r#"
[data]
history_path = "/srv/weather/history.csv"

[prediction]
default_model = "simple"
default_days = 14
"#,
        );

        let config = AppConfig::load_from(&file).unwrap();
        assert_eq!(
            config.data.history_path,
            PathBuf::from("/srv/weather/history.csv")
        );
        assert_eq!(config.prediction.default_model, ModelKind::Simple);
        assert_eq!(config.prediction.default_days, 14);
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn unknown_model_is_rejected() {
        let dir = TempDir::new().unwrap();
        let file = write_config(&dir, "[prediction]\ndefault_model = \"crystal-ball\"\n");
        assert!(AppConfig::load_from(&file).is_err());
    }

    #[test]
    fn validate_rejects_zero_days() {
        let mut config = AppConfig::default();
        config.prediction.default_days = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("default_days"));
    }

    #[test]
    fn validate_rejects_blank_filter() {
        let mut config = AppConfig::default();
        config.logging.filter = "  ".to_string();
        assert!(matches!(
            config.validate(),
            Err(ApplicationError::Configuration(_))
        ));
    }

    #[test]
    fn serializes_to_toml() {
        let rendered = toml::to_string(&AppConfig::default()).unwrap();
        assert!(rendered.contains("history_path = \"weather_data.csv\""));
        assert!(rendered.contains("default_model = \"sophisticated\""));
    }
}
