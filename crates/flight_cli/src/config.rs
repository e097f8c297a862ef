//! CLI configuration management.
//!
//! Handles loading of `flight.toml` with environment variable override
//! support.
//!
//! ```toml
//! log_level = "info"
//!
//! [consolidation]
//! adjacency = { mode = "date_window", grace_days = 1 }
//! ```

use flight_schedule::consolidation::{Adjacency, ConsolidationConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Log levels accepted in `log_level`.
const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightConfig {
    /// Log level used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Week consolidation settings
    #[serde(default)]
    pub consolidation: ConsolidationConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            consolidation: ConsolidationConfig::default(),
        }
    }
}

impl FlightConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or return the default when it is missing
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Apply environment variable overrides
    ///
    /// - `FLIGHT_LOG_LEVEL` replaces `log_level`
    /// - `FLIGHT_GRACE_DAYS` switches to date-window adjacency with that tolerance
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(
            std::env::var("FLIGHT_LOG_LEVEL").ok().as_deref(),
            std::env::var("FLIGHT_GRACE_DAYS").ok().as_deref(),
        )
    }

    /// Apply override values given as text, as read from the environment
    ///
    /// A grace value that is not a whole number of days is a validation error.
    pub fn with_overrides(
        mut self,
        log_level: Option<&str>,
        grace_days: Option<&str>,
    ) -> Result<Self, ConfigError> {
        if let Some(log_level) = log_level {
            self.log_level = log_level.to_string();
        }

        if let Some(text) = grace_days {
            let grace_days = text.trim().parse().map_err(|_| {
                ConfigError::Validation(vec![format!(
                    "Invalid FLIGHT_GRACE_DAYS '{}'. Expected a whole number of days",
                    text
                )])
            })?;
            self.consolidation = self
                .consolidation
                .with_adjacency(Adjacency::DateWindow { grace_days });
        }

        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ));
        }

        if let Err(e) = self.consolidation.validate() {
            errors.push(format!("consolidation: {}", e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from file (or defaults) with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override()?;
        config.validate()?;
        Ok(config)
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Configuration error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),

    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = FlightConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.consolidation.adjacency, Adjacency::Index);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml() {
        let config = FlightConfig::from_toml(
            r#"
            log_level = "debug"

            [consolidation]
            adjacency = { mode = "date_window", grace_days = 2 }
            "#,
        )
        .unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(
            config.consolidation.adjacency,
            Adjacency::DateWindow { grace_days: 2 }
        );
    }

    #[test]
    fn test_from_toml_defaults_missing_fields() {
        let config = FlightConfig::from_toml("").unwrap();
        assert_eq!(config, FlightConfig::default());
    }

    #[test]
    fn test_parse_error() {
        let result = FlightConfig::from_toml("log_level = ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"warn\"").unwrap();
        let config = FlightConfig::load(file.path()).unwrap();
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        assert!(matches!(FlightConfig::load(&path), Err(ConfigError::Io(_))));
        assert_eq!(FlightConfig::load_or_default(&path).unwrap(), FlightConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = FlightConfig::default()
            .with_overrides(Some("debug"), Some(" 1 "))
            .unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(
            config.consolidation.adjacency,
            Adjacency::DateWindow { grace_days: 1 }
        );

        let unchanged = FlightConfig::default().with_overrides(None, None).unwrap();
        assert_eq!(unchanged, FlightConfig::default());
    }

    #[test]
    fn test_invalid_grace_override() {
        for text in ["two", "-1", ""] {
            let result = FlightConfig::default().with_overrides(None, Some(text));
            if let Err(ConfigError::Validation(errors)) = result {
                assert!(errors[0].contains("FLIGHT_GRACE_DAYS"));
            } else {
                panic!("Expected validation error for {:?}", text);
            }
        }
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let config = FlightConfig {
            log_level: "loud".to_string(),
            ..FlightConfig::default()
        };

        if let Err(ConfigError::Validation(errors)) = config.validate() {
            assert!(errors.iter().any(|e| e.contains("log_level")));
        } else {
            panic!("Expected validation error");
        }
    }

    #[test]
    fn test_validate_valid_log_levels() {
        for level in ["trace", "debug", "info", "warn", "error", "INFO"] {
            let config = FlightConfig {
                log_level: level.to_string(),
                ..FlightConfig::default()
            };
            assert!(config.validate().is_ok(), "Log level '{}' should be valid", level);
        }
    }

    #[test]
    fn test_validate_grace_window() {
        let config = FlightConfig {
            consolidation: ConsolidationConfig::new()
                .with_adjacency(Adjacency::DateWindow { grace_days: 7 }),
            ..FlightConfig::default()
        };

        if let Err(ConfigError::Validation(errors)) = config.validate() {
            assert_eq!(errors.len(), 1);
            assert!(errors[0].contains("Grace window"));
        } else {
            panic!("Expected validation error");
        }
    }

    #[test]
    fn test_toml_round_trip() {
        let config = FlightConfig {
            log_level: "debug".to_string(),
            consolidation: ConsolidationConfig::new()
                .with_adjacency(Adjacency::DateWindow { grace_days: 1 }),
        };
        let text = config.to_toml().unwrap();
        assert_eq!(FlightConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::Validation(vec!["Error 1".to_string(), "Error 2".to_string()]);
        assert_eq!(error.to_string(), "Validation errors: Error 1; Error 2");
    }
}
