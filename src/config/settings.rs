//! Settings structures.
//!
//! [`Config`] maps directly to the JSON settings file format. [`Settings`] is
//! the resolved value the check runs with.

use serde::Deserialize;

use crate::clearance::Comparison;
use crate::error::ConfigError;

/// Root structure of the JSON settings file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Optional JSON schema reference (ignored during parsing).
    #[serde(rename = "$schema", default)]
    _schema: Option<String>,

    /// Optional comment field (ignored during parsing).
    #[serde(rename = "_comment", default)]
    _comment: Option<String>,

    /// Clearance limit in board units. `0` disables the check.
    #[serde(default)]
    pub limit: Option<f64>,

    /// Comparison direction.
    #[serde(default)]
    pub comparison: Option<Comparison>,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Validates the settings file.
    ///
    /// # Errors
    ///
    /// Returns an error if any validation checks fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(limit) = self.limit {
            validate_limit(limit)?;
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Invalid log level '{}'. Must be one of: {}",
                    self.logging.level,
                    valid_levels.join(", ")
                ),
            });
        }
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level used when no `-v` flag is given (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "error".to_string()
}

/// Resolved settings for one clearance check.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Settings {
    /// Clearance limit, or `None` if the check is disabled.
    pub limit: Option<f64>,
    /// Comparison direction applied against the limit.
    pub comparison: Comparison,
}

impl Settings {
    /// Creates settings from a raw limit value.
    ///
    /// A limit of exactly `0` disables the check.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if `limit` is negative or not
    /// finite.
    pub fn new(limit: f64, comparison: Comparison) -> Result<Self, ConfigError> {
        validate_limit(limit)?;
        Ok(Self {
            limit: (limit != 0.0).then_some(limit),
            comparison,
        })
    }
}

fn validate_limit(limit: f64) -> Result<(), ConfigError> {
    if !limit.is_finite() {
        return Err(ConfigError::ValidationError {
            message: format!("limit must be a finite number, got {limit}"),
        });
    }
    if limit < 0.0 {
        return Err(ConfigError::ValidationError {
            message: format!("limit must not be negative, got {limit}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let json = r"{}";
        let config: Config = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.limit, None);
        assert_eq!(config.comparison, None);
    }

    #[test]
    fn parse_full_config() {
        let json = r#"{
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "_comment": "Fixture clearance for the test adapter",
            "limit": 2.54,
            "comparison": "at-least",
            "logging": {
                "level": "info"
            }
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_ok());
        assert!((config.limit.unwrap() - 2.54).abs() < f64::EPSILON);
        assert_eq!(config.comparison, Some(Comparison::AtLeast));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn logging_config_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "error");
    }

    #[test]
    fn reject_invalid_log_level() {
        let json = r#"{ "logging": { "level": "loud" } }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn reject_unknown_comparison() {
        let json = r#"{ "comparison": "greater" }"#;
        let result: Result<Config, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn reject_unknown_fields() {
        let json = r#"{
            "unknown_field": "value"
        }"#;

        let result: Result<Config, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn zero_limit_disables_check() {
        let settings = Settings::new(0.0, Comparison::AtLeast).unwrap();
        assert_eq!(settings.limit, None);
    }

    #[test]
    fn positive_limit_is_kept() {
        let settings = Settings::new(0.5, Comparison::AtMost).unwrap();
        assert_eq!(settings.limit, Some(0.5));
        assert_eq!(settings.comparison, Comparison::AtMost);
    }

    #[test]
    fn reject_negative_limit() {
        assert!(Settings::new(-0.1, Comparison::AtLeast).is_err());
    }

    #[test]
    fn reject_non_finite_limit() {
        assert!(Settings::new(f64::NAN, Comparison::AtLeast).is_err());
        assert!(Settings::new(f64::INFINITY, Comparison::AtLeast).is_err());
    }
}
