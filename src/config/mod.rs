//! Settings loading and resolution.
//!
//! Settings are built once at startup and passed down to the evaluator.
//! Values are taken from, in increasing order of precedence:
//!
//! 1. Built-in defaults (no limit, `at-least` comparison)
//! 2. An optional JSON settings file given with `--config`
//! 3. Command-line flags
//!
//! There is no default settings file location and no environment variable
//! configuration.
//!
//! # Example Settings File
//!
//! ```json
//! {
//!     "limit": 1.27,
//!     "comparison": "at-least",
//!     "logging": { "level": "warn" }
//! }
//! ```

mod settings;

pub use settings::{Config, LoggingConfig, Settings};

use std::path::Path;

use crate::clearance::Comparison;
use crate::error::ConfigError;

/// Loads and parses a settings file.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist or cannot be read
/// - The JSON is malformed or contains unknown fields
/// - The values fail validation
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config: Config = serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;

    config.validate()?;

    Ok(config)
}

/// Combines the settings file with command-line overrides.
///
/// A limit of `0` from either source disables the check.
///
/// # Errors
///
/// Returns [`ConfigError::ValidationError`] if the resulting limit is
/// negative or not finite.
pub fn resolve_settings(
    file: Option<&Config>,
    limit: Option<f64>,
    comparison: Option<Comparison>,
) -> Result<Settings, ConfigError> {
    let limit = limit
        .or_else(|| file.and_then(|f| f.limit))
        .unwrap_or(0.0);
    let comparison = comparison
        .or_else(|| file.and_then(|f| f.comparison))
        .unwrap_or_default();

    Settings::new(limit, comparison)
}
