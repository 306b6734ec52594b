//! Error types for eagle-tp-clearance configuration.
//!
//! Board loading errors live in [`crate::eagle::error`].

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or validating settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Settings file could not be read.
    #[error("failed to read settings file: {path}")]
    ReadError {
        /// Path to the settings file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Settings file could not be parsed.
    #[error("failed to parse settings file: {path}")]
    ParseError {
        /// Path to the settings file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Settings file not found.
    #[error("settings file not found: {path}")]
    NotFound {
        /// Path where the settings file was expected.
        path: PathBuf,
    },

    /// Settings validation failed.
    #[error("settings validation failed: {message}")]
    ValidationError {
        /// Description of the validation failure.
        message: String,
    },
}
