//! Error types for Eagle board file operations.

use std::io;
use std::num::ParseFloatError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for Eagle board operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// Errors that can occur while loading a board and extracting test points.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Failed to open or read the file.
    #[error("Failed to read file: {path}")]
    FileRead {
        /// Path to the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The XML reader rejected the input.
    #[error("Malformed XML: {source}")]
    Xml {
        /// Underlying XML error.
        #[from]
        source: quick_xml::Error,
    },

    /// The input is not a well-formed XML document.
    #[error("Malformed XML: {message}")]
    Malformed {
        /// Description of what's wrong.
        message: String,
    },

    /// The document is valid XML but has no `drawing/board` section.
    #[error("Not an Eagle board file: no board section found")]
    NotABoard,

    /// A test point element lacks a position attribute.
    #[error("Test point '{element}' has no '{axis}' attribute")]
    MissingPosition {
        /// Name of the offending element.
        element: String,
        /// Attribute that is missing (`x` or `y`).
        axis: &'static str,
    },

    /// A test point position is not a number.
    #[error("Test point '{element}' has invalid '{axis}' value '{value}'")]
    InvalidCoordinate {
        /// Name of the offending element.
        element: String,
        /// Attribute that failed to parse (`x` or `y`).
        axis: &'static str,
        /// Raw attribute value.
        value: String,
        /// Underlying parse error.
        #[source]
        source: ParseFloatError,
    },

    /// A test point position parsed to NaN or infinity.
    #[error("Test point '{element}' has non-finite '{axis}' value '{value}'")]
    NonFiniteCoordinate {
        /// Name of the offending element.
        element: String,
        /// Attribute holding the value (`x` or `y`).
        axis: &'static str,
        /// Raw attribute value.
        value: String,
    },
}

/// Broad classification of a [`BoardError`], used to pick a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardErrorKind {
    /// The file could not be read.
    Io,
    /// The file is not parseable XML.
    InputFormat,
    /// The file is XML but not a board.
    NotABoard,
    /// A test point carries missing or unusable position data.
    DataMalformation,
}

impl BoardError {
    /// Creates a file read error.
    pub fn file_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Creates a malformed document error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    /// Returns the category this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> BoardErrorKind {
        match self {
            Self::FileRead { .. } => BoardErrorKind::Io,
            Self::Xml { .. } | Self::Malformed { .. } => BoardErrorKind::InputFormat,
            Self::NotABoard => BoardErrorKind::NotABoard,
            Self::MissingPosition { .. }
            | Self::InvalidCoordinate { .. }
            | Self::NonFiniteCoordinate { .. } => BoardErrorKind::DataMalformation,
        }
    }
}
