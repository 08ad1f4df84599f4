// SPDX-License-Identifier: LGPL-3.0-only

//! # Theme Error Types
//!
//! Theme resolution itself never fails. These errors cover the fallible edges:
//! reading theme configuration and parsing values coming from outside.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the theming system.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Theme with the specified name was not found.
    #[error("Theme '{name}' not found")]
    ThemeNotFound {
        /// The name of the theme that was not found.
        name: String,
    },

    /// Theme configuration file was not found.
    #[error("Theme config file not found: {path:?}")]
    ConfigFileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Error parsing a theme configuration file.
    #[error("Failed to parse theme config {path:?}: {details}")]
    ConfigParseError {
        /// The path of the file that failed to parse.
        path: PathBuf,
        /// Details about the parse error.
        details: String,
    },

    /// Invalid color format.
    #[error("Invalid color format: {0}")]
    InvalidColor(String),

    /// Brightness threshold outside of `0.0..=1.0`.
    #[error("Brightness threshold {0} is outside 0.0..=1.0")]
    InvalidBrightness(f32),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

impl ThemeError {
    /// Create a theme not found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::ThemeNotFound { name: name.into() }
    }

    /// Create a config file not found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ConfigFileNotFound { path: path.into() }
    }

    /// Create a config parse error.
    pub fn parse_error(path: impl Into<PathBuf>, details: impl Into<String>) -> Self {
        Self::ConfigParseError {
            path: path.into(),
            details: details.into(),
        }
    }
}
