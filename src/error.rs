//! Error types for salary processing.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Salary calculations themselves cannot fail; errors only arise when writing
//! output or loading a scenario configuration.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use solid_payroll::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/demo.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/demo.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Writing a line to the output sink failed.
    #[error("Failed to write output: {message}")]
    Output {
        /// A description of the write failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::Output {
            message: err.to_string(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
