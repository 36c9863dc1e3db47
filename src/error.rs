//! Error types for the duty pay engine.
//!
//! The calculation core itself cannot fail; these errors come from the
//! configuration layer and from input validation at the boundary.

use thiserror::Error;

/// The main error type for the duty pay engine.
///
/// # Example
///
/// ```
/// use duty_pay_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rules.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rules.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// A rule configuration value is out of range.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A duty row could not be turned into a duty entry.
    #[error("Invalid duty entry at row {row}: {message}")]
    InvalidDutyEntry {
        /// Zero-based position of the row in its source.
        row: usize,
        /// A description of what made the row invalid.
        message: String,
    },
}

impl EngineError {
    pub(crate) fn invalid_config(field: &str, message: impl Into<String>) -> Self {
        EngineError::InvalidConfig {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
