//! Error types for the stride_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for stride_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Activity code has no registered calculator
    #[error("Unsupported activity type: {0:?}")]
    UnsupportedActivity(String),

    /// Reading count does not match the activity's arity
    #[error("Malformed readings for {code}: expected {expected} values, got {actual}")]
    MalformedReadings {
        code: String,
        expected: usize,
        actual: usize,
    },

    /// A reading cannot be bound to its field
    #[error("Invalid reading for {field}: {value}")]
    InvalidReading { field: &'static str, value: f64 },

    /// A formula divisor was zero (duration or height)
    #[error("Division by zero: {0} must be non-zero")]
    DivisionByZero(&'static str),

    /// A computed metric is infinite or NaN
    #[error("Non-finite {metric}: {value}")]
    NonFiniteMetric { metric: &'static str, value: f64 },

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registry validation error
    #[error("Registry validation error: {0}")]
    RegistryValidation(String),
}
