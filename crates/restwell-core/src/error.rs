//! Core error types for restwell-core.
//!
//! This module defines the error hierarchy using thiserror. The only error
//! surfaced to the user is [`CalculationError`] with its fixed display
//! strings; everything else exists so the library layers can report precise
//! causes to each other.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for restwell-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Model-related errors
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Errors from loading or invoking a sleep model artifact.
#[derive(Error, Debug)]
pub enum ModelError {
    /// The artifact file could not be read
    #[error("Failed to read model artifact at {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The artifact content is not a valid model description
    #[error("Failed to parse model artifact: {0}")]
    ParseFailed(String),

    /// The artifact schema version is newer than this library understands
    #[error("Unsupported model schema version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    /// The artifact declares an output unit the calculator cannot consume
    #[error("Unsupported model output unit '{0}' (expected 'hours')")]
    UnsupportedUnit(String),

    /// A model input was NaN or infinite
    #[error("Non-finite model input: {feature}")]
    NonFiniteInput { feature: &'static str },

    /// The model produced a prediction the calculator cannot use
    #[error("Model produced an unusable prediction: {value}")]
    InvalidPrediction { value: f64 },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown or malformed configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Validation errors for user-supplied input values.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Value outside its documented range
    #[error("Invalid value for '{field}': {message}")]
    OutOfRange { field: &'static str, message: String },

    /// A time-of-day string that could not be parsed
    #[error("Invalid time of day '{input}': expected HH:MM")]
    InvalidTimeOfDay { input: String },
}

/// The single user-facing failure of the bedtime calculator.
///
/// Callers are expected to surface [`ERROR_TITLE`] and [`ERROR_MESSAGE`]
/// rather than the underlying cause; the source chain is kept for logs.
#[derive(Error, Debug)]
#[error("Failed to calculate bedtime: {source}")]
pub struct CalculationError {
    #[from]
    source: ModelError,
}

/// Static alert title shown when a calculation fails.
pub const ERROR_TITLE: &str = "Error";

/// Static alert message shown when a calculation fails.
pub const ERROR_MESSAGE: &str = "Sorry, there was a problem calculating your bedtime.";

impl From<CalculationError> for CoreError {
    fn from(err: CalculationError) -> Self {
        CoreError::Model(err.source)
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
