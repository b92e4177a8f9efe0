//! Error types for the outage-forecast crate

use thiserror::Error;

/// Custom error types for the outage-forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// The historical record set is too small to forecast from
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error related to data validation or processing
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error from serialization operations
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;
