//! Error types for the airguard library.

use thiserror::Error;

/// Result type alias for airguard operations.
pub type Result<T> = std::result::Result<T, AirGuardError>;

/// Errors that can occur during AQI computation and forecasting.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AirGuardError {
    /// A concentration value is negative, NaN or infinite.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Training series is too short for the requested window.
    #[error("insufficient data: need at least {needed} observations, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Forecast requested before a successful training call.
    #[error("forecaster must be trained before forecasting")]
    NotTrained,

    /// Seed passed to forecasting is shorter than the model window.
    #[error("insufficient seed: need at least {needed} recent values, got {got}")]
    InsufficientSeed { needed: usize, got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Dimension mismatch between data structures.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Timestamp-related error.
    #[error("timestamp error: {0}")]
    TimestampError(String),

    /// Computation error (e.g., numerical issues).
    #[error("computation error: {0}")]
    ComputationError(String),
}
