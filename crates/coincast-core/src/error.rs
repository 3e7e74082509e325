//! Error type shared by all forecasting models.

use thiserror::Error;

/// Result type alias for model operations
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur while fitting or evaluating a model
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Not enough observations for the requested model
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// A model order or hyperparameter is out of range
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Prediction was requested before `fit`
    #[error("Model must be fitted before prediction")]
    NotFitted,

    /// The input series cannot be modelled
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// A numerical computation degenerated
    #[error("Numerical error: {0}")]
    NumericalError(String),
}
