//! Forecasting models.
//!
//! Each model fits a univariate series of closing prices and can produce
//! both out-of-sample forecasts and in-sample fitted values.

pub mod arima;
pub mod linear_regression;

/// Common trait for all forecasting models
pub trait Predictor {
    /// Fit the model to historical data
    fn fit(&mut self, data: &[f64]) -> crate::Result<()>;

    /// Forecast `steps` values beyond the end of the fitted series
    fn predict(&self, steps: usize) -> crate::Result<Vec<f64>>;

    /// In-sample one-step-ahead predictions, aligned one-to-one with the
    /// fitted series
    fn fitted_values(&self) -> crate::Result<Vec<f64>>;

    /// Check if the model has been fitted
    fn is_fitted(&self) -> bool;
}
