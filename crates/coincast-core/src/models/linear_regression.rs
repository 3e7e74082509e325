//! Linear trend model fitted with ordinary least squares.
//!
//! The price is modelled as `y = intercept + slope * x`. When fitted
//! through [`Predictor::fit`] the x axis is the observation index; the
//! coincast application instead fits on raw timestamps (seconds since
//! epoch) via [`LinearRegression::fit_xy`], so a prediction can be read
//! off at any timestamp of the input window.
//!
//! Sums are computed on mean-centered values. With epoch-second x values
//! the raw OLS normal equations lose most of their significant digits to
//! cancellation; centering keeps the slope exact for collinear input.

use serde::{Deserialize, Serialize};

use crate::error::{ForecastError, Result};
use crate::models::Predictor;

/// Ordinary least squares line fit over a price series
///
/// # Example
///
/// ```rust
/// use coincast_core::models::{linear_regression::LinearRegression, Predictor};
///
/// let closes = vec![10.0, 12.0, 14.0, 16.0, 18.0];
/// let mut model = LinearRegression::new();
/// model.fit(&closes).unwrap();
///
/// assert!((model.slope() - 2.0).abs() < 1e-9);
/// let next = model.predict(1).unwrap();
/// assert!((next[0] - 20.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinearRegression {
    intercept: f64,
    slope: f64,
    /// R-squared of the fit
    r_squared: f64,
    /// x values the model was fitted on
    xs: Vec<f64>,
    fitted: bool,
}

impl LinearRegression {
    /// Create a new unfitted model
    pub fn new() -> Self {
        Self::default()
    }

    /// Slope of the fitted line, in y units per x unit
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Y-intercept of the fitted line
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Coefficient of determination of the fit
    pub fn r_squared(&self) -> f64 {
        self.r_squared
    }

    /// Fit the line through explicit (x, y) pairs
    ///
    /// `x` and `y` must be the same length and contain at least two
    /// points with distinct x values.
    pub fn fit_xy(&mut self, x: &[f64], y: &[f64]) -> Result<()> {
        if x.len() != y.len() {
            return Err(ForecastError::InvalidData(format!(
                "x and y lengths differ: {} vs {}",
                x.len(),
                y.len()
            )));
        }
        if x.len() < 2 {
            return Err(ForecastError::InsufficientData {
                required: 2,
                actual: x.len(),
            });
        }
        if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
            return Err(ForecastError::InvalidData(
                "series contains NaN or infinite values".to_string(),
            ));
        }

        let n = x.len() as f64;
        let x_mean = x.iter().sum::<f64>() / n;
        let y_mean = y.iter().sum::<f64>() / n;

        let mut sxx = 0.0;
        let mut sxy = 0.0;
        for (&xi, &yi) in x.iter().zip(y.iter()) {
            let dx = xi - x_mean;
            sxx += dx * dx;
            sxy += dx * (yi - y_mean);
        }

        if sxx.abs() < 1e-10 {
            return Err(ForecastError::NumericalError(
                "x values are all identical".to_string(),
            ));
        }

        self.slope = sxy / sxx;
        self.intercept = y_mean - self.slope * x_mean;

        let ss_tot: f64 = y.iter().map(|&yi| (yi - y_mean).powi(2)).sum();
        let ss_res: f64 = x
            .iter()
            .zip(y.iter())
            .map(|(&xi, &yi)| (yi - self.value_at(xi)).powi(2))
            .sum();
        self.r_squared = if ss_tot > 1e-10 {
            1.0 - ss_res / ss_tot
        } else {
            1.0
        };

        self.xs = x.to_vec();
        self.fitted = true;
        Ok(())
    }

    /// Evaluate the fitted line at `x`
    pub fn value_at(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Mean spacing between consecutive fitted x values, used to step
    /// forward when extrapolating
    fn x_step(&self) -> f64 {
        let n = self.xs.len();
        if n < 2 {
            return 1.0;
        }
        (self.xs[n - 1] - self.xs[0]) / (n - 1) as f64
    }
}

impl Predictor for LinearRegression {
    fn fit(&mut self, data: &[f64]) -> Result<()> {
        let idx: Vec<f64> = (0..data.len()).map(|i| i as f64).collect();
        self.fit_xy(&idx, data)
    }

    fn predict(&self, steps: usize) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(ForecastError::NotFitted);
        }

        let last = match self.xs.last() {
            Some(&x) => x,
            None => return Err(ForecastError::NotFitted),
        };
        let step = self.x_step();
        Ok((1..=steps)
            .map(|i| self.value_at(last + step * i as f64))
            .collect())
    }

    fn fitted_values(&self) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(ForecastError::NotFitted);
        }
        Ok(self.xs.iter().map(|&x| self.value_at(x)).collect())
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}
