//! ARIMA (AutoRegressive Integrated Moving Average) model.
//!
//! The model differences the series `d` times to reach stationarity, fits
//! an AR(p) component by solving the Yule-Walker equations with the
//! Levinson-Durbin recursion, and estimates MA(q) terms from the residual
//! autocorrelation. The coincast application uses ARIMA(5,1,0) on hourly
//! closing prices.
//!
//! Two prediction surfaces are exposed:
//!
//! - [`Predictor::predict`] — forecasts beyond the end of the series
//! - [`Predictor::fitted_values`] — one-step-ahead in-sample predictions,
//!   aligned one-to-one with the input and reconstructed to the original
//!   scale through every differencing level
//!
//! ## Example
//!
//! ```rust
//! use coincast_core::models::{arima::Arima, Predictor};
//!
//! let closes: Vec<f64> = (1..=30).map(|x| x as f64).collect();
//! let mut model = Arima::new(1, 1, 0).unwrap();
//! model.fit(&closes).unwrap();
//! assert_eq!(model.predict(3).unwrap().len(), 3);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ForecastError, Result};
use crate::models::Predictor;

/// ARIMA(p,d,q) model over a univariate price series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arima {
    p: usize,
    d: usize,
    q: usize,
    /// AR coefficients
    phi: Vec<f64>,
    /// MA coefficients
    theta: Vec<f64>,
    /// Mean of the differenced series, used as the model constant
    mean: f64,
    /// Series as observed
    observed: Vec<f64>,
    /// Series after `d` rounds of differencing
    diffed: Vec<f64>,
    /// One-step-ahead residuals on the differenced scale
    residuals: Vec<f64>,
    /// Last value of each differencing level 0..d, for reconstruction
    level_tails: Vec<f64>,
    fitted: bool,
}

impl Arima {
    /// Create a new unfitted ARIMA model
    ///
    /// Orders are bounded: `p <= 10`, `d <= 2`, `q <= 10`.
    pub fn new(p: usize, d: usize, q: usize) -> Result<Self> {
        if p > 10 {
            return Err(ForecastError::InvalidParameter {
                name: "p".to_string(),
                reason: "AR order must be <= 10".to_string(),
            });
        }
        if d > 2 {
            return Err(ForecastError::InvalidParameter {
                name: "d".to_string(),
                reason: "differencing order must be <= 2".to_string(),
            });
        }
        if q > 10 {
            return Err(ForecastError::InvalidParameter {
                name: "q".to_string(),
                reason: "MA order must be <= 10".to_string(),
            });
        }

        Ok(Self {
            p,
            d,
            q,
            phi: vec![0.0; p],
            theta: vec![0.0; q],
            mean: 0.0,
            observed: Vec::new(),
            diffed: Vec::new(),
            residuals: Vec::new(),
            level_tails: Vec::new(),
            fitted: false,
        })
    }

    /// Model orders (p, d, q)
    pub fn orders(&self) -> (usize, usize, usize) {
        (self.p, self.d, self.q)
    }

    /// AR coefficients of the fitted model
    pub fn ar_coefficients(&self) -> &[f64] {
        &self.phi
    }

    /// MA coefficients of the fitted model
    pub fn ma_coefficients(&self) -> &[f64] {
        &self.theta
    }

    /// Successive difference levels of `data`: element 0 is the series
    /// itself, element k the k-times differenced series.
    fn difference_levels(data: &[f64], d: usize) -> Vec<Vec<f64>> {
        let mut levels = vec![data.to_vec()];
        for k in 0..d {
            let next: Vec<f64> = levels[k].windows(2).map(|w| w[1] - w[0]).collect();
            levels.push(next);
        }
        levels
    }

    /// Solve the Yule-Walker equations with the Levinson-Durbin recursion.
    fn yule_walker(data: &[f64], p: usize) -> Vec<f64> {
        if p == 0 || data.is_empty() {
            return vec![0.0; p];
        }

        let n = data.len();
        let mean = data.iter().sum::<f64>() / n as f64;

        // Autocovariances at lags 0..=p
        let mut cov = vec![0.0; p + 1];
        for (k, c) in cov.iter_mut().enumerate() {
            let mut sum = 0.0;
            for i in k..n {
                sum += (data[i] - mean) * (data[i - k] - mean);
            }
            *c = sum / n as f64;
        }

        if cov[0].abs() < 1e-12 {
            // Constant series: nothing to regress on.
            return vec![0.0; p];
        }

        let mut phi = vec![0.0; p];
        let mut prev = vec![0.0; p];
        let mut err = cov[0];

        for k in 0..p {
            let mut acc = cov[k + 1];
            for j in 0..k {
                acc -= phi[j] * cov[k - j];
            }
            let reflection = if err.abs() > 1e-12 { acc / err } else { 0.0 };

            prev[..k].copy_from_slice(&phi[..k]);
            phi[k] = reflection;
            for j in 0..k {
                phi[j] = prev[j] - reflection * prev[k - 1 - j];
            }
            err *= 1.0 - reflection * reflection;
        }

        phi
    }

    /// Estimate MA coefficients from the autocorrelation of the residuals.
    fn residual_ma(residuals: &[f64], q: usize) -> Vec<f64> {
        if q == 0 || residuals.is_empty() {
            return vec![0.0; q];
        }

        let n = residuals.len();
        let mean = residuals.iter().sum::<f64>() / n as f64;
        let var = residuals.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n as f64;

        let mut theta = vec![0.0; q];
        if var.abs() < 1e-12 {
            return theta;
        }

        for (k, t) in theta.iter_mut().enumerate() {
            let mut sum = 0.0;
            for i in (k + 1)..n {
                sum += (residuals[i] - mean) * (residuals[i - k - 1] - mean);
            }
            // Clamp for stability.
            *t = ((sum / n as f64) / var).clamp(-0.99, 0.99);
        }

        theta
    }

    /// One-step-ahead prediction of `series[i]` on the differenced scale,
    /// using whatever lags exist before `i`.
    fn diff_one_step(&self, i: usize, series: &[f64], residuals: &[f64]) -> f64 {
        let mut pred = self.mean;
        for (j, &phi) in self.phi.iter().enumerate() {
            if i > j {
                pred += phi * (series[i - j - 1] - self.mean);
            }
        }
        for (k, &theta) in self.theta.iter().enumerate() {
            if i > k {
                pred += theta * residuals[i - k - 1];
            }
        }
        pred
    }

    /// Reconstruct forecasts from the differenced scale back to the
    /// original scale, integrating once per differencing level.
    fn undifference(&self, forecasts: &[f64]) -> Vec<f64> {
        let mut result = forecasts.to_vec();
        for level in (0..self.d).rev() {
            let mut acc = self.level_tails[level];
            for v in result.iter_mut() {
                acc += *v;
                *v = acc;
            }
        }
        result
    }
}

impl Predictor for Arima {
    fn fit(&mut self, data: &[f64]) -> Result<()> {
        let required = self.p + self.d + self.q + 10;
        if data.len() < required {
            return Err(ForecastError::InsufficientData {
                required,
                actual: data.len(),
            });
        }
        if data.iter().any(|x| !x.is_finite()) {
            return Err(ForecastError::InvalidData(
                "series contains NaN or infinite values".to_string(),
            ));
        }

        let levels = Self::difference_levels(data, self.d);
        self.observed = data.to_vec();
        self.diffed = levels[self.d].clone();
        self.level_tails = levels[..self.d].iter().map(|l| l[l.len() - 1]).collect();

        self.mean = self.diffed.iter().sum::<f64>() / self.diffed.len() as f64;
        self.phi = Self::yule_walker(&self.diffed, self.p);

        // AR residuals, then MA terms estimated from them.
        self.theta = vec![0.0; self.q];
        let mut residuals = vec![0.0; self.diffed.len()];
        for i in 0..self.diffed.len() {
            let pred = self.diff_one_step(i, &self.diffed, &residuals);
            residuals[i] = self.diffed[i] - pred;
        }
        self.theta = Self::residual_ma(&residuals, self.q);
        self.residuals = residuals;

        self.fitted = true;
        Ok(())
    }

    fn predict(&self, steps: usize) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(ForecastError::NotFitted);
        }
        if steps == 0 {
            return Ok(Vec::new());
        }

        let m = self.diffed.len();
        let mut extended = self.diffed.clone();
        let mut residuals = self.residuals.clone();

        for _ in 0..steps {
            let i = extended.len();
            let pred = self.diff_one_step(i, &extended, &residuals);
            extended.push(pred);
            // Future shocks are unknown and taken as zero.
            residuals.push(0.0);
        }

        Ok(self.undifference(&extended[m..]))
    }

    fn fitted_values(&self) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(ForecastError::NotFitted);
        }

        let levels = Self::difference_levels(&self.observed, self.d);
        let deepest = &levels[self.d];
        let mut out = Vec::with_capacity(self.observed.len());

        for t in 0..self.observed.len() {
            if t < self.d {
                // No differenced history exists yet; echo the observation.
                out.push(self.observed[t]);
                continue;
            }
            let mut pred = self.diff_one_step(t - self.d, deepest, &self.residuals);
            for k in (0..self.d).rev() {
                pred += levels[k][t - k - 1];
            }
            out.push(pred);
        }

        Ok(out)
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trending_series(n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| 100.0 + 0.8 * i as f64 + (i as f64 * 0.3).sin() * 2.0)
            .collect()
    }

    #[test]
    fn order_bounds_enforced() {
        assert!(Arima::new(5, 1, 0).is_ok());
        assert!(Arima::new(11, 0, 0).is_err());
        assert!(Arima::new(0, 3, 0).is_err());
        assert!(Arima::new(0, 0, 11).is_err());
    }

    #[test]
    fn fit_then_predict_has_requested_length() {
        let data = trending_series(60);
        let mut model = Arima::new(5, 1, 0).unwrap();
        model.fit(&data).unwrap();
        assert!(model.is_fitted());

        assert_eq!(model.predict(5).unwrap().len(), 5);
        assert!(model.predict(0).unwrap().is_empty());
    }

    #[test]
    fn fitted_values_align_with_input() {
        let data = trending_series(48);
        let mut model = Arima::new(5, 1, 0).unwrap();
        model.fit(&data).unwrap();

        let fitted = model.fitted_values().unwrap();
        assert_eq!(fitted.len(), data.len());
        assert!(fitted.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn linear_ramp_is_reproduced_one_step_ahead() {
        // First differences of a straight ramp are constant, so every
        // one-step prediction lands exactly on the next observation.
        let data: Vec<f64> = (0..40).map(|i| 10.0 + 2.5 * i as f64).collect();
        let mut model = Arima::new(2, 1, 0).unwrap();
        model.fit(&data).unwrap();

        let fitted = model.fitted_values().unwrap();
        for (f, a) in fitted.iter().zip(data.iter()) {
            assert!((f - a).abs() < 1e-6, "fitted {f} vs actual {a}");
        }
    }

    #[test]
    fn second_difference_round_trips() {
        let data: Vec<f64> = (0..50).map(|i| (i * i) as f64 * 0.1).collect();
        let mut model = Arima::new(1, 2, 0).unwrap();
        model.fit(&data).unwrap();

        let fitted = model.fitted_values().unwrap();
        assert_eq!(fitted.len(), data.len());
        let forecast = model.predict(4).unwrap();
        assert_eq!(forecast.len(), 4);
        assert!(forecast.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn rejects_short_or_invalid_series() {
        let mut model = Arima::new(5, 1, 0).unwrap();
        assert!(matches!(
            model.fit(&[1.0, 2.0, 3.0]),
            Err(ForecastError::InsufficientData { required: 16, .. })
        ));

        let mut bad = trending_series(30);
        bad[7] = f64::NAN;
        assert!(matches!(model.fit(&bad), Err(ForecastError::InvalidData(_))));
    }

    #[test]
    fn predict_before_fit_fails() {
        let model = Arima::new(1, 1, 0).unwrap();
        assert_eq!(model.predict(2).unwrap_err(), ForecastError::NotFitted);
        assert_eq!(model.fitted_values().unwrap_err(), ForecastError::NotFitted);
    }

    #[test]
    fn ma_component_fits_and_predicts() {
        let data = trending_series(60);
        let mut model = Arima::new(1, 1, 1).unwrap();
        model.fit(&data).unwrap();
        assert_eq!(model.ma_coefficients().len(), 1);
        assert_eq!(model.predict(3).unwrap().len(), 3);
    }

    #[test]
    fn constant_series_predicts_constant() {
        let data = vec![5.0; 30];
        let mut model = Arima::new(2, 0, 0).unwrap();
        model.fit(&data).unwrap();

        let forecast = model.predict(3).unwrap();
        for v in forecast {
            assert!((v - 5.0).abs() < 1e-9);
        }
    }
}
