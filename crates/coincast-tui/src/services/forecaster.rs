//! Model fitting for the prediction flow.
//!
//! Both variants produce in-sample predictions aligned one-to-one with the
//! fetched timestamps: the linear model is evaluated at the input
//! timestamps, ARIMA yields one-step-ahead fitted values.

use coincast_core::metrics::{mae, rmse};
use coincast_core::models::arima::Arima;
use coincast_core::models::linear_regression::LinearRegression;
use coincast_core::models::Predictor;
use coincast_core::Result;

use crate::app::{Algorithm, PredictionResult, PriceSeries};

/// ARIMA orders used for the price series, matching the model selector.
const ARIMA_ORDERS: (usize, usize, usize) = (5, 1, 0);

/// Fit the selected model on the fetched series and return predictions
/// for the same timestamps.
pub fn run(series: &PriceSeries, algorithm: Algorithm) -> Result<PredictionResult> {
    let closes = series.closes();
    let timestamps = series.timestamps();

    let (values, detail) = match algorithm {
        Algorithm::Linear => {
            // Price as a function of the timestamp in seconds since epoch.
            let xs: Vec<f64> = timestamps.iter().map(|&t| t as f64).collect();
            let mut model = LinearRegression::new();
            model.fit_xy(&xs, &closes)?;
            let detail = format!(
                "slope {:+.4} USD/h, R\u{b2} {:.3}",
                model.slope() * 3600.0,
                model.r_squared()
            );
            (model.fitted_values()?, detail)
        }
        Algorithm::Arima => {
            let (p, d, q) = ARIMA_ORDERS;
            let mut model = Arima::new(p, d, q)?;
            model.fit(&closes)?;
            let detail = format!("ARIMA({p},{d},{q}), {} samples", closes.len());
            (model.fitted_values()?, detail)
        }
    };

    debug_assert_eq!(values.len(), timestamps.len());

    Ok(PredictionResult {
        algorithm: algorithm.name().to_string(),
        detail,
        mae: mae(&closes, &values),
        rmse: rmse(&closes, &values),
        timestamps,
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use coincast_core::ForecastError;
    use coincast_data::PricePoint;

    /// Smallest window ARIMA(5,1,0) accepts.
    fn arima_min_points() -> usize {
        let (p, d, q) = ARIMA_ORDERS;
        p + d + q + 10
    }

    fn series(n: usize) -> PriceSeries {
        let points = (0..n)
            .map(|i| PricePoint {
                time: 1_722_470_400 + 3600 * i as i64,
                close: 64_000.0 + 15.0 * i as f64 + ((i % 5) as f64 - 2.0),
            })
            .collect();
        PriceSeries::new("BTC", points)
    }

    #[test]
    fn linear_prediction_aligns_with_input() {
        let s = series(168);
        let result = run(&s, Algorithm::Linear).unwrap();

        assert_eq!(result.values.len(), s.len());
        assert_eq!(result.timestamps, s.timestamps());
        assert_eq!(result.algorithm, "Linear Regression");
        assert!(result.mae.is_finite() && result.rmse.is_finite());
    }

    #[test]
    fn linear_prediction_is_collinear() {
        let s = series(24);
        let result = run(&s, Algorithm::Linear).unwrap();

        let x: Vec<f64> = result.timestamps.iter().map(|&t| t as f64).collect();
        let slope = (result.values[23] - result.values[0]) / (x[23] - x[0]);
        for (xi, vi) in x.iter().zip(result.values.iter()) {
            let on_line = result.values[0] + slope * (xi - x[0]);
            assert!((vi - on_line).abs() < 1e-6);
        }
    }

    #[test]
    fn arima_prediction_aligns_with_input() {
        for n in [24usize, 168] {
            let s = series(n);
            let result = run(&s, Algorithm::Arima).unwrap();

            assert_eq!(result.values.len(), n);
            assert_eq!(result.timestamps, s.timestamps());
            assert!(result.values.iter().all(|v| v.is_finite()));
        }
    }

    #[test]
    fn arima_needs_a_minimum_window() {
        let s = series(arima_min_points() - 1);
        assert!(matches!(
            run(&s, Algorithm::Arima),
            Err(ForecastError::InsufficientData { .. })
        ));
    }

    #[test]
    fn empty_series_is_rejected_not_fatal() {
        let s = PriceSeries::new("BTC", Vec::new());
        assert!(run(&s, Algorithm::Linear).is_err());
        assert!(run(&s, Algorithm::Arima).is_err());
    }
}
