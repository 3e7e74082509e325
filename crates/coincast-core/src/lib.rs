//! # coincast-core
//!
//! Time series forecasting models used by the coincast application.
//!
//! ## Models
//!
//! - **Linear regression** — ordinary least squares trend fit, either over
//!   the implicit time index or over caller-supplied x values (timestamps)
//! - **ARIMA** — AutoRegressive Integrated Moving Average with Yule-Walker
//!   coefficient estimation
//!
//! Both implement [`Predictor`], which covers fitting, out-of-sample
//! forecasting and in-sample fitted values.
//!
//! ## Example
//!
//! ```rust
//! use coincast_core::prelude::*;
//!
//! let closes: Vec<f64> = (1..=40).map(|x| x as f64).collect();
//! let mut model = Arima::new(1, 1, 0).unwrap();
//! model.fit(&closes).unwrap();
//!
//! // In-sample predictions are aligned one-to-one with the input.
//! let fitted = model.fitted_values().unwrap();
//! assert_eq!(fitted.len(), closes.len());
//! ```

pub mod metrics;
pub mod models;

mod error;

pub use error::{ForecastError, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{ForecastError, Result};
    pub use crate::models::arima::Arima;
    pub use crate::models::linear_regression::LinearRegression;
    pub use crate::models::Predictor;
}
