//! Reusable widgets for the TUI.

mod chart;

pub use chart::forecast_chart;
