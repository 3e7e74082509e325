//! Application state management for the TUI.

use std::time::Instant;

use chrono::{Local, LocalResult, TimeZone};
use coincast_data::PricePoint;

/// Main application state.
pub struct App {
    /// Whether the app should quit
    pub should_quit: bool,
    /// Selector that currently receives Up/Down keys
    pub focus: Focus,
    /// Symbols of the top currencies by market cap, ranking order
    pub symbols: Vec<String>,
    /// Index into `symbols`
    pub symbol_index: usize,
    /// Selected lookback window
    pub horizon: Horizon,
    /// Selected forecasting algorithm
    pub algorithm: Algorithm,
    /// Most recently fetched price history
    pub series: Option<PriceSeries>,
    /// Most recent prediction, aligned to `series`
    pub prediction: Option<PredictionResult>,
    /// First visible row of the prediction table
    pub table_offset: usize,
    /// Status message with expiry
    pub status_message: Option<(String, Instant)>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            should_quit: false,
            focus: Focus::Currency,
            symbols: Vec::new(),
            symbol_index: 0,
            horizon: Horizon::Hours24,
            algorithm: Algorithm::Linear,
            series: None,
            prediction: None,
            table_offset: 0,
            status_message: None,
        }
    }
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a status message that will be displayed temporarily.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }

    /// Clear expired status messages (older than 5 seconds).
    pub fn clear_expired_status(&mut self) {
        if let Some((_, instant)) = &self.status_message {
            if instant.elapsed().as_secs() > 5 {
                self.status_message = None;
            }
        }
    }

    /// Currently selected currency symbol, if the list loaded.
    pub fn selected_symbol(&self) -> Option<&str> {
        self.symbols.get(self.symbol_index).map(String::as_str)
    }

    /// Move focus to the next selector.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Move focus to the previous selector.
    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Advance the focused selector to its next option.
    pub fn cycle_down(&mut self) {
        match self.focus {
            Focus::Currency => {
                if !self.symbols.is_empty() {
                    self.symbol_index = (self.symbol_index + 1) % self.symbols.len();
                }
            }
            Focus::Period => self.horizon = self.horizon.next(),
            Focus::Model => self.algorithm = self.algorithm.next(),
        }
    }

    /// Move the focused selector to its previous option.
    pub fn cycle_up(&mut self) {
        match self.focus {
            Focus::Currency => {
                if !self.symbols.is_empty() {
                    self.symbol_index =
                        (self.symbol_index + self.symbols.len() - 1) % self.symbols.len();
                }
            }
            Focus::Period => self.horizon = self.horizon.previous(),
            Focus::Model => self.algorithm = self.algorithm.previous(),
        }
    }

    /// Replace the displayed result set. Both sides change together so the
    /// table and chart never show data from different requests.
    pub fn apply_result(&mut self, series: PriceSeries, prediction: PredictionResult) {
        self.series = Some(series);
        self.prediction = Some(prediction);
        self.table_offset = 0;
    }

    /// Number of rows in the prediction table.
    pub fn row_count(&self) -> usize {
        self.prediction.as_ref().map_or(0, |p| p.values.len())
    }

    /// Scroll the prediction table down by `lines`.
    pub fn scroll_down(&mut self, lines: usize) {
        let max = self.row_count().saturating_sub(1);
        self.table_offset = (self.table_offset + lines).min(max);
    }

    /// Scroll the prediction table up by `lines`.
    pub fn scroll_up(&mut self, lines: usize) {
        self.table_offset = self.table_offset.saturating_sub(lines);
    }
}

/// Selector that owns the Up/Down keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Currency,
    Period,
    Model,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Currency => Focus::Period,
            Focus::Period => Focus::Model,
            Focus::Model => Focus::Currency,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Currency => Focus::Model,
            Focus::Period => Focus::Currency,
            Focus::Model => Focus::Period,
        }
    }
}

/// User-selectable lookback window for the history query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Horizon {
    #[default]
    Hours24,
    Days7,
    Months12,
}

impl Horizon {
    /// Hour count passed to the hourly-history endpoint.
    pub fn hours(self) -> u32 {
        match self {
            Horizon::Hours24 => 24,
            Horizon::Days7 => 168,
            Horizon::Months12 => 365,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Horizon::Hours24 => "24 hours",
            Horizon::Days7 => "7 days",
            Horizon::Months12 => "12 months",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Horizon::Hours24 => Horizon::Days7,
            Horizon::Days7 => Horizon::Months12,
            Horizon::Months12 => Horizon::Hours24,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Horizon::Hours24 => Horizon::Months12,
            Horizon::Days7 => Horizon::Hours24,
            Horizon::Months12 => Horizon::Days7,
        }
    }
}

/// Forecasting algorithm selected in the model dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    #[default]
    Linear,
    Arima,
}

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Linear => "Linear Regression",
            Algorithm::Arima => "ARIMA",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Algorithm::Linear => Algorithm::Arima,
            Algorithm::Arima => Algorithm::Linear,
        }
    }

    pub fn previous(self) -> Self {
        self.next()
    }
}

/// A fetched close-price history with display metadata.
#[derive(Debug, Clone)]
pub struct PriceSeries {
    pub symbol: String,
    pub points: Vec<PricePoint>,
    pub stats: SeriesStats,
}

impl PriceSeries {
    pub fn new(symbol: impl Into<String>, points: Vec<PricePoint>) -> Self {
        let stats = SeriesStats::calculate(&points);
        Self {
            symbol: symbol.into(),
            points,
            stats,
        }
    }

    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    pub fn timestamps(&self) -> Vec<i64> {
        self.points.iter().map(|p| p.time).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Summary statistics of a close-price series.
#[derive(Debug, Clone, Default)]
pub struct SeriesStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std: f64,
    pub count: usize,
}

impl SeriesStats {
    pub fn calculate(points: &[PricePoint]) -> Self {
        if points.is_empty() {
            return Self::default();
        }

        let count = points.len();
        let min = points.iter().map(|p| p.close).fold(f64::INFINITY, f64::min);
        let max = points
            .iter()
            .map(|p| p.close)
            .fold(f64::NEG_INFINITY, f64::max);
        let mean = points.iter().map(|p| p.close).sum::<f64>() / count as f64;
        let variance = points
            .iter()
            .map(|p| (p.close - mean).powi(2))
            .sum::<f64>()
            / count as f64;

        Self {
            min,
            max,
            mean,
            std: variance.sqrt(),
            count,
        }
    }
}

/// A prediction aligned one-to-one with the fetched series.
#[derive(Debug, Clone)]
pub struct PredictionResult {
    /// Display name of the algorithm that produced it
    pub algorithm: String,
    /// Fitted-model summary for the stats line
    pub detail: String,
    pub timestamps: Vec<i64>,
    pub values: Vec<f64>,
    /// In-sample mean absolute error against the actual closes
    pub mae: f64,
    /// In-sample root mean squared error against the actual closes
    pub rmse: f64,
}

/// Render an epoch timestamp as `YYYY-MM-DD HH:MM:SS` in local time.
pub fn format_timestamp(ts: i64) -> String {
    match Local.timestamp_opt(ts, 0) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => {
            dt.format("%Y-%m-%d %H:%M:%S").to_string()
        }
        LocalResult::None => ts.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points(n: usize) -> Vec<PricePoint> {
        (0..n)
            .map(|i| PricePoint {
                time: 1_722_470_400 + 3600 * i as i64,
                close: 100.0 + i as f64,
            })
            .collect()
    }

    fn sample_prediction(n: usize) -> PredictionResult {
        PredictionResult {
            algorithm: "Linear Regression".to_string(),
            detail: String::new(),
            timestamps: (0..n).map(|i| 1_722_470_400 + 3600 * i as i64).collect(),
            values: vec![1.0; n],
            mae: 0.0,
            rmse: 0.0,
        }
    }

    #[test]
    fn horizon_maps_to_hour_counts() {
        assert_eq!(Horizon::Hours24.hours(), 24);
        assert_eq!(Horizon::Days7.hours(), 168);
        assert_eq!(Horizon::Months12.hours(), 365);
    }

    #[test]
    fn horizon_cycles_through_all_options() {
        let mut h = Horizon::Hours24;
        h = h.next();
        assert_eq!(h, Horizon::Days7);
        h = h.next();
        assert_eq!(h, Horizon::Months12);
        h = h.next();
        assert_eq!(h, Horizon::Hours24);
        assert_eq!(h.previous(), Horizon::Months12);
    }

    #[test]
    fn algorithm_toggles() {
        assert_eq!(Algorithm::Linear.next(), Algorithm::Arima);
        assert_eq!(Algorithm::Arima.next(), Algorithm::Linear);
    }

    #[test]
    fn currency_selector_wraps_and_survives_empty_list() {
        let mut app = App::new();

        // Listing failed: selector empty, cycling must not panic.
        app.cycle_down();
        app.cycle_up();
        assert_eq!(app.selected_symbol(), None);

        app.symbols = vec!["BTC".into(), "ETH".into(), "XRP".into()];
        assert_eq!(app.selected_symbol(), Some("BTC"));
        app.cycle_down();
        assert_eq!(app.selected_symbol(), Some("ETH"));
        app.cycle_up();
        app.cycle_up();
        assert_eq!(app.selected_symbol(), Some("XRP"));
    }

    #[test]
    fn focus_routes_up_down_keys() {
        let mut app = App::new();
        app.focus = Focus::Model;
        app.cycle_down();
        assert_eq!(app.algorithm, Algorithm::Arima);

        app.focus_next();
        assert_eq!(app.focus, Focus::Currency);
        app.focus_previous();
        assert_eq!(app.focus, Focus::Model);
    }

    #[test]
    fn table_rows_match_prediction_length() {
        let mut app = App::new();
        assert_eq!(app.row_count(), 0);

        let n = 24;
        app.apply_result(
            PriceSeries::new("BTC", sample_points(n)),
            sample_prediction(n),
        );
        assert_eq!(app.row_count(), n);
        assert_eq!(app.table_offset, 0);
    }

    #[test]
    fn failed_fetch_leaves_result_set_untouched() {
        let mut app = App::new();
        app.apply_result(
            PriceSeries::new("BTC", sample_points(24)),
            sample_prediction(24),
        );

        // The prediction flow on error only sets a status message.
        app.set_status("Fetch failed: HTTP status 502");
        assert_eq!(app.row_count(), 24);
        assert!(app.series.is_some());
    }

    #[test]
    fn scrolling_clamps_to_table() {
        let mut app = App::new();
        app.scroll_down(10);
        assert_eq!(app.table_offset, 0);

        app.apply_result(
            PriceSeries::new("BTC", sample_points(24)),
            sample_prediction(24),
        );
        app.scroll_down(7);
        assert_eq!(app.table_offset, 7);
        app.scroll_down(100);
        assert_eq!(app.table_offset, 23);
        app.scroll_up(5);
        assert_eq!(app.table_offset, 18);
        app.scroll_up(100);
        assert_eq!(app.table_offset, 0);
    }

    #[test]
    fn stats_summarize_the_series() {
        let stats = SeriesStats::calculate(&sample_points(5));
        assert_eq!(stats.count, 5);
        assert!((stats.min - 100.0).abs() < 1e-9);
        assert!((stats.max - 104.0).abs() < 1e-9);
        assert!((stats.mean - 102.0).abs() < 1e-9);
        assert!(stats.std > 0.0);
    }

    #[test]
    fn timestamp_formats_as_date_and_time() {
        let formatted = format_timestamp(1_722_470_400);
        // Exact value depends on the local timezone; check the shape.
        assert_eq!(formatted.len(), 19);
        assert_eq!(&formatted[4..5], "-");
        assert_eq!(&formatted[7..8], "-");
        assert_eq!(&formatted[10..11], " ");
        assert_eq!(&formatted[13..14], ":");
        assert_eq!(&formatted[16..17], ":");
    }
}
