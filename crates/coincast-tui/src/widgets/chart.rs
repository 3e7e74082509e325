//! Two-series forecast chart: actual history and predictions on one
//! shared time axis.

use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};

/// Build the forecast chart from caller-owned point slices. X values are
/// epoch seconds, so both datasets share one real time axis.
pub fn forecast_chart<'a>(
    historical: &'a [(f64, f64)],
    predicted: &'a [(f64, f64)],
    title: String,
    x_labels: Vec<String>,
) -> Chart<'a> {
    let datasets = vec![
        Dataset::default()
            .name("Historical")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(historical),
        Dataset::default()
            .name("Predicted")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Yellow))
            .data(predicted),
    ];

    let xs = historical.iter().chain(predicted.iter()).map(|p| p.0);
    let ys = historical.iter().chain(predicted.iter()).map(|p| p.1);
    let x_min = xs.clone().fold(f64::INFINITY, f64::min);
    let x_max = xs.fold(f64::NEG_INFINITY, f64::max);
    let y_min = ys.clone().fold(f64::INFINITY, f64::min);
    let y_max = ys.fold(f64::NEG_INFINITY, f64::max);

    // Breathing room so the extremes stay off the border.
    let pad = ((y_max - y_min) * 0.05).max(y_max.abs() * 0.001).max(1e-9);
    let y_lo = y_min - pad;
    let y_hi = y_max + pad;

    Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL).title(title))
        .x_axis(
            Axis::default()
                .title("Date")
                .style(Style::default().fg(Color::Gray))
                .bounds([x_min, x_max])
                .labels(x_labels.into_iter().map(Span::raw).collect::<Vec<_>>()),
        )
        .y_axis(
            Axis::default()
                .title("Price (USD)")
                .style(Style::default().fg(Color::Gray))
                .bounds([y_lo, y_hi])
                .labels(vec![
                    Span::raw(format!("{y_lo:.2}")),
                    Span::raw(format!("{:.2}", (y_lo + y_hi) / 2.0)),
                    Span::raw(format!("{y_hi:.2}")),
                ]),
        )
}
