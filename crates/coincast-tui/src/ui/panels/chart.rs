//! Chart panel: actual history and predictions on a shared time axis.

use chrono::{Local, LocalResult, TimeZone};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, PriceSeries};
use crate::widgets::forecast_chart;

/// Draw the forecast chart, or a placeholder before the first prediction.
pub fn draw_chart_panel(frame: &mut Frame, area: Rect, app: &App) {
    let (Some(series), Some(prediction)) = (&app.series, &app.prediction) else {
        let placeholder = Paragraph::new("Press [p] to fetch history and predict")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title(" Chart "));
        frame.render_widget(placeholder, area);
        return;
    };

    let historical: Vec<(f64, f64)> = series
        .points
        .iter()
        .map(|p| (p.time as f64, p.close))
        .collect();
    let predicted: Vec<(f64, f64)> = prediction
        .timestamps
        .iter()
        .zip(prediction.values.iter())
        .map(|(&t, &v)| (t as f64, v))
        .collect();

    let title = format!(" {} \u{2014} {} ", series.symbol, prediction.algorithm);
    let chart = forecast_chart(&historical, &predicted, title, axis_labels(series));

    frame.render_widget(chart, area);
}

/// First, middle and last timestamps as short axis labels.
fn axis_labels(series: &PriceSeries) -> Vec<String> {
    if series.is_empty() {
        return Vec::new();
    }
    let ts = series.timestamps();
    vec![
        short_label(ts[0]),
        short_label(ts[ts.len() / 2]),
        short_label(ts[ts.len() - 1]),
    ]
}

fn short_label(ts: i64) -> String {
    match Local.timestamp_opt(ts, 0) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => {
            dt.format("%m-%d %H:%M").to_string()
        }
        LocalResult::None => ts.to_string(),
    }
}
