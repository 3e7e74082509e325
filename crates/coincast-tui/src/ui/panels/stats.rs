//! Stats line: series summary and in-sample fit quality.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

/// Draw the one-line summary under the chart.
pub fn draw_stats_panel(frame: &mut Frame, area: Rect, app: &App) {
    let text = match (&app.series, &app.prediction) {
        (Some(series), Some(prediction)) => {
            let s = &series.stats;
            format!(
                "History: min {:.2}  max {:.2}  mean {:.2}  std {:.2}  n {}    \
                 Fit: {}  MAE {:.2}  RMSE {:.2}",
                s.min, s.max, s.mean, s.std, s.count,
                prediction.detail, prediction.mae, prediction.rmse
            )
        }
        _ => "Stats: --".to_string(),
    };

    let stats = Paragraph::new(text)
        .style(Style::default().fg(Color::Green))
        .block(Block::default().borders(Borders::ALL).title(" Statistics "));

    frame.render_widget(stats, area);
}
