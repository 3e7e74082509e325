//! Prediction table panel.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Row, Table, TableState},
};

use crate::app::{format_timestamp, App};

/// Draw the prediction rows: one per predicted point, price to two
/// decimals, timestamps in local time.
pub fn draw_table_panel(frame: &mut Frame, area: Rect, app: &App) {
    let Some(prediction) = &app.prediction else {
        let placeholder = Paragraph::new("Run a prediction to fill the table")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title(" Predictions "));
        frame.render_widget(placeholder, area);
        return;
    };

    let rows: Vec<Row> = prediction
        .timestamps
        .iter()
        .zip(prediction.values.iter())
        .map(|(&ts, &value)| Row::new(vec![format_timestamp(ts), format!("{value:.2}")]))
        .collect();

    let table = Table::new(rows, [Constraint::Length(20), Constraint::Min(22)])
        .header(
            Row::new(vec!["Date", "Predicted Price (USD)"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(Block::default().borders(Borders::ALL).title(format!(
            " Predictions ({} rows) ",
            prediction.values.len()
        )));

    let mut state = TableState::default();
    *state.offset_mut() = app.table_offset;
    frame.render_stateful_widget(table, area, &mut state);
}
