//! Header bar widget.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Draw the header bar with title.
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(concat!(
        "coincast v",
        env!("CARGO_PKG_VERSION"),
        " - Cryptocurrency Price Predictor"
    ))
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM));

    frame.render_widget(title, area);
}
