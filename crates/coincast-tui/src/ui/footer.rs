//! Footer bar widget with keyboard shortcuts.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

/// Draw the footer bar with the key map and any status message.
pub fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let help_text =
        "[Tab/\u{2190}\u{2192}] Focus  [\u{2191}\u{2193}] Change  [p/Enter] Predict  \
         [r] Reload list  [PgUp/PgDn] Scroll  [q] Quit";

    let display_text = if let Some((status, _)) = &app.status_message {
        format!("{status}  |  {help_text}")
    } else {
        help_text.to_string()
    };

    let footer = Paragraph::new(display_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));

    frame.render_widget(footer, area);
}
