//! Main layout for the TUI.

use ratatui::prelude::*;

use super::footer::draw_footer;
use super::header::draw_header;
use super::panels::{draw_chart_panel, draw_selection_panel, draw_stats_panel, draw_table_panel};
use crate::app::App;

/// Draw the single-screen layout: header, selector bar, chart, stats
/// line, prediction table, footer.
pub fn draw_ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),  // Header
            Constraint::Length(3),  // Selectors
            Constraint::Min(10),    // Chart
            Constraint::Length(3),  // Stats line
            Constraint::Length(10), // Prediction table
            Constraint::Length(2),  // Footer
        ])
        .split(frame.area());

    draw_header(frame, chunks[0]);
    draw_selection_panel(frame, chunks[1], app);
    draw_chart_panel(frame, chunks[2], app);
    draw_stats_panel(frame, chunks[3], app);
    draw_table_panel(frame, chunks[4], app);
    draw_footer(frame, chunks[5], app);
}
