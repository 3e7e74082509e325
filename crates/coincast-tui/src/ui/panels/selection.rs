//! Selector bar: currency, time period and algorithm.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Focus};

/// Draw the three selectors on one line; the focused one is highlighted.
pub fn draw_selection_panel(frame: &mut Frame, area: Rect, app: &App) {
    let currency = app.selected_symbol().unwrap_or("(none)").to_string();
    let position = if app.symbols.is_empty() {
        String::new()
    } else {
        format!(" {}/{}", app.symbol_index + 1, app.symbols.len())
    };

    let mut spans = Vec::new();
    push_selector(
        &mut spans,
        "Cryptocurrency",
        &format!("{currency}{position}"),
        app.focus == Focus::Currency,
    );
    push_selector(
        &mut spans,
        "Time Period",
        app.horizon.name(),
        app.focus == Focus::Period,
    );
    push_selector(
        &mut spans,
        "Algorithm",
        app.algorithm.name(),
        app.focus == Focus::Model,
    );

    let bar = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Selection "));

    frame.render_widget(bar, area);
}

fn push_selector(spans: &mut Vec<Span<'static>>, label: &str, value: &str, focused: bool) {
    if !spans.is_empty() {
        spans.push(Span::raw("    "));
    }

    let value_style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    spans.push(Span::styled(
        format!("{label}: "),
        Style::default().fg(Color::Gray),
    ));
    spans.push(Span::styled(format!("[{value}]"), value_style));
}
