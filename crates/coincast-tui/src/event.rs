//! Event handling for the TUI.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

use crate::app::App;
use crate::services;

/// Lines moved by one PageUp/PageDown press.
const TABLE_PAGE: usize = 10;

/// Handle keyboard events.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
        }

        // Selector focus and option cycling
        KeyCode::Tab | KeyCode::Right => app.focus_next(),
        KeyCode::BackTab | KeyCode::Left => app.focus_previous(),
        KeyCode::Up => app.cycle_up(),
        KeyCode::Down => app.cycle_down(),

        // Actions
        KeyCode::Char('p') | KeyCode::Enter => services::run_prediction(app),
        KeyCode::Char('r') => services::reload_symbols(app),

        // Result table scrolling
        KeyCode::PageDown => app.scroll_down(TABLE_PAGE),
        KeyCode::PageUp => app.scroll_up(TABLE_PAGE),

        _ => {}
    }
}

/// Poll for events with a timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}
