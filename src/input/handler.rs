use crate::app::AppState;
use crate::domain::UiMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent, now: Instant) -> bool {
    // Ctrl+C always quits, even while typing
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return true;
    }

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key, now),
        UiMode::AddingTask => handle_add_task_mode(app, key),
    }

    app.should_quit
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent, now: Instant) {
    match key.code {
        // Timer
        KeyCode::Char(' ') => app.start_pause(now),
        KeyCode::Char('r') | KeyCode::Char('R') => app.reset_timer(now),

        // Theme
        KeyCode::Char('t') | KeyCode::Char('T') => app.toggle_theme(),

        // Task selection
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),

        // Task commands
        KeyCode::Char('a') | KeyCode::Char('A') => app.start_add_task(),
        KeyCode::Enter | KeyCode::Char('x') | KeyCode::Char('X') => app.toggle_selected(),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => app.delete_selected(),

        // View
        KeyCode::Char('i') | KeyCode::Char('I') => app.toggle_insight(),

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.should_quit = true,

        _ => {}
    }
}

/// Handle keys while the add-task field is focused
fn handle_add_task_mode(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            app.submit_task();
        }
        KeyCode::Esc => app.cancel_add_task(),
        KeyCode::Backspace => {
            app.input.pop();
        }
        // Plain or shifted characters only; Ctrl/Alt chords are not text
        KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => app.input.push(c),
        _ => {}
    }
}
