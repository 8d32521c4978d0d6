use crate::app::AppState;
use crate::domain::UiMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle a key press. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::Entry => handle_entry_mode(app, key),
    }
}

/// Handle keys while the list has focus
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),

        // Check/uncheck
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected(),

        KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => app.delete_selected(),

        // Focus the entry field
        KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Tab => app.start_entry(),

        // Reset needs the shifted key so it isn't hit by accident
        KeyCode::Char('R') => app.reset(),

        KeyCode::Char('q') | KeyCode::Char('Q') => return true,

        _ => {}
    }
    false
}

/// Handle keys while the entry field has focus
fn handle_entry_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => app.submit_entry(),
        KeyCode::Esc | KeyCode::Tab => app.leave_entry(),
        KeyCode::Backspace => app.entry_backspace(),
        KeyCode::Char(c) => app.entry_add_char(c),
        _ => {}
    }
    false
}
