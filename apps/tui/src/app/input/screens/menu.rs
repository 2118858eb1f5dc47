use crate::app::state::App;
use crossterm::event::KeyCode;

/// Rows jumped by PgUp/PgDn in the item panel.
const PAGE: isize = 5;

pub fn handle_menu_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Up | KeyCode::BackTab => app.cursor.focus_prev(&app.view),
        KeyCode::Down | KeyCode::Tab => app.cursor.focus_next(&app.view),
        KeyCode::Left => app.cursor.move_left(&app.view),
        KeyCode::Right => app.cursor.move_right(&app.view),
        KeyCode::Enter | KeyCode::Char(' ') => app.select_at_cursor(),
        KeyCode::PageUp => app.scroll_items(-PAGE),
        KeyCode::PageDown => app.scroll_items(PAGE),
        KeyCode::Home => {
            app.item_scroll = 0;
        }
        KeyCode::End => {
            app.item_scroll = app.view.lines().len().saturating_sub(1);
        }
        KeyCode::Char('r') => app.request_reload(),
        _ => {}
    }
}
