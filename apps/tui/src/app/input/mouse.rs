use crate::app::state::App;
use crate::ui::screens::menu::label_at;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// Handles a mouse event against a frame of size `area`.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, area: Rect) {
    if app.show_help {
        return;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some((level, index)) = label_at(app, area, mouse.column, mouse.row) {
                app.cursor.point(level, index);
                app.select_at_cursor();
            }
        }
        MouseEventKind::ScrollDown => app.scroll_items(1),
        MouseEventKind::ScrollUp => app.scroll_items(-1),
        _ => {}
    }
}
