use crate::app::state::App;
use crossterm::event::KeyCode;

mod help;
mod menu;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if help::handle_help_toggle(app, key) {
        return;
    }

    menu::handle_menu_input(app, key);
}
