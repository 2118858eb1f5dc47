// UI module for klik-menu
// Handles all UI rendering functions

pub mod screens;
pub mod widgets;

use crate::app::App;
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    screens::menu::render_menu(app, f);

    if app.show_help {
        screens::help::render_help(f);
    }
}
