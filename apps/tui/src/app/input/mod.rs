mod mouse;
pub mod screens;

use crate::app::state::App;
use crossterm::event::KeyCode;

pub use mouse::handle_mouse;

pub fn handle_input(app: &mut App, key: KeyCode) {
    screens::dispatch_input(app, key);
}
