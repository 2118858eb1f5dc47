// Event module for klik-menu
// Drives the terminal loop and the headless output

mod loop_handler;

pub use loop_handler::{run, run_headless};
