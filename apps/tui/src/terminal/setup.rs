use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Stdout, Write};
use tracing::{debug, warn};

pub type MenuTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Set up the terminal: raw mode, alternate screen, mouse capture
pub fn setup_terminal() -> Result<MenuTerminal> {
    let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
    debug!("Setting up terminal ({width}x{height})");

    // STEP 1: Enable raw mode - simplest operation that modifies terminal state
    enable_raw_mode().map_err(|e| eyre!("Failed to enable raw mode: {e}"))?;

    // STEP 2: Enter alternate screen with mouse reporting
    let mut stdout = stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(eyre!("Failed to enter alternate screen: {e}"));
    }

    // STEP 3: Create backend and terminal
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(term) => term,
        Err(e) => {
            let _ = execute!(std::io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            return Err(eyre!("Failed to create terminal: {e}"));
        }
    };

    // STEP 4: Clear screen and hide cursor - not fatal if these fail
    if let Err(e) = terminal.clear() {
        warn!("Failed to clear terminal: {e}");
    }
    if let Err(e) = execute!(std::io::stdout(), cursor::Hide) {
        warn!("Failed to hide cursor: {e}");
    }

    debug!("Terminal setup completed");
    Ok(terminal)
}

/// Restore terminal to its initial state, logging rather than failing
pub fn cleanup_terminal_state(raw_mode: bool, alternate_screen: bool) {
    let mut stdout_handle = stdout();

    // Always try to show cursor first (works in both normal and alternate screen)
    if let Err(e) = execute!(stdout_handle, cursor::Show) {
        warn!("Failed to show cursor: {e}");
    }

    if alternate_screen {
        if let Err(e) = execute!(stdout_handle, DisableMouseCapture, LeaveAlternateScreen) {
            warn!("Failed to leave alternate screen: {e}");
        }
    }

    if raw_mode {
        if let Err(e) = disable_raw_mode() {
            warn!("Failed to disable raw mode: {e}");
        }
    }

    // Force a newline to ensure the prompt appears correctly
    let _ = execute!(stdout_handle, cursor::MoveToNextLine(1));
    let _ = stdout_handle.flush();

    debug!("Terminal cleanup completed");
}
