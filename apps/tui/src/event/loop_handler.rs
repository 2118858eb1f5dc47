use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use klik_menu_core::{Hierarchy, ItemRecord};
use ratatui::layout::Rect;
use std::convert::TryFrom;
use std::fmt;
use std::fmt::Write as _;
use std::time::Duration;
use tokio::sync::oneshot;
use tracing::{debug, error, info};

use crate::app::{handle_input, handle_mouse, App};
use crate::source::{MenuSource, SourceError};
use crate::terminal::MenuTerminal;
use crate::ui;

type LoadResult = std::result::Result<Vec<ItemRecord>, SourceError>;

// Define states for menu loading
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum LoadState {
    Idle,
    Loading,
    Loaded,
    Failed,
}

impl fmt::Display for LoadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Loading => write!(f, "Loading"),
            Self::Loaded => write!(f, "Loaded"),
            Self::Failed => write!(f, "Failed"),
        }
    }
}

// Define events for menu loading
#[derive(Debug)]
enum LoadEvent {
    Start,
    Loaded(Vec<ItemRecord>),
    Failed(String),
    Reset,
}

impl fmt::Display for LoadEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "Start"),
            Self::Loaded(records) => write!(f, "Loaded({} records)", records.len()),
            Self::Failed(msg) => write!(f, "Failed({msg})"),
            Self::Reset => write!(f, "Reset"),
        }
    }
}

#[derive(Debug)]
struct StateTransitionError {
    from: LoadState,
    event: String,
}

impl fmt::Display for StateTransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid transition from {} with event {}",
            self.from, self.event
        )
    }
}

impl std::error::Error for StateTransitionError {}

struct LoadMachine {
    state: LoadState,
}

impl LoadMachine {
    const fn new(initial_state: LoadState) -> Self {
        Self {
            state: initial_state,
        }
    }

    const fn state(&self) -> LoadState {
        self.state
    }

    // Process an event and update the state machine and app
    fn process_event(
        &mut self,
        event: LoadEvent,
        app: &mut App,
    ) -> std::result::Result<(), StateTransitionError> {
        let next_state = NextState::try_from((self.state, event, app))?;
        self.state = next_state.0;
        Ok(())
    }
}

struct NextState(LoadState);

impl TryFrom<(LoadState, LoadEvent, &mut App)> for NextState {
    type Error = StateTransitionError;

    fn try_from(
        value: (LoadState, LoadEvent, &mut App),
    ) -> std::result::Result<Self, Self::Error> {
        let (current_state, event, app) = value;

        match (current_state, event) {
            (LoadState::Idle, LoadEvent::Start) => {
                info!("Loading menu from {}", app.source);
                app.loading = true;
                app.status_message.clear();
                Ok(Self(LoadState::Loading))
            }
            (LoadState::Loading, LoadEvent::Loaded(records)) => {
                info!(records = records.len(), "Menu loaded");
                app.loading = false;
                app.apply_records(records);
                Ok(Self(LoadState::Loaded))
            }
            (LoadState::Loading, LoadEvent::Failed(error)) => {
                // Failures only go to the log; whatever was on screen stays.
                error!("Error loading menu from {}: {error}", app.source);
                app.loading = false;
                Ok(Self(LoadState::Failed))
            }
            (LoadState::Loaded | LoadState::Failed, LoadEvent::Reset) => {
                Ok(Self(LoadState::Idle))
            }
            (from, event) => Err(StateTransitionError {
                from,
                event: event.to_string(),
            }),
        }
    }
}

fn spawn_load(source: MenuSource) -> oneshot::Receiver<LoadResult> {
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let _ = tx.send(source.fetch().await);
    });
    rx
}

/// Turns a finished load into a machine event, leaving `pending` empty.
fn poll_load(pending: &mut Option<oneshot::Receiver<LoadResult>>) -> Option<LoadEvent> {
    let outcome = pending.as_mut()?.try_recv();
    let event = match outcome {
        Ok(Ok(records)) => LoadEvent::Loaded(records),
        Ok(Err(e)) => LoadEvent::Failed(e.to_string()),
        Err(oneshot::error::TryRecvError::Empty) => return None,
        Err(oneshot::error::TryRecvError::Closed) => {
            LoadEvent::Failed("load task ended without a result".to_string())
        }
    };
    *pending = None;
    Some(event)
}

/// Run the application in headless mode (no UI)
pub async fn run_headless(app: &mut App, json: bool) -> Result<()> {
    let records = app.source.fetch().await.map_err(|e| {
        error!("Error loading menu from {}: {e}", app.source);
        e
    })?;

    if json {
        let hierarchy = Hierarchy::build(records);
        println!("{}", serde_json::to_string_pretty(&hierarchy)?);
    } else {
        app.apply_records(records);
        print!("{}", render_headless_menu(app));
    }

    Ok(())
}

/// Text rendering of the default path: one line per visible row with the
/// selected label in brackets, followed by the item panel.
fn render_headless_menu(app: &App) -> String {
    let navigation = app.renderer.navigation();
    let mut out = String::new();

    for level in app.view.visible_levels() {
        let current = navigation.at(level);
        let labels = app
            .view
            .level(level)
            .labels
            .iter()
            .map(|label| {
                if Some(label.as_str()) == current {
                    format!("[{label}]")
                } else {
                    label.clone()
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        let _ = writeln!(out, "{:<12}{labels}", format!("{}:", level.label()));
    }

    let _ = writeln!(out, "\nItems:");
    for line in app.view.lines() {
        let _ = writeln!(out, "- {line}");
    }
    out
}

/// Run the main application event loop
pub async fn run(terminal: &mut MenuTerminal, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    let mut load_machine = LoadMachine::new(LoadState::Idle);
    let mut pending: Option<oneshot::Receiver<LoadResult>> = None;

    loop {
        app.update();

        if app.reload_requested {
            app.reload_requested = false;
            match load_machine.process_event(LoadEvent::Start, app) {
                Ok(()) => pending = Some(spawn_load(app.source.clone())),
                Err(e) => debug!("{e}"),
            }
        }

        if let Some(event) = poll_load(&mut pending) {
            if let Err(e) = load_machine.process_event(event, app) {
                debug!("{e}");
            }
            if let Err(e) = load_machine.process_event(LoadEvent::Reset, app) {
                debug!("{e}");
            }
            debug!("Load machine back to {}", load_machine.state());
        }

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    handle_input(app, key.code);
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Mouse(mouse)) => {
                    let size = terminal.size()?;
                    handle_mouse(app, mouse, Rect::new(0, 0, size.width, size.height));
                }
                Ok(_) | Err(_) => {
                    // Resizes are picked up by the next draw
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use klik_menu_core::Level;
    use std::path::PathBuf;

    fn app() -> App {
        App::new(MenuSource::File(PathBuf::from("menu.json")))
    }

    fn records() -> Vec<ItemRecord> {
        vec![
            ItemRecord::new("Latte").filed_under("Drinks", Some("Hot"), Some("Coffee")),
            ItemRecord::new("Cola").filed_under("Drinks", Some("Cold"), None),
            ItemRecord::new("Toast").filed_under("Food", None, None),
        ]
    }

    #[test]
    fn successful_load_renders_and_returns_to_idle() {
        let mut app = app();
        let mut machine = LoadMachine::new(LoadState::Idle);

        assert!(machine.process_event(LoadEvent::Start, &mut app).is_ok());
        assert!(app.loading);
        assert!(machine.process_event(LoadEvent::Loaded(records()), &mut app).is_ok());
        assert_eq!(machine.state(), LoadState::Loaded);
        assert!(!app.loading);
        assert_eq!(app.view.lines(), ["Latte"]);

        assert!(machine.process_event(LoadEvent::Reset, &mut app).is_ok());
        assert_eq!(machine.state(), LoadState::Idle);
    }

    #[test]
    fn failed_load_leaves_the_view_empty() {
        let mut app = app();
        let mut machine = LoadMachine::new(LoadState::Idle);

        assert!(machine.process_event(LoadEvent::Start, &mut app).is_ok());
        assert!(machine
            .process_event(LoadEvent::Failed("HTTP 500".into()), &mut app)
            .is_ok());

        assert_eq!(machine.state(), LoadState::Failed);
        assert!(!app.has_menu());
        assert!(app.view.lines().is_empty());
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn start_while_loading_is_rejected() {
        let mut app = app();
        let mut machine = LoadMachine::new(LoadState::Idle);
        assert!(machine.process_event(LoadEvent::Start, &mut app).is_ok());

        let Err(error) = machine.process_event(LoadEvent::Start, &mut app) else {
            panic!("second start should be rejected");
        };
        assert_eq!(
            error.to_string(),
            "Invalid transition from Loading with event Start"
        );
    }

    #[test]
    fn finished_receiver_is_consumed() {
        let (tx, rx) = oneshot::channel::<LoadResult>();
        let mut pending = Some(rx);
        assert!(poll_load(&mut pending).is_none());
        assert!(pending.is_some());

        let _ = tx.send(Ok(records()));
        assert!(matches!(poll_load(&mut pending), Some(LoadEvent::Loaded(_))));
        assert!(pending.is_none());
    }

    #[test]
    fn dropped_sender_counts_as_failure() {
        let (tx, rx) = oneshot::channel::<LoadResult>();
        drop(tx);
        let mut pending = Some(rx);

        assert!(matches!(poll_load(&mut pending), Some(LoadEvent::Failed(_))));
    }

    #[test]
    fn headless_output_brackets_the_selected_path() {
        let mut app = app();
        app.apply_records(records());

        let out = render_headless_menu(&app);

        assert!(out.contains("Group:      [Drinks]  Food"));
        assert!(out.contains("Heading:    [Hot]  Cold"));
        assert!(out.contains("Subheading: [Coffee]"));
        assert!(out.ends_with("Items:\n- Latte\n"));
        assert_eq!(app.view.selected(), Some((Level::Group, "Drinks")));
    }
}
