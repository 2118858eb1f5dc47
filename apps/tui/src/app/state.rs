use crate::source::MenuSource;
use klik_menu_core::{Hierarchy, ItemRecord, Level, LevelCursor, LevelRenderer, MenuView};
use std::time::{Duration, Instant};
use throbber_widgets_tui::ThrobberState;
use tracing::{debug, warn};

/// How often the loading throbber advances.
const THROBBER_STEP: Duration = Duration::from_millis(100);

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub show_help: bool,
    pub status_message: String,
    pub source: MenuSource,
    pub renderer: LevelRenderer,
    pub view: MenuView,
    pub cursor: LevelCursor,
    pub item_scroll: usize,
    pub loading: bool,
    pub reload_requested: bool,
    pub record_count: usize,
    pub throbber: ThrobberState,
    pub last_frame: Instant,
}

impl App {
    pub fn new(source: MenuSource) -> Self {
        Self {
            running: true,
            show_help: false,
            status_message: String::new(),
            source,
            renderer: LevelRenderer::default(),
            view: MenuView::new(),
            cursor: LevelCursor::default(),
            item_scroll: 0,
            loading: false,
            reload_requested: true,
            record_count: 0,
            throbber: ThrobberState::default(),
            last_frame: Instant::now(),
        }
    }

    pub fn update(&mut self) {
        if !self.loading {
            return;
        }

        let now = Instant::now();
        if now.duration_since(self.last_frame) >= THROBBER_STEP {
            self.throbber.calc_next();
            self.last_frame = now;
        }
    }

    /// Rebuilds the hierarchy from freshly loaded records and renders the
    /// default path.
    pub fn apply_records(&mut self, records: Vec<ItemRecord>) {
        self.record_count = records.len();
        let hierarchy = Hierarchy::build(records);
        self.renderer.load(hierarchy, &mut self.view);
        self.item_scroll = 0;
        self.cursor = LevelCursor::default();
        self.cursor.sync(&self.view, self.renderer.navigation());
    }

    /// Activates the label under the keyboard cursor.
    pub fn select_at_cursor(&mut self) {
        let Some((level, label)) = self.cursor.target(&self.view) else {
            return;
        };
        let label = label.to_string();
        self.select(level, &label);
    }

    pub fn select(&mut self, level: Level, label: &str) {
        match self.renderer.select(level, label, &mut self.view) {
            Ok(()) => {
                self.item_scroll = 0;
                self.status_message.clear();
                self.cursor.point(level, self.cursor.position(level));
                self.cursor.sync(&self.view, self.renderer.navigation());
            }
            Err(e) => {
                warn!("ignored selection: {e}");
                self.status_message = format!("Cannot select {label}");
            }
        }
    }

    pub fn request_reload(&mut self) {
        if self.loading {
            debug!("reload ignored while a load is in flight");
            return;
        }
        self.reload_requested = true;
    }

    pub fn scroll_items(&mut self, delta: isize) {
        let max = self.view.lines().len().saturating_sub(1);
        self.item_scroll = self.item_scroll.saturating_add_signed(delta).min(max);
    }

    pub fn has_menu(&self) -> bool {
        !self.renderer.hierarchy().is_empty()
    }
}
