use crate::surface::{DisplaySurface, Level};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelView {
    pub labels: Vec<String>,
    pub visible: bool,
}

/// A display surface that simply remembers what it was told to show.
///
/// Front-ends draw from it each frame; tests assert against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuView {
    levels: [LevelView; 3],
    lines: Vec<String>,
    selected: Option<(Level, String)>,
}

impl Default for MenuView {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuView {
    pub fn new() -> Self {
        let mut levels: [LevelView; 3] = Default::default();
        levels[Level::Group.index()].visible = true;
        Self {
            levels,
            lines: Vec::new(),
            selected: None,
        }
    }

    pub const fn level(&self, level: Level) -> &LevelView {
        &self.levels[level.index()]
    }

    /// Levels currently shown, top to bottom.
    pub fn visible_levels(&self) -> Vec<Level> {
        Level::ALL
            .into_iter()
            .filter(|level| self.level(*level).visible)
            .collect()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn selected(&self) -> Option<(Level, &str)> {
        self.selected
            .as_ref()
            .map(|(level, label)| (*level, label.as_str()))
    }

    pub fn is_selected(&self, level: Level, label: &str) -> bool {
        self.selected() == Some((level, label))
    }
}

impl DisplaySurface for MenuView {
    fn render_level(&mut self, level: Level, labels: &[String]) {
        self.levels[level.index()].labels = labels.to_vec();
        // Replaced labels lose their mark.
        if matches!(&self.selected, Some((selected, _)) if *selected == level) {
            self.selected = None;
        }
    }

    fn set_level_visible(&mut self, level: Level, visible: bool) {
        self.levels[level.index()].visible = visible;
    }

    fn render_item_lines(&mut self, lines: Vec<String>) {
        self.lines = lines;
    }

    fn mark_selected(&mut self, level: Level, label: &str) {
        self.selected = Some((level, label.to_string()));
    }
}
