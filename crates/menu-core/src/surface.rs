use std::fmt;

/// One of the three selector rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Group,
    Heading,
    Subheading,
}

impl Level {
    pub const ALL: [Self; 3] = [Self::Group, Self::Heading, Self::Subheading];

    pub const fn index(self) -> usize {
        match self {
            Self::Group => 0,
            Self::Heading => 1,
            Self::Subheading => 2,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Group => "group",
            Self::Heading => "heading",
            Self::Subheading => "subheading",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Group => "Group",
            Self::Heading => "Heading",
            Self::Subheading => "Subheading",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whatever actually draws the menu: a terminal frame, a browser canvas,
/// or a recording used in tests.
///
/// Label activation is not wired through callbacks. The front-end calls
/// [`LevelRenderer::select`](crate::LevelRenderer::select) with the level
/// and label the user picked.
pub trait DisplaySurface {
    /// Replaces the selector at `level` with one entry per label.
    fn render_level(&mut self, level: Level, labels: &[String]);

    fn set_level_visible(&mut self, level: Level, visible: bool);

    /// Replaces the item panel content.
    fn render_item_lines(&mut self, lines: Vec<String>);

    /// Marks a single label as selected, clearing the mark everywhere else.
    fn mark_selected(&mut self, level: Level, label: &str);
}
