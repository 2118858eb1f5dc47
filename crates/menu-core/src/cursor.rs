use crate::navigation::NavigationState;
use crate::surface::Level;
use crate::view::MenuView;

pub const fn wrap_decrement(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

pub const fn wrap_increment(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    (index + 1) % len
}

/// Keyboard focus over the selector rows: which row is focused and which
/// label each row's cursor sits on.
///
/// The cursor only points; nothing is selected until the front-end passes
/// [`LevelCursor::target`] to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelCursor {
    focus: Level,
    positions: [usize; 3],
}

impl Default for LevelCursor {
    fn default() -> Self {
        Self {
            focus: Level::Group,
            positions: [0; 3],
        }
    }
}

impl LevelCursor {
    pub const fn focus(&self) -> Level {
        self.focus
    }

    pub const fn position(&self, level: Level) -> usize {
        self.positions[level.index()]
    }

    /// Points straight at a label, e.g. after a mouse click.
    pub fn point(&mut self, level: Level, index: usize) {
        self.focus = level;
        self.positions[level.index()] = index;
    }

    pub fn focus_next(&mut self, view: &MenuView) {
        self.step_focus(view, wrap_increment);
    }

    pub fn focus_prev(&mut self, view: &MenuView) {
        self.step_focus(view, wrap_decrement);
    }

    pub fn move_right(&mut self, view: &MenuView) {
        let len = view.level(self.focus).labels.len();
        let slot = &mut self.positions[self.focus.index()];
        *slot = wrap_increment(*slot, len);
    }

    pub fn move_left(&mut self, view: &MenuView) {
        let len = view.level(self.focus).labels.len();
        let slot = &mut self.positions[self.focus.index()];
        *slot = wrap_decrement(*slot, len);
    }

    /// The label under the cursor in the focused row.
    pub fn target<'a>(&self, view: &'a MenuView) -> Option<(Level, &'a str)> {
        view.level(self.focus)
            .labels
            .get(self.position(self.focus))
            .map(|label| (self.focus, label.as_str()))
    }

    /// Re-aligns every row's cursor with the current selection and keeps
    /// focus on a row that is still shown.
    pub fn sync(&mut self, view: &MenuView, navigation: &NavigationState) {
        for level in Level::ALL {
            self.positions[level.index()] = navigation
                .at(level)
                .and_then(|key| view.level(level).labels.iter().position(|label| label == key))
                .unwrap_or(0);
        }

        let shown = |level: Level| {
            let row = view.level(level);
            row.visible && !row.labels.is_empty()
        };
        if !shown(self.focus) {
            self.focus = Level::ALL[..self.focus.index()]
                .iter()
                .rev()
                .copied()
                .find(|level| shown(*level))
                .unwrap_or(Level::Group);
        }
    }

    fn step_focus(&mut self, view: &MenuView, step: fn(usize, usize) -> usize) {
        let visible = view.visible_levels();
        if visible.is_empty() {
            return;
        }
        let current = visible
            .iter()
            .position(|level| *level == self.focus)
            .unwrap_or(0);
        self.focus = visible[step(current, visible.len())];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::DisplaySurface;

    fn view_with(groups: &[&str], headings: &[&str]) -> MenuView {
        let mut view = MenuView::new();
        let owned = |labels: &[&str]| labels.iter().map(ToString::to_string).collect::<Vec<_>>();
        view.render_level(Level::Group, &owned(groups));
        view.render_level(Level::Heading, &owned(headings));
        view.set_level_visible(Level::Heading, !headings.is_empty());
        view
    }

    #[test]
    fn wrap_helpers_cycle_and_tolerate_empty_rows() {
        assert_eq!(wrap_increment(2, 3), 0);
        assert_eq!(wrap_decrement(0, 3), 2);
        assert_eq!(wrap_increment(5, 0), 0);
        assert_eq!(wrap_decrement(0, 0), 0);
    }

    #[test]
    fn focus_cycles_through_visible_rows_only() {
        let view = view_with(&["Drinks"], &["Hot", "Cold"]);
        let mut cursor = LevelCursor::default();

        cursor.focus_next(&view);
        assert_eq!(cursor.focus(), Level::Heading);
        cursor.focus_next(&view);
        assert_eq!(cursor.focus(), Level::Group);
        cursor.focus_prev(&view);
        assert_eq!(cursor.focus(), Level::Heading);
    }

    #[test]
    fn target_follows_horizontal_moves() {
        let view = view_with(&["Drinks", "Food"], &[]);
        let mut cursor = LevelCursor::default();

        cursor.move_right(&view);
        assert_eq!(cursor.target(&view), Some((Level::Group, "Food")));
        cursor.move_right(&view);
        assert_eq!(cursor.target(&view), Some((Level::Group, "Drinks")));
        cursor.move_left(&view);
        assert_eq!(cursor.target(&view), Some((Level::Group, "Food")));
    }

    #[test]
    fn sync_tracks_selection_and_leaves_hidden_rows() {
        let view = view_with(&["Drinks", "Food"], &[]);
        let mut navigation = NavigationState::new();
        navigation.select_group("Food");

        let mut cursor = LevelCursor::default();
        cursor.point(Level::Heading, 1);
        cursor.sync(&view, &navigation);

        assert_eq!(cursor.focus(), Level::Group);
        assert_eq!(cursor.position(Level::Group), 1);
        assert_eq!(cursor.position(Level::Heading), 0);
    }
}
