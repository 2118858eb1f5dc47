use crate::error::NavigationError;
use crate::format::render_item;
use crate::hierarchy::{Hierarchy, Node};
use crate::navigation::NavigationState;
use crate::record::ItemRecord;
use crate::surface::{DisplaySurface, Level};
use tracing::debug;

/// Drives the three selector levels and the item panel.
///
/// Every time a level is (re)populated its first label is selected as if
/// the user had picked it, so a fresh load expands the default path
/// first group, first heading, first subheading down to its items.
#[derive(Debug, Clone, Default)]
pub struct LevelRenderer {
    hierarchy: Hierarchy,
    navigation: NavigationState,
}

impl LevelRenderer {
    pub fn new(hierarchy: Hierarchy) -> Self {
        Self {
            hierarchy,
            navigation: NavigationState::new(),
        }
    }

    pub const fn hierarchy(&self) -> &Hierarchy {
        &self.hierarchy
    }

    pub const fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    /// Swaps in a freshly built hierarchy and renders it from scratch.
    pub fn load<S: DisplaySurface>(&mut self, hierarchy: Hierarchy, surface: &mut S) {
        self.hierarchy = hierarchy;
        self.navigation.reset();

        surface.render_item_lines(Vec::new());
        for level in [Level::Heading, Level::Subheading] {
            surface.render_level(level, &[]);
            surface.set_level_visible(level, false);
        }

        self.render_groups(surface);
    }

    /// Labels that belong at `level` under the current selection.
    pub fn labels(&self, level: Level) -> Vec<String> {
        match level {
            Level::Group => self.hierarchy.group_keys(),
            Level::Heading => self.group_node().map(Node::child_keys).unwrap_or_default(),
            Level::Subheading => self.heading_node().map(Node::child_keys).unwrap_or_default(),
        }
    }

    /// Populates the group row and cascades into the first group.
    pub fn render_groups<S: DisplaySurface>(&mut self, surface: &mut S) {
        let labels = self.labels(Level::Group);
        surface.render_level(Level::Group, &labels);
        surface.set_level_visible(Level::Group, true);

        if let Some(first) = labels.first() {
            self.navigation.select_group(first.as_str());
            self.render_headings(surface);
            surface.mark_selected(Level::Group, first);
        }
    }

    /// Handles the user picking `label` at `level`.
    pub fn select<S: DisplaySurface>(
        &mut self,
        level: Level,
        label: &str,
        surface: &mut S,
    ) -> Result<(), NavigationError> {
        if !self.labels(level).iter().any(|candidate| candidate == label) {
            return Err(NavigationError::UnknownLabel {
                level,
                label: label.to_string(),
            });
        }
        debug!(%level, label, "selection");

        match level {
            Level::Group => {
                self.navigation.select_group(label);
                self.render_headings(surface);
            }
            Level::Heading => {
                self.navigation.select_heading(label)?;
                self.render_subheadings(surface);
            }
            Level::Subheading => {
                self.navigation.select_subheading(label)?;
                match self.subheading_node() {
                    Some(node) => Self::show_items(node, surface),
                    None => surface.render_item_lines(Vec::new()),
                }
            }
        }

        surface.mark_selected(level, label);
        Ok(())
    }

    /// Replaces the item panel with whatever `node` holds.
    pub fn show_items<S: DisplaySurface>(node: &Node, surface: &mut S) {
        surface.render_item_lines(panel_lines(node));
    }

    fn render_headings<S: DisplaySurface>(&mut self, surface: &mut S) {
        surface.render_level(Level::Heading, &[]);
        surface.render_level(Level::Subheading, &[]);
        surface.set_level_visible(Level::Subheading, false);
        surface.render_item_lines(Vec::new());

        let Some(group) = self.group_node() else {
            return;
        };
        let keys = group.child_keys();

        if keys.is_empty() {
            surface.set_level_visible(Level::Heading, false);
            Self::show_items(group, surface);
            return;
        }

        let direct = group.direct_items().map(item_lines);
        surface.render_level(Level::Heading, &keys);
        surface.set_level_visible(Level::Heading, true);

        let first = &keys[0];
        if self.navigation.select_heading(first.as_str()).is_ok() {
            self.render_subheadings(surface);
            surface.mark_selected(Level::Heading, first);
        }

        if let Some(lines) = direct {
            surface.render_item_lines(lines);
        }
    }

    fn render_subheadings<S: DisplaySurface>(&mut self, surface: &mut S) {
        surface.render_level(Level::Subheading, &[]);
        surface.render_item_lines(Vec::new());

        let Some(heading) = self.heading_node() else {
            return;
        };
        let keys = heading.child_keys();

        if keys.is_empty() {
            surface.set_level_visible(Level::Subheading, false);
            Self::show_items(heading, surface);
            return;
        }

        let direct = heading.direct_items().map(item_lines);
        surface.render_level(Level::Subheading, &keys);
        surface.set_level_visible(Level::Subheading, true);

        let first = &keys[0];
        if self.navigation.select_subheading(first.as_str()).is_ok() {
            match self.subheading_node() {
                Some(node) => Self::show_items(node, surface),
                None => surface.render_item_lines(Vec::new()),
            }
            surface.mark_selected(Level::Subheading, first);
        }

        if let Some(lines) = direct {
            surface.render_item_lines(lines);
        }
    }

    fn group_node(&self) -> Option<&Node> {
        self.hierarchy.group(self.navigation.group()?)
    }

    fn heading_node(&self) -> Option<&Node> {
        self.group_node()?.child(self.navigation.heading()?)
    }

    fn subheading_node(&self) -> Option<&Node> {
        self.heading_node()?.child(self.navigation.subheading()?)
    }
}

/// Display lines for a node, trying in order: the node as a plain list,
/// the node's own items, then every list or own-items bucket one level
/// down.
pub fn panel_lines(node: &Node) -> Vec<String> {
    match node {
        Node::Leaf(items) => item_lines(items),
        Node::Branch(branch) if !branch.items.is_empty() => item_lines(&branch.items),
        Node::Branch(branch) => branch
            .children
            .values()
            .flat_map(|child| match child {
                Node::Leaf(items) => item_lines(items),
                Node::Branch(nested) => item_lines(&nested.items),
            })
            .collect(),
    }
}

fn item_lines(items: &[ItemRecord]) -> Vec<String> {
    items.iter().map(render_item).collect()
}
