use klik_menu_core::{
    parse_records, render_item, DisplaySurface, Hierarchy, ItemRecord, Level, LevelRenderer,
    MenuView, NavigationError,
};

/// Mimics a page of buttons: every rendered label is its own button that
/// may or may not carry the highlight.
#[derive(Default)]
struct ButtonPage {
    rows: [Vec<(String, bool)>; 3],
    visible: [bool; 3],
    lines: Vec<String>,
}

impl ButtonPage {
    fn marked(&self) -> Vec<(usize, &str)> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(row, buttons)| {
                buttons
                    .iter()
                    .filter(|(_, marked)| *marked)
                    .map(move |(label, _)| (row, label.as_str()))
            })
            .collect()
    }
}

impl DisplaySurface for ButtonPage {
    fn render_level(&mut self, level: Level, labels: &[String]) {
        self.rows[level.index()] = labels.iter().map(|label| (label.clone(), false)).collect();
    }

    fn set_level_visible(&mut self, level: Level, visible: bool) {
        self.visible[level.index()] = visible;
    }

    fn render_item_lines(&mut self, lines: Vec<String>) {
        self.lines = lines;
    }

    fn mark_selected(&mut self, level: Level, label: &str) {
        for row in &mut self.rows {
            for (_, marked) in row.iter_mut() {
                *marked = false;
            }
        }
        if let Some((_, marked)) = self.rows[level.index()]
            .iter_mut()
            .find(|(candidate, _)| candidate == label)
        {
            *marked = true;
        }
    }
}

const MENU: &str = r#"[
    {"name": "Latte", "sizePrice": [{"size": "Small", "price": 2.8}, {"size": "Large", "price": 3.5}],
     "menuLevel1": "Drinks", "menuLevel2": "Hot", "menuLevel3": "Coffee"},
    {"name": "Earl Grey", "description": "Loose leaf", "sizePrice": [{"size": "Regular", "price": 2}],
     "menuLevel1": "Drinks", "menuLevel2": "Hot", "menuLevel3": "Tea"},
    {"name": "Iced Tea", "sizePrice": [{"size": "Regular", "price": 2.5}],
     "menuLevel1": "Drinks", "menuLevel2": "Cold", "menuLevel3": "EMPTY"},
    {"name": "Croissant", "description": "EMPTY", "sizePrice": [{"size": "EMPTY", "price": "EMPTY"}],
     "menuLevel1": "Food", "menuLevel2": "EMPTY", "menuLevel3": "EMPTY"},
    {"name": "Mystery", "menuLevel1": "EMPTY"},
    {"name": "Nowhere"}
]"#;

fn menu() -> Hierarchy {
    Hierarchy::build(parse_records(MENU).unwrap_or_default())
}

#[test]
fn initial_load_expands_the_default_path() {
    let mut renderer = LevelRenderer::default();
    let mut page = ButtonPage::default();

    renderer.load(menu(), &mut page);

    let navigation = renderer.navigation();
    assert_eq!(navigation.group(), Some("Drinks"));
    assert_eq!(navigation.heading(), Some("Hot"));
    assert_eq!(navigation.subheading(), Some("Coffee"));

    assert_eq!(page.visible, [true, true, true]);
    assert_eq!(page.lines, vec!["Latte (Small £2.80, Large £3.50)"]);
    assert_eq!(page.marked(), vec![(0, "Drinks")]);
}

#[test]
fn exactly_one_label_is_marked_after_every_selection() -> Result<(), NavigationError> {
    let mut renderer = LevelRenderer::default();
    let mut page = ButtonPage::default();
    renderer.load(menu(), &mut page);

    renderer.select(Level::Subheading, "Tea", &mut page)?;
    assert_eq!(page.marked(), vec![(2, "Tea")]);
    assert_eq!(page.lines, vec!["Earl Grey – Loose leaf (£2)"]);

    renderer.select(Level::Heading, "Cold", &mut page)?;
    assert_eq!(page.marked(), vec![(1, "Cold")]);
    assert!(!page.visible[2]);
    assert_eq!(page.lines, vec!["Iced Tea (£2.50)"]);

    renderer.select(Level::Group, "Food", &mut page)?;
    assert_eq!(page.marked(), vec![(0, "Food")]);
    assert!(!page.visible[1]);
    assert_eq!(page.lines, vec!["Croissant"]);
    Ok(())
}

#[test]
fn switching_groups_clears_deeper_selection() -> Result<(), NavigationError> {
    let mut renderer = LevelRenderer::default();
    let mut view = MenuView::new();
    renderer.load(menu(), &mut view);

    renderer.select(Level::Group, "Food", &mut view)?;
    assert_eq!(renderer.navigation().heading(), None);
    assert_eq!(renderer.navigation().subheading(), None);

    renderer.select(Level::Group, "Drinks", &mut view)?;
    assert_eq!(renderer.navigation().heading(), Some("Hot"));
    assert_eq!(renderer.navigation().subheading(), Some("Coffee"));
    Ok(())
}

#[test]
fn filtered_records_never_reach_the_menu() {
    let hierarchy = menu();
    let names: Vec<_> = hierarchy
        .records()
        .iter()
        .filter_map(|record| record.name.clone())
        .collect();

    assert_eq!(names, vec!["Latte", "Earl Grey", "Iced Tea", "Croissant"]);
    assert_eq!(hierarchy.group_keys(), vec!["Drinks", "Food"]);
}

#[test]
fn reselecting_the_current_path_rerenders_identically() -> Result<(), NavigationError> {
    let mut renderer = LevelRenderer::default();
    let mut view = MenuView::new();
    renderer.load(menu(), &mut view);

    for level in Level::ALL {
        assert_eq!(renderer.labels(level), view.level(level).labels);
    }

    renderer.select(Level::Group, "Drinks", &mut view)?;
    let after_group = view.clone();
    renderer.select(Level::Group, "Drinks", &mut view)?;
    assert_eq!(view, after_group);
    assert_eq!(view.level(Level::Heading).labels, ["Hot", "Cold"]);
    assert_eq!(view.level(Level::Subheading).labels, ["Coffee", "Tea"]);
    assert_eq!(view.lines(), ["Latte (Small £2.80, Large £3.50)"]);
    assert_eq!(view.selected(), Some((Level::Group, "Drinks")));

    renderer.select(Level::Heading, "Hot", &mut view)?;
    let after_heading = view.clone();
    renderer.select(Level::Heading, "Hot", &mut view)?;
    assert_eq!(view, after_heading);
    assert_eq!(view.level(Level::Subheading).labels, ["Coffee", "Tea"]);
    assert_eq!(view.selected(), Some((Level::Heading, "Hot")));
    Ok(())
}

#[test]
fn bare_list_node_renders_each_record() {
    let first = ItemRecord::new("Scone").with_description("Jam and cream");
    let second = ItemRecord::new("Brownie");
    let node = klik_menu_core::Node::Leaf(vec![first.clone(), second.clone()]);
    let mut view = MenuView::new();

    LevelRenderer::show_items(&node, &mut view);

    assert_eq!(view.lines(), [render_item(&first), render_item(&second)]);
}
