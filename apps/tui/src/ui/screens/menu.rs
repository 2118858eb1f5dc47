use crate::app::App;
use crate::ui::widgets::buttons::button_rects;
use klik_menu_core::Level;
use ratatui::layout::{Alignment, Constraint, Layout, Margin, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use throbber_widgets_tui::Throbber;

/// Screen regions of the menu view. Hidden selector rows have no area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuLayout {
    pub title: Rect,
    pub levels: [Option<Rect>; 3],
    pub items: Rect,
    pub status: Rect,
    pub shortcuts: Rect,
}

pub fn menu_layout(app: &App, area: Rect) -> MenuLayout {
    let visible: Vec<Level> = Level::ALL
        .into_iter()
        .filter(|level| *level == Level::Group || app.view.level(*level).visible)
        .collect();

    let mut constraints = vec![Constraint::Length(3)]; // Title
    constraints.extend(visible.iter().map(|_| Constraint::Length(3))); // Selector rows
    constraints.extend([
        Constraint::Min(3),    // Items
        Constraint::Length(3), // Status
        Constraint::Length(1), // Shortcuts hint
    ]);

    let chunks = Layout::vertical(constraints).split(area.inner(Margin::new(2, 1)));

    let mut levels = [None; 3];
    for (offset, level) in visible.iter().enumerate() {
        levels[level.index()] = Some(chunks[offset + 1]);
    }

    let rest = visible.len() + 1;
    MenuLayout {
        title: chunks[0],
        levels,
        items: chunks[rest],
        status: chunks[rest + 1],
        shortcuts: chunks[rest + 2],
    }
}

/// The inside of a selector row's border, where the labels sit.
pub fn level_row(rect: Rect) -> Rect {
    rect.inner(Margin::new(1, 1))
}

/// Finds the label drawn at a terminal cell.
pub fn label_at(app: &App, area: Rect, column: u16, row: u16) -> Option<(Level, usize)> {
    let layout = menu_layout(app, area);
    let position = Position::new(column, row);

    Level::ALL.into_iter().find_map(|level| {
        let rect = layout.levels[level.index()]?;
        button_rects(&app.view.level(level).labels, level_row(rect))
            .iter()
            .position(|button| button.contains(position))
            .map(|index| (level, index))
    })
}

pub fn render_menu(app: &App, f: &mut Frame<'_>) {
    let layout = menu_layout(app, f.area());

    render_title_section(app, f, layout.title);
    for level in Level::ALL {
        if let Some(rect) = layout.levels[level.index()] {
            render_level_row(app, f, level, rect);
        }
    }
    render_items_section(app, f, layout.items);
    render_status_section(app, f, layout.status);
    render_shortcuts(f, layout.shortcuts);
}

fn render_title_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let navigation = app.renderer.navigation();
    let path = [navigation.group(), navigation.heading(), navigation.subheading()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" › ");

    let title = Paragraph::new(TextLine::from(vec![
        Span::styled(
            "KlikCafe ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Menu",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(path, Style::default().fg(Color::Gray)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(title, area);
}

fn render_level_row(app: &App, f: &mut Frame<'_>, level: Level, area: Rect) {
    let focused = app.cursor.focus() == level;
    let border_color = if focused { Color::Yellow } else { Color::DarkGray };

    let block = Block::default()
        .title(format!(" {} ", level.label()))
        .title_style(Style::default().fg(border_color))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    f.render_widget(block, area);

    let labels = &app.view.level(level).labels;
    let rects = button_rects(labels, level_row(area));

    for (index, (label, rect)) in labels.iter().zip(rects).enumerate() {
        let style = if app.view.is_selected(level, label) {
            Style::default()
                .bg(Color::Rgb(0, 0, 238))
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else if focused && app.cursor.position(level) == index {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        };

        f.render_widget(Paragraph::new(Span::styled(format!(" {label} "), style)), rect);
    }
}

fn render_items_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let lines = app.view.lines();
    let block = Block::default()
        .title(format!(" Items ({}) ", lines.len()))
        .title_style(Style::default().fg(Color::Green))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.loading && !app.has_menu() {
        let throbber = Throbber::default()
            .label("Loading menu...")
            .style(Style::default().fg(Color::Cyan))
            .throbber_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
        let mut state = app.throbber.clone();
        f.render_stateful_widget(throbber, inner, &mut state);
        return;
    }

    if lines.is_empty() {
        let message = if app.has_menu() {
            "Nothing filed here."
        } else {
            "No menu data. Press r to reload."
        };
        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, inner);
        return;
    }

    let text = Text::from(
        lines
            .iter()
            .map(|line| TextLine::from(line.as_str()))
            .collect::<Vec<_>>(),
    );
    let scroll = u16::try_from(app.item_scroll).unwrap_or(u16::MAX);
    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(paragraph, inner);
}

fn render_status_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Status ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.loading {
        let throbber = Throbber::default()
            .label(format!("Fetching {}", app.source))
            .style(Style::default().fg(Color::Gray));
        let mut state = app.throbber.clone();
        f.render_stateful_widget(throbber, inner, &mut state);
        return;
    }

    let text = if app.status_message.is_empty() {
        format!("{} · {} records", app.source, app.record_count)
    } else {
        app.status_message.clone()
    };
    f.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::Gray)),
        inner,
    );
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let key = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let help_text = vec![
        Span::styled("↑/↓", key),
        Span::raw(": Level   "),
        Span::styled("←/→", key),
        Span::raw(": Move   "),
        Span::styled("Enter", key),
        Span::raw(": Select   "),
        Span::styled("PgUp/PgDn", key),
        Span::raw(": Scroll   "),
        Span::styled("r", key),
        Span::raw(": Reload   "),
        Span::styled("F1", key),
        Span::raw(": Help   "),
        Span::styled("q", key),
        Span::raw(": Quit"),
    ];

    f.render_widget(
        Paragraph::new(TextLine::from(help_text)).alignment(Alignment::Center),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MenuSource;
    use klik_menu_core::ItemRecord;
    use std::path::PathBuf;

    fn app() -> App {
        let mut app = App::new(MenuSource::File(PathBuf::from("menu.json")));
        app.apply_records(vec![
            ItemRecord::new("Latte").filed_under("Drinks", Some("Hot"), Some("Coffee")),
            ItemRecord::new("Cola").filed_under("Drinks", Some("Cold"), None),
            ItemRecord::new("Toast").filed_under("Food", None, None),
        ]);
        app
    }

    #[test]
    fn hidden_rows_get_no_area() {
        let mut app = app();
        app.select(Level::Group, "Food");

        let layout = menu_layout(&app, Rect::new(0, 0, 80, 30));

        assert!(layout.levels[Level::Group.index()].is_some());
        assert!(layout.levels[Level::Heading.index()].is_none());
        assert!(layout.levels[Level::Subheading.index()].is_none());
    }

    #[test]
    fn clicks_resolve_to_the_label_under_the_pointer() {
        let app = app();
        let area = Rect::new(0, 0, 80, 30);
        let layout = menu_layout(&app, area);
        let Some(heading_row) = layout.levels[Level::Heading.index()] else {
            panic!("heading row should be visible");
        };
        let row = level_row(heading_row);

        // " Hot " spans 5 columns, then a gap, then " Cold ".
        assert_eq!(label_at(&app, area, row.x, row.y), Some((Level::Heading, 0)));
        assert_eq!(label_at(&app, area, row.x + 7, row.y), Some((Level::Heading, 1)));
        assert_eq!(label_at(&app, area, row.x + 5, row.y), None);
    }
}
