use crate::ui::widgets::popup::centered_rect;
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const SHORTCUTS: &[(&str, &str)] = &[
    ("↑ / ↓, Tab", "Move between the group, heading and subheading rows"),
    ("← / →", "Move along the focused row"),
    ("Enter, Space", "Select the label under the cursor"),
    ("Mouse click", "Select a label directly"),
    ("PgUp / PgDn", "Scroll the item panel"),
    ("Home / End", "Jump to the first / last item"),
    ("r", "Reload the menu from its source"),
    ("F1, ?", "Toggle this help"),
    ("q, Esc", "Quit"),
];

pub fn render_help(f: &mut Frame<'_>) {
    let area = centered_rect(70, 60, f.area());

    let key = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let mut lines = vec![
        TextLine::from(Span::styled(
            "Selecting a label expands the first entry of every row below it.",
            Style::default().fg(Color::Gray),
        )),
        TextLine::from(""),
    ];
    lines.extend(SHORTCUTS.iter().map(|(keys, action)| {
        TextLine::from(vec![
            Span::styled(format!("{keys:<14}"), key),
            Span::raw(*action),
        ])
    }));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title(" Help ")
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}
