use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use klik_menu_core::{records_from_values, Hierarchy, Level, LevelCursor, LevelRenderer, MenuView};
use ratzilla::event::KeyCode;
use ratzilla::ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line as TextLine, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use ratzilla::{DomBackend, WebRenderer};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Request, RequestInit, RequestMode, Response};

const MENU_URL: &str = "menu.json";

#[derive(Default)]
struct WebMenu {
    renderer: LevelRenderer,
    view: MenuView,
    cursor: LevelCursor,
    fetched: bool,
}

impl WebMenu {
    fn load(&mut self, hierarchy: Hierarchy) {
        self.renderer.load(hierarchy, &mut self.view);
        self.cursor = LevelCursor::default();
        self.cursor.sync(&self.view, self.renderer.navigation());
    }

    fn handle_key(&mut self, code: &KeyCode) {
        match code {
            KeyCode::Left => self.cursor.move_left(&self.view),
            KeyCode::Right => self.cursor.move_right(&self.view),
            KeyCode::Up => self.cursor.focus_prev(&self.view),
            KeyCode::Down => self.cursor.focus_next(&self.view),
            KeyCode::Enter | KeyCode::Char(' ') => self.select_at_cursor(),
            _ => {}
        }
    }

    fn select_at_cursor(&mut self) {
        let Some((level, label)) = self.cursor.target(&self.view) else {
            return;
        };
        let label = label.to_string();
        if let Err(error) = self.renderer.select(level, &label, &mut self.view) {
            web_sys::console::warn_1(&error.to_string().into());
            return;
        }
        self.cursor.sync(&self.view, self.renderer.navigation());
    }
}

fn main() -> io::Result<()> {
    let menu = Rc::new(RefCell::new(WebMenu::default()));

    spawn_local(fetch_menu(menu.clone()));

    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    terminal.on_key_event({
        let menu = menu.clone();
        move |event| menu.borrow_mut().handle_key(&event.code)
    });

    terminal.draw_web(move |f| {
        let area = f.area();
        let block = Block::default()
            .title("KlikCafe Menu")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray));
        let inner = block.inner(area).inner(Margin::new(1, 1));
        f.render_widget(block, area);

        let menu = menu.borrow();
        if menu.renderer.hierarchy().is_empty() {
            let message = if menu.fetched {
                "No menu data."
            } else {
                "Loading menu.json..."
            };
            let paragraph = Paragraph::new(Text::from(TextLine::from(message)))
                .alignment(Alignment::Center);
            f.render_widget(paragraph, inner);
        } else {
            render_menu(&menu, f, inner);
        }
    });

    Ok(())
}

fn render_menu(menu: &WebMenu, f: &mut Frame<'_>, area: Rect) {
    let visible = menu.view.visible_levels();

    let mut constraints = visible
        .iter()
        .map(|_| Constraint::Length(3))
        .collect::<Vec<_>>();
    constraints.extend([Constraint::Min(3), Constraint::Length(1)]);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (offset, level) in visible.iter().enumerate() {
        render_level_row(menu, *level, f, layout[offset]);
    }
    render_items(menu, f, layout[visible.len()]);
    render_hint(f, layout[visible.len() + 1]);
}

fn render_level_row(menu: &WebMenu, level: Level, f: &mut Frame<'_>, area: Rect) {
    let focused = menu.cursor.focus() == level;
    let border_color = if focused { Color::Yellow } else { Color::Gray };

    let spans = menu
        .view
        .level(level)
        .labels
        .iter()
        .enumerate()
        .flat_map(|(index, label)| {
            let style = if menu.view.is_selected(level, label) {
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Rgb(0, 0, 238))
                    .add_modifier(Modifier::BOLD)
            } else if focused && menu.cursor.position(level) == index {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::White)
            };
            [Span::styled(format!(" {label} "), style), Span::raw(" ")]
        })
        .collect::<Vec<_>>();

    let block = Block::default()
        .title(level.label())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    f.render_widget(Paragraph::new(TextLine::from(spans)).block(block), area);
}

fn render_items(menu: &WebMenu, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Items")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let lines = menu
        .view
        .lines()
        .iter()
        .map(|line| TextLine::from(line.as_str()))
        .collect::<Vec<_>>();

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_hint(f: &mut Frame<'_>, area: Rect) {
    let hint = TextLine::from(vec![
        Span::styled("Up/Down", Style::default().fg(Color::Gray)),
        Span::raw(" level  "),
        Span::styled("Left/Right", Style::default().fg(Color::Gray)),
        Span::raw(" move  "),
        Span::styled("Enter", Style::default().fg(Color::Gray)),
        Span::raw(" select"),
    ]);
    f.render_widget(Paragraph::new(hint).alignment(Alignment::Center), area);
}

async fn fetch_menu(store: Rc<RefCell<WebMenu>>) {
    let records = fetch_records().await;
    let mut menu = store.borrow_mut();
    menu.fetched = true;
    if let Some(values) = records {
        menu.load(Hierarchy::build(records_from_values(values)));
    }
}

async fn fetch_records() -> Option<Vec<serde_json::Value>> {
    let window = web_sys::window()?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let Ok(request) = Request::new_with_str_and_init(MENU_URL, &opts) else {
        return None;
    };

    let Ok(response_value) =
        wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request)).await
    else {
        web_sys::console::error_1(&"Failed to fetch menu.json".into());
        return None;
    };

    let Ok(response) = response_value.dyn_into::<Response>() else {
        web_sys::console::error_1(&"Failed to read response".into());
        return None;
    };

    if !response.ok() {
        web_sys::console::error_1(&format!("menu.json returned HTTP {}", response.status()).into());
        return None;
    }

    let Ok(body) = response.json() else {
        web_sys::console::error_1(&"menu.json has no JSON body".into());
        return None;
    };

    let Ok(json) = wasm_bindgen_futures::JsFuture::from(body).await else {
        web_sys::console::error_1(&"Failed to read menu.json body".into());
        return None;
    };

    match serde_wasm_bindgen::from_value::<Vec<serde_json::Value>>(json) {
        Ok(values) => Some(values),
        Err(error) => {
            web_sys::console::error_1(&format!("Failed to parse menu.json: {error}").into());
            None
        }
    }
}
