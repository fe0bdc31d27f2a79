//! Layout components (header, navigation menu, status bar)

use super::components::button_width;
use super::theme::theme;
use crate::app::App;
use crate::content::{NAV_LINKS, SITE_NAME};
use crate::events::ClickTarget;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{Focus, SiteState, HEADER_ROWS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Width of the navigation menu panel
const MENU_WIDTH: u16 = 22;

/// Split the screen into the page viewport and the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Page
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

pub fn toggle_label(open: bool) -> &'static str {
    if open {
        "✕ Lukk"
    } else {
        "☰ Meny"
    }
}

/// Clickable region of the menu toggle inside the header
pub fn toggle_rect(page: Rect, nav_open: bool) -> Rect {
    let width = button_width(toggle_label(nav_open)).min(page.width);
    Rect {
        x: page.right().saturating_sub(width + 1),
        y: page.y,
        width,
        height: HEADER_ROWS.min(page.height),
    }
}

/// Navigation menu panel, dropped down under the header on the right
pub fn menu_rect(page: Rect) -> Rect {
    let width = MENU_WIDTH.min(page.width);
    let height = (NAV_LINKS.len() as u16 + 2).min(page.height.saturating_sub(HEADER_ROWS));
    Rect {
        x: page.right().saturating_sub(width + 1),
        y: page.y + HEADER_ROWS.min(page.height),
        width,
        height,
    }
}

/// Resolve a mouse click to the element it landed on
pub fn hit_test(page: Rect, nav_open: bool, col: u16, row: u16) -> ClickTarget {
    let contains = |rect: Rect| {
        col >= rect.x && col < rect.right() && row >= rect.y && row < rect.bottom()
    };

    if contains(toggle_rect(page, nav_open)) {
        return ClickTarget::NavToggle;
    }
    if nav_open {
        let menu = menu_rect(page);
        if contains(menu) {
            let link = (row > menu.y)
                .then(|| (row - menu.y - 1) as usize)
                .filter(|idx| *idx < NAV_LINKS.len());
            return ClickTarget::NavMenu(link);
        }
    }
    ClickTarget::Elsewhere
}

/// Draw the fixed header over the top of the page
pub fn draw_header(frame: &mut Frame, page: Rect, site: &SiteState) {
    let theme = theme();
    let area = Rect {
        height: HEADER_ROWS.min(page.height),
        ..page
    };

    let block = if site.header.is_scrolled() {
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.shadow))
    } else {
        Block::default()
    };
    let title = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(
            format!("  {SITE_NAME}"),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .block(block);

    frame.render_widget(Clear, area);
    frame.render_widget(title, area);

    let toggle_style = if site.nav.toggle_active() {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text)
    };
    let toggle = toggle_rect(page, site.nav.is_open());
    let label_row = Rect {
        y: toggle.y + 1,
        height: 1,
        ..toggle
    };
    if label_row.bottom() <= area.bottom() {
        frame.render_widget(
            Paragraph::new(format!("[{}]", toggle_label(site.nav.is_open()))).style(toggle_style),
            label_row,
        );
    }
}

/// Draw the navigation menu when it is open
pub fn draw_nav_menu(frame: &mut Frame, page: Rect, site: &SiteState) {
    if !site.nav.menu_active() {
        return;
    }
    let theme = theme();
    let area = menu_rect(page);

    let lines: Vec<Line> = NAV_LINKS
        .iter()
        .enumerate()
        .map(|(idx, (label, _))| {
            if idx == site.nav.selected_link {
                Line::from(Span::styled(
                    format!(" ▸ {label}"),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("   {label}"),
                    Style::default().fg(theme.text),
                ))
            }
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent));

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    let hints = get_hints(&app.site);
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Key hints for the current focus
fn get_hints(site: &SiteState) -> String {
    match site.focus {
        Focus::Form => format!(
            "Tab/↓: neste felt │ Shift+Tab/↑: førre │ Space: vel │ {SUBMIT_SHORTCUT}: send │ Esc: tilbake"
        ),
        Focus::Page if site.nav.is_open() => "↑↓: vel │ Enter: gå til │ Esc: lukk".to_string(),
        Focus::Page => {
            "q: avslutt │ m: meny │ ↑↓/PgUp/PgDn: rull │ f: skjema │ p: ring │ e: e-post".to_string()
        }
    }
}
