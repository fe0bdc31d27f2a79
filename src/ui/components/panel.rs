//! Inline bordered panel for form banners and result panels

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render a colored panel with an optional hint on its border
pub fn render_panel(
    frame: &mut Frame,
    area: Rect,
    color: Color,
    message: &str,
    hint: Option<&str>,
) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    if let Some(hint) = hint {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {hint} "),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(Line::from(Span::styled(
        message,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .wrap(Wrap { trim: true })
    .block(block);

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
