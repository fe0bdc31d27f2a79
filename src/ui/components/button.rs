//! Button component for TUI

use crate::ui::theme::theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a generic button with border
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    is_selected: bool,
    is_enabled: bool,
) {
    let theme = theme();
    let border_style = if is_selected && is_enabled {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.muted)
    };

    let text_style = if !is_enabled {
        Style::default().fg(theme.muted)
    } else if is_selected {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text)
    };

    let paragraph = Paragraph::new(format!(" {content} "))
        .style(text_style)
        .alignment(Alignment::Center);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Width a button needs for its label
pub fn button_width(content: &str) -> u16 {
    content.chars().count() as u16 + 4
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_button_width_counts_chars() {
        assert_eq!(button_width("Sender..."), 13);
        assert_eq!(button_width("Send førespurnad"), 20);
    }

    #[test]
    fn test_render_button_draws_label() {
        let backend = TestBackend::new(24, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_button(frame, frame.area(), "Sender...", true, false))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let middle: String = (0..24).map(|x| buffer[(x, 1)].symbol().to_string()).collect();
        assert!(middle.contains("Sender..."));
    }
}
