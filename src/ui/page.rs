//! Scrolling page body: sections, cards, contact form and footer

use super::contact_form;
use super::theme::theme;
use crate::app::App;
use crate::content::{
    Card, Section, EMAIL_HREF, EMAIL_LABEL, PHONE_HREF, PHONE_LABEL, SECTIONS, SITE_NAME,
};
use crate::state::{Focus, PageLayout, RevealWatcher, HEADER_ROWS};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::time::Instant;

/// Left margin of page text
const INDENT: &str = "  ";

/// Draw the page body into `area`; the header is drawn over its top rows
pub fn draw(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
    let site = &app.site;
    let first_row = site.scroll.first_row();
    let lines = page_lines(&site.layout, &site.reveal, area.width, now);

    let mut style = Style::default().fg(theme().text);
    if site.nav.body_nav_open() {
        style = style.add_modifier(Modifier::DIM);
    }

    frame.render_widget(
        Paragraph::new(lines).style(style).scroll((first_row, 0)),
        area,
    );

    if let Some(form) = site.layout.form {
        // Items under the header overlay are skipped rather than half drawn
        let below_header = Rect {
            y: area.y + HEADER_ROWS.min(area.height),
            height: area.height.saturating_sub(HEADER_ROWS),
            ..area
        };
        let top = area.y as i32 + form.top as i32 - first_row as i32;
        contact_form::draw(
            frame,
            below_header,
            top,
            site.contact.form(),
            site.focus == Focus::Form,
        );
    }
}

/// One line per page row
fn page_lines(
    layout: &PageLayout,
    reveal: &RevealWatcher,
    width: u16,
    now: Instant,
) -> Vec<Line<'static>> {
    let theme = theme();
    let mut lines = vec![Line::default(); layout.total_rows as usize];
    let text_width = (width as usize).saturating_sub(INDENT.len() * 2).max(10);

    for (section, boxed) in SECTIONS.iter().zip(&layout.sections) {
        let row = boxed.title_row as usize;
        lines[row] = Line::from(Span::styled(
            format!("{INDENT}{}", section.title),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ));
        lines[row + 1] = Line::from(Span::styled(
            format!("{INDENT}{}", section.intro),
            Style::default().fg(theme.muted),
        ));
    }

    for (idx, card_box) in layout.cards.iter().enumerate() {
        if !reveal.is_revealed(idx) {
            continue;
        }
        let Some(card) = card_at(SECTIONS, card_box.section, card_box.card) else {
            continue;
        };

        let progress = reveal.progress(idx, now);
        let color = theme.fade(progress);
        // Cards slide up into place during the first half of the fade
        let shift = usize::from(progress < 0.5);
        let top = card_box.span.top as usize + shift;
        let body_rows = card_box.span.height as usize - 1 - shift;

        lines[top] = Line::from(vec![
            Span::styled(format!("{INDENT}▍ "), Style::default().fg(theme.accent)),
            Span::styled(
                card.title,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]);
        for (offset, text) in wrap_words(card.body, text_width, body_rows)
            .into_iter()
            .enumerate()
        {
            lines[top + 1 + offset] = Line::from(Span::styled(
                format!("{INDENT}  {text}"),
                Style::default().fg(color),
            ));
        }
    }

    let footer = layout.footer.top as usize;
    lines[footer] = Line::from(vec![
        Span::raw(format!("{INDENT}Telefon: ")),
        Span::styled(
            PHONE_LABEL,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::UNDERLINED),
        ),
    ]);
    lines[footer + 1] = Line::from(vec![
        Span::raw(format!("{INDENT}E-post:  ")),
        Span::styled(
            EMAIL_LABEL,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::UNDERLINED),
        ),
    ]);
    lines[footer + 2] = Line::from(Span::styled(
        format!("{INDENT}© {SITE_NAME}"),
        Style::default().fg(theme.muted),
    ));

    lines
}

fn card_at(sections: &[Section], section: usize, card: usize) -> Option<&Card> {
    sections.get(section)?.cards.get(card)
}

/// Greedy word wrap, truncated to `max_lines`
fn wrap_words(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed =
            current.chars().count() + word.chars().count() + usize::from(!current.is_empty());
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            last.push('…');
        }
    }
    lines
}

/// Link under a page row, if any
pub fn link_at_row(layout: &PageLayout, page_row: u16) -> Option<&'static str> {
    match page_row.checked_sub(layout.footer.top)? {
        0 => Some(PHONE_HREF),
        1 => Some(EMAIL_HREF),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod wrapping {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_wraps_on_word_boundaries() {
            assert_eq!(
                wrap_words("tak og bad og kjøkken", 10, 5),
                vec!["tak og bad", "og kjøkken"]
            );
        }

        #[test]
        fn test_truncates_extra_lines() {
            assert_eq!(wrap_words("a b c d", 1, 2), vec!["a", "b…"]);
        }

        #[test]
        fn test_long_word_gets_own_line() {
            assert_eq!(wrap_words("synfaring x", 4, 3), vec!["synfaring", "x"]);
        }
    }

    mod lines {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_one_line_per_row() {
            let layout = PageLayout::build(SECTIONS);
            let lines = page_lines(&layout, &RevealWatcher::default(), 80, Instant::now());
            assert_eq!(lines.len(), layout.total_rows as usize);
        }

        #[test]
        fn test_unrevealed_cards_are_blank() {
            let layout = PageLayout::build(SECTIONS);
            let mut reveal = RevealWatcher::default();
            for card in &layout.cards {
                reveal.observe(card.span.extent());
            }
            let lines = page_lines(&layout, &reveal, 80, Instant::now());
            let first = layout.cards[0].span.top as usize;
            assert!(lines[first].spans.is_empty());
        }

        #[test]
        fn test_revealed_card_settles_on_its_row() {
            let layout = PageLayout::build(SECTIONS);
            let mut reveal = RevealWatcher::default();
            for card in &layout.cards {
                reveal.observe(card.span.extent());
            }
            let start = Instant::now();
            let first = layout.cards[0].span;
            reveal.check(first.extent().top, first.extent().height, start);

            let settled = page_lines(&layout, &reveal, 80, start + RevealWatcher::FADE_DURATION);
            let title: String = settled[first.top as usize]
                .spans
                .iter()
                .map(|s| s.content.to_string())
                .collect();
            assert!(title.contains(SECTIONS[1].cards[0].title));

            let sliding = page_lines(&layout, &reveal, 80, start);
            assert!(sliding[first.top as usize].spans.is_empty());
        }
    }

    #[test]
    fn test_link_at_row() {
        let layout = PageLayout::build(SECTIONS);
        assert_eq!(link_at_row(&layout, layout.footer.top), Some(PHONE_HREF));
        assert_eq!(link_at_row(&layout, layout.footer.top + 1), Some(EMAIL_HREF));
        assert_eq!(link_at_row(&layout, layout.footer.top + 2), None);
        assert_eq!(link_at_row(&layout, 0), None);
    }
}
