//! Contact form rendering

use super::components::{button_width, render_button, render_panel, BUTTON_HEIGHT};
use super::theme::theme;
use crate::content::{ERROR_PANEL, SUCCESS_PANEL};
use crate::state::{ContactForm, FieldId, FormField, InputKind, MessageKind};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Maximum width of the form block
const FORM_WIDTH: u16 = 72;

/// Vertical slots of the form block, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormItem {
    Banner,
    Field(FieldId),
    ErrorPanel,
    Submit,
}

pub const FORM_ITEMS: [FormItem; 10] = [
    FormItem::Banner,
    FormItem::Field(FieldId::Name),
    FormItem::Field(FieldId::Email),
    FormItem::Field(FieldId::Phone),
    FormItem::Field(FieldId::Address),
    FormItem::Field(FieldId::ProjectType),
    FormItem::Field(FieldId::Description),
    FormItem::Field(FieldId::SiteVisit),
    FormItem::ErrorPanel,
    FormItem::Submit,
];

pub fn item_height(item: FormItem) -> u16 {
    match item {
        FormItem::Field(FieldId::Description) => 5,
        FormItem::Submit => BUTTON_HEIGHT,
        _ => 3,
    }
}

/// Row offset inside the form block and height of the item
pub fn item_span(item: FormItem) -> (u16, u16) {
    let mut offset = 0;
    for candidate in FORM_ITEMS {
        if candidate == item {
            return (offset, item_height(item));
        }
        offset += item_height(candidate);
    }
    (0, 0)
}

/// Span of the item holding the form's active row
pub fn active_item_span(form: &ContactForm) -> (u16, u16) {
    match form.active_field_id() {
        Some(id) => item_span(FormItem::Field(id)),
        None => item_span(FormItem::Submit),
    }
}

/// Draw the form block whose first row sits at screen row `top`
///
/// Items that would be cut by the viewport edges are skipped.
pub fn draw(frame: &mut Frame, viewport: Rect, top: i32, form: &ContactForm, focused: bool) {
    let width = viewport.width.saturating_sub(4).min(FORM_WIDTH);
    let x = viewport.x + 2;
    let place = |offset: u16, height: u16| -> Option<Rect> {
        let y = top + offset as i32;
        let fits = y >= viewport.y as i32 && y + height as i32 <= viewport.bottom() as i32;
        fits.then(|| Rect::new(x, y as u16, width, height))
    };

    if form.hidden {
        if form.success_panel_visible {
            if let Some(area) = place(0, 3) {
                render_panel(frame, area, theme().success, SUCCESS_PANEL, None);
            }
        }
        return;
    }

    for item in FORM_ITEMS {
        let (offset, height) = item_span(item);
        let Some(area) = place(offset, height) else {
            continue;
        };

        match item {
            FormItem::Banner => draw_banner(frame, area, form),
            FormItem::Field(id) => {
                let is_active = focused && form.active_field_id() == Some(id);
                draw_field(frame, area, form.field(id), is_active);
            }
            FormItem::ErrorPanel => {
                if form.error_panel_visible {
                    render_panel(frame, area, theme().error, ERROR_PANEL, None);
                }
            }
            FormItem::Submit => {
                let button = Rect {
                    width: button_width(&form.submit.label).min(area.width),
                    ..area
                };
                render_button(
                    frame,
                    button,
                    &form.submit.label,
                    focused && form.is_submit_row_active(),
                    !form.submit.disabled,
                );
            }
        }
    }
}

fn draw_banner(frame: &mut Frame, area: Rect, form: &ContactForm) {
    let banner = &form.banner;
    if !banner.is_visible() {
        return;
    }
    let color = match banner.kind() {
        Some(MessageKind::Success) => theme().success,
        _ => theme().error,
    };
    render_panel(frame, area, color, banner.text(), Some("Ctrl+X lukkar"));
}

/// Draw a form field
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let theme = theme();
    let border_style = if field.invalid {
        Style::default().fg(theme.error)
    } else if is_active {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.muted)
    };
    let style = if is_active {
        Style::default().fg(theme.text)
    } else {
        Style::default().fg(theme.muted)
    };

    let display_value = field.display_value();
    let display_str = match field.kind {
        InputKind::Select if is_active => format!("◂ {display_value} ▸"),
        _ if display_value.is_empty() && !is_active => "(tomt)".to_string(),
        _ => display_value,
    };

    let takes_cursor = !matches!(field.kind, InputKind::Select | InputKind::Checkbox);
    let cursor = if is_active && takes_cursor { "▌" } else { "" };
    let cursor_style = Style::default().fg(theme.accent);

    let content = if field.is_multiline() {
        let mut lines: Vec<Line> = display_str
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if display_str.ends_with('\n') {
            lines.push(Line::default());
        }
        if let Some(last) = lines.last_mut() {
            last.spans.push(Span::styled(cursor, cursor_style));
        } else {
            lines.push(Line::from(Span::styled(cursor, cursor_style)));
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_str, style),
            Span::styled(cursor, cursor_style),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
