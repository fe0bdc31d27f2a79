//! Application state and input handling
//!
//! Terminal input is translated into page events and dispatched through the
//! behavior bindings; whatever a handler leaves un-prevented falls through to
//! the app's default action.

use crate::behaviors::{init_all, Bindings};
use crate::config::SiteConfig;
use crate::content::{EMAIL_HREF, NAV_LINKS, PHONE_HREF};
use crate::controller::{ContactFormController, SubmissionState};
use crate::events::{
    Click, ClickTarget, FieldBlur, FieldInput, KeyPress, LinkActivated, Scroll, SubmitGesture,
};
use crate::platform::{is_chord, is_shortcut_modifier};
use crate::state::{ContactForm, FieldId, Focus, Form, SiteState, HEADER_ROWS, ROW_UNITS};
use crate::submission::{self, Submitter};
use crate::ui::contact_form::{active_item_span, item_span, FormItem, FORM_ITEMS};
use crate::ui::{layout, page, theme};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::sync::Arc;
use std::time::Instant;

/// Rows moved per mouse wheel notch
const WHEEL_ROWS: f32 = 3.0;

/// Main application struct
pub struct App {
    /// Page state shared with the behaviors
    pub site: SiteState,
    /// Event sources the behaviors are bound to
    pub bindings: Bindings,
    /// Whether the app should quit
    quit: bool,
    /// Feedback shown in the status bar
    pub status_message: Option<String>,
    /// Page viewport from the last resize
    page_area: Rect,
}

impl App {
    /// Create a new App instance from the loaded configuration
    pub fn new(config: &SiteConfig) -> Result<Self> {
        theme::install(config.accent_color.as_deref());
        let submitter = submission::from_config(config)?;
        Ok(Self::with_submitter(submitter))
    }

    /// Wire the page behaviors around a submission collaborator
    pub fn with_submitter(submitter: Arc<dyn Submitter>) -> Self {
        let contact = ContactFormController::attach(ContactForm::new(), submitter);
        let mut site = SiteState::new(contact);
        let mut bindings = Bindings::default();
        init_all(&mut site, &mut bindings);

        Self {
            site,
            bindings,
            quit: false,
            status_message: None,
            page_area: Rect::default(),
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether something on screen is moving and needs fast redraws
    pub fn is_animating(&self, now: Instant) -> bool {
        self.site.scroll.is_animating()
            || self.site.header.frame_pending()
            || self.site.reveal.any_fading(now)
            || self.site.contact.state() == SubmissionState::Submitting
    }

    /// Track the terminal size and re-run the scroll observers
    pub fn resize(&mut self, width: u16, height: u16) {
        let (page_area, _) = layout::create_layout(Rect::new(0, 0, width, height));
        self.page_area = page_area;
        self.site.set_viewport_rows(page_area.height);
        self.dispatch_scroll();
    }

    /// Advance animations and collect async results, once per loop iteration
    pub fn on_frame(&mut self, now: Instant) {
        if self.site.scroll.tick(now) {
            self.dispatch_scroll();
        }
        let y = self.site.scroll.y();
        self.site.header.on_animation_frame(y);

        if let Some(outcome) = self.site.contact.poll_completion() {
            if outcome.is_success() {
                self.site.focus = Focus::Page;
                self.status_message = Some("Førespurnaden er sendt".to_string());
            } else {
                self.status_message = Some("Sending feila".to_string());
            }
        }
        self.site.contact.tick(now);
    }

    // Dispatch helpers

    fn dispatch_scroll(&mut self) {
        let y = self.site.scroll.y();
        self.bindings.scrolls.dispatch(&mut self.site, Scroll { y });
    }

    fn click(&mut self, target: ClickTarget) {
        self.bindings.clicks.dispatch(&mut self.site, Click { target });
    }

    /// Follow a link; un-prevented links are handed to the system
    fn activate_link(&mut self, href: &str, in_menu: bool) {
        let event = self.bindings.links.dispatch(
            &mut self.site,
            LinkActivated {
                href: href.to_string(),
                in_menu,
            },
        );
        if !event.default_prevented() {
            self.status_message = Some(format!("Opnar {href}"));
        }
    }

    fn submit(&mut self) {
        self.bindings.submits.dispatch(&mut self.site, SubmitGesture);
    }

    fn blur_active_field(&mut self) {
        if let Some(id) = self.site.contact.form().active_field_id() {
            self.bindings.blurs.dispatch(&mut self.site, FieldBlur(id));
        }
    }

    fn input(&mut self, id: FieldId) {
        self.bindings.inputs.dispatch(&mut self.site, FieldInput(id));
    }

    /// Jump by whole rows, cancelling any smooth scroll
    fn scroll_rows(&mut self, rows: f32) {
        let before = self.site.scroll.y();
        self.site.scroll.scroll_by(rows * ROW_UNITS);
        if self.site.scroll.y() != before {
            self.dispatch_scroll();
        }
    }

    /// Rows of page content below the header
    fn content_rows(&self) -> f32 {
        self.site.viewport_rows().saturating_sub(HEADER_ROWS).max(1) as f32
    }

    // Keyboard

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.status_message = None;
        self.bindings
            .keys
            .dispatch(&mut self.site, KeyPress { code: key.code });

        match self.site.focus {
            Focus::Page => self.handle_page_key(key),
            Focus::Form => self.handle_form_key(key),
        }
    }

    fn handle_page_key(&mut self, key: KeyEvent) {
        if self.site.nav.is_open() {
            match key.code {
                KeyCode::Up | KeyCode::Char('k') => self.site.nav.select_prev(NAV_LINKS.len()),
                KeyCode::Down | KeyCode::Char('j') => self.site.nav.select_next(NAV_LINKS.len()),
                KeyCode::Enter => {
                    if let Some((_, href)) = NAV_LINKS.get(self.site.nav.selected_link) {
                        self.activate_link(href, true);
                    }
                }
                KeyCode::Char('m') => self.click(ClickTarget::NavToggle),
                KeyCode::Char('q') => self.quit = true,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('m') => self.click(ClickTarget::NavToggle),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_rows(-1.0),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_rows(1.0),
            KeyCode::PageUp => self.scroll_rows(-self.content_rows()),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_rows(self.content_rows()),
            KeyCode::Home => self.scroll_rows(-self.site.scroll.max() / ROW_UNITS),
            KeyCode::End => self.scroll_rows(self.site.scroll.max() / ROW_UNITS),
            KeyCode::Char('f') | KeyCode::Tab => self.focus_form(),
            KeyCode::Char('p') => self.activate_link(PHONE_HREF, false),
            KeyCode::Char('e') => self.activate_link(EMAIL_HREF, false),
            _ => {}
        }
    }

    /// Scroll to the contact section and move keyboard focus into the form
    fn focus_form(&mut self) {
        self.activate_link("#kontakt", false);
        if !self.site.contact.form().hidden {
            self.site.focus = Focus::Form;
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        if self.site.contact.form().hidden {
            if key.code == KeyCode::Esc {
                self.site.focus = Focus::Page;
            }
            return;
        }

        let active = self.site.contact.form().active_field_id();
        let on_submit_row = active.is_none();

        match key.code {
            KeyCode::Esc => {
                self.blur_active_field();
                self.site.focus = Focus::Page;
            }
            KeyCode::Char('s') if is_shortcut_modifier(key.modifiers) => self.submit(),
            KeyCode::Char('x') if is_shortcut_modifier(key.modifiers) => {
                self.site.contact.form_mut().banner.hide();
            }
            KeyCode::Tab | KeyCode::Down => {
                self.blur_active_field();
                self.site.contact.form_mut().next_field();
                self.follow_active_field();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.blur_active_field();
                self.site.contact.form_mut().prev_field();
                self.follow_active_field();
            }
            KeyCode::Enter if on_submit_row => self.submit(),
            KeyCode::Enter => {
                let Some(id) = active else { return };
                if self.site.contact.form().field(id).is_multiline() {
                    self.site.contact.form_mut().field_mut(id).push_char('\n');
                    self.input(id);
                } else {
                    self.blur_active_field();
                    self.site.contact.form_mut().next_field();
                    self.follow_active_field();
                }
            }
            KeyCode::Left | KeyCode::Right => {
                let Some(id) = active else { return };
                let forward = key.code == KeyCode::Right;
                if self.site.contact.form_mut().field_mut(id).cycle_choice(forward) {
                    self.input(id);
                }
            }
            KeyCode::Char(c) if !is_chord(key.modifiers) => {
                let Some(id) = active else { return };
                if self.site.contact.form_mut().field_mut(id).push_char(c) {
                    self.input(id);
                }
            }
            KeyCode::Backspace => {
                let Some(id) = active else { return };
                if self.site.contact.form_mut().field_mut(id).pop_char() {
                    self.input(id);
                }
            }
            _ => {}
        }
    }

    /// Scroll just enough to keep the active form row on screen
    fn follow_active_field(&mut self) {
        let Some(form) = self.site.layout.form else {
            return;
        };
        let (offset, height) = active_item_span(self.site.contact.form());
        let top = (form.top + offset) as f32;
        let bottom = top + height as f32;

        let first = self.site.scroll.first_row() as f32 + HEADER_ROWS as f32;
        let last = self.site.scroll.first_row() as f32 + self.site.viewport_rows() as f32;
        if top < first {
            self.scroll_rows(top - first);
        } else if bottom > last {
            self.scroll_rows(bottom - last);
        }
    }

    // Mouse

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.status_message = None;
                let target = layout::hit_test(
                    self.page_area,
                    self.site.nav.is_open(),
                    mouse.column,
                    mouse.row,
                );
                self.click(target);

                match target {
                    ClickTarget::NavMenu(Some(idx)) => {
                        if let Some((_, href)) = NAV_LINKS.get(idx) {
                            self.activate_link(href, true);
                        }
                    }
                    ClickTarget::Elsewhere => self.click_page(mouse.row),
                    _ => {}
                }
            }
            MouseEventKind::ScrollUp => self.scroll_rows(-WHEEL_ROWS),
            MouseEventKind::ScrollDown => self.scroll_rows(WHEEL_ROWS),
            _ => {}
        }
    }

    /// Click on the page body below the header
    fn click_page(&mut self, row: u16) {
        if row < self.page_area.y + HEADER_ROWS || row >= self.page_area.bottom() {
            return;
        }
        let page_row = row - self.page_area.y + self.site.scroll.first_row();

        if let Some(href) = page::link_at_row(&self.site.layout, page_row) {
            self.activate_link(href, false);
            return;
        }

        let item = self
            .site
            .layout
            .form
            .filter(|_| !self.site.contact.form().hidden)
            .and_then(|form| page_row.checked_sub(form.top))
            .and_then(form_item_at);

        match item {
            Some(FormItem::Field(id)) => self.focus_field(Some(id)),
            Some(FormItem::Submit) => {
                self.focus_field(None);
                self.submit();
            }
            _ => {
                if self.site.focus == Focus::Form {
                    self.blur_active_field();
                    self.site.focus = Focus::Page;
                }
            }
        }
    }

    /// Focus a field, or the submit row for `None`
    fn focus_field(&mut self, id: Option<FieldId>) {
        if self.site.focus == Focus::Form && self.site.contact.form().active_field_id() != id {
            self.blur_active_field();
        }
        let index = match id {
            Some(id) => FieldId::ALL.iter().position(|f| *f == id).unwrap_or(0),
            None => FieldId::ALL.len(),
        };
        self.site.contact.form_mut().set_active_field(index);
        self.site.focus = Focus::Form;
    }
}

/// Form item covering a row offset inside the form block
fn form_item_at(offset: u16) -> Option<FormItem> {
    FORM_ITEMS.into_iter().find(|item| {
        let (top, height) = item_span(*item);
        offset >= top && offset < top + height
    })
}
