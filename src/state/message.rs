//! Dismissible message banner shown inside the contact form

use std::time::{Duration, Instant};

/// Banner flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Error,
    Success,
}

/// Banner state with its pending auto-hide deadlines
///
/// Every `show` arms its own deadline. Deadlines are never cancelled, so an
/// older one may hide a newer message; hiding is idempotent.
#[derive(Debug, Clone, Default)]
pub struct MessageBanner {
    kind: Option<MessageKind>,
    text: String,
    visible: bool,
    hide_at: Vec<Instant>,
}

impl MessageBanner {
    /// Auto-hide interval for every message
    pub const TIMEOUT: Duration = Duration::from_secs(5);

    pub fn show(&mut self, kind: MessageKind, text: impl Into<String>) {
        self.show_at(kind, text, Instant::now());
    }

    pub fn show_at(&mut self, kind: MessageKind, text: impl Into<String>, now: Instant) {
        self.kind = Some(kind);
        self.text = text.into();
        self.visible = true;
        self.hide_at.push(now + Self::TIMEOUT);
    }

    /// Fire every deadline that has passed
    pub fn tick(&mut self, now: Instant) {
        let before = self.hide_at.len();
        self.hide_at.retain(|deadline| *deadline > now);
        if self.hide_at.len() != before {
            self.hide();
        }
    }

    /// Hide the banner (user dismissal or an expired deadline)
    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn kind(&self) -> Option<MessageKind> {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    #[cfg(test)]
    pub fn pending_timers(&self) -> usize {
        self.hide_at.len()
    }
}
