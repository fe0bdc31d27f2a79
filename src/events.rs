//! Typed UI events and the sources handlers subscribe to

use crate::state::FieldId;
use crossterm::event::KeyCode;

/// A dispatched UI event carrying its payload and default-behavior flag
#[derive(Debug, Clone)]
pub struct Event<T> {
    payload: T,
    default_prevented: bool,
}

impl<T> Event<T> {
    pub fn new(payload: T) -> Self {
        Self {
            payload,
            default_prevented: false,
        }
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// Suppress the default behavior of the gesture
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Handler registered on an event source
pub type Handler<C, T> = fn(&mut C, &mut Event<T>);

/// A typed source of UI events
///
/// Handlers run in registration order against the shared context `C`.
pub struct EventSource<C, T> {
    handlers: Vec<Handler<C, T>>,
}

impl<C, T> EventSource<C, T> {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, handler: Handler<C, T>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Run every handler and hand the event back so the caller can honor
    /// `default_prevented`
    pub fn dispatch(&self, ctx: &mut C, payload: T) -> Event<T> {
        let mut event = Event::new(payload);
        for handler in &self.handlers {
            handler(ctx, &mut event);
        }
        event
    }
}

impl<C, T> Default for EventSource<C, T> {
    fn default() -> Self {
        Self::new()
    }
}

/// What a mouse click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    NavToggle,
    /// Inside the open menu panel, optionally on one of its links
    NavMenu(Option<usize>),
    /// Anywhere else on the page
    Elsewhere,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Click {
    pub target: ClickTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub code: KeyCode,
}

/// Vertical scroll offset changed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scroll {
    pub y: f32,
}

/// A link was activated (clicked or chosen with Enter)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkActivated {
    pub href: String,
    /// Whether the link lives inside the navigation menu
    pub in_menu: bool,
}

/// The form's submit gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitGesture;

/// Focus left a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldBlur(pub FieldId);

/// A field's value changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInput(pub FieldId);
