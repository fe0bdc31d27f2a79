//! Reusable UI components

mod button;
mod panel;

pub use button::{button_width, render_button, BUTTON_HEIGHT};
pub use panel::render_panel;
