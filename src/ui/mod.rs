//! UI module for rendering the TUI

pub mod components;
pub mod contact_form;
pub mod layout;
pub mod page;
pub mod theme;

use crate::app::App;
use ratatui::Frame;
use std::time::Instant;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (page_area, status_area) = layout::create_layout(frame.area());

    // Page first, the header and menu overlay it
    page::draw(frame, page_area, app, Instant::now());
    layout::draw_header(frame, page_area, &app.site);
    layout::draw_nav_menu(frame, page_area, &app.site);

    layout::draw_status_bar(frame, status_area, app);
}
