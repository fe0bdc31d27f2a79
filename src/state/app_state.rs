//! Page-wide state shared by every behavior

use super::nav::NavMenu;
use super::page::{PageLayout, HEADER_ROWS};
use super::reveal::RevealWatcher;
use super::scroll::{HeaderShadow, PageScroll, ROW_UNITS};
use crate::content::SECTIONS;
use crate::controller::ContactFormController;

/// Where keyboard input goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Page,
    Form,
}

/// Everything the page's behaviors read and mutate
pub struct SiteState {
    pub layout: PageLayout,
    pub scroll: PageScroll,
    pub header: HeaderShadow,
    pub nav: NavMenu,
    pub reveal: RevealWatcher,
    pub contact: ContactFormController,
    pub focus: Focus,
    /// Rows available to the page (terminal height minus status bar)
    viewport_rows: u16,
}

impl SiteState {
    pub fn new(contact: ContactFormController) -> Self {
        Self {
            layout: PageLayout::build(SECTIONS),
            scroll: PageScroll::default(),
            header: HeaderShadow::default(),
            nav: NavMenu::default(),
            reveal: RevealWatcher::default(),
            contact,
            focus: Focus::default(),
            viewport_rows: 0,
        }
    }

    pub fn viewport_rows(&self) -> u16 {
        self.viewport_rows
    }

    /// Track a resized viewport and update the scrollable range
    pub fn set_viewport_rows(&mut self, rows: u16) {
        self.viewport_rows = rows;
        self.scroll.set_max(self.layout.max_scroll(rows));
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_rows as f32 * ROW_UNITS
    }

    pub fn header_height(&self) -> f32 {
        HEADER_ROWS as f32 * ROW_UNITS
    }
}
