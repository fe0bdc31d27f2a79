//! Mobile navigation menu state

use crate::events::ClickTarget;

/// Open/closed navigation menu
///
/// The toggle button, the menu panel and the page body all render from the
/// same flag, so they can never disagree.
#[derive(Debug, Clone, Default)]
pub struct NavMenu {
    open: bool,
    /// Highlighted link while the menu is open
    pub selected_link: usize,
}

impl NavMenu {
    pub fn toggle(&mut self) {
        self.open = !self.open;
        self.selected_link = 0;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// "active" class on the toggle button
    pub fn toggle_active(&self) -> bool {
        self.open
    }

    /// "active" class on the menu panel
    pub fn menu_active(&self) -> bool {
        self.open
    }

    /// "nav-open" class on the page body
    pub fn body_nav_open(&self) -> bool {
        self.open
    }

    /// Route a click through the menu's open/close rules
    pub fn handle_click(&mut self, target: ClickTarget) {
        match target {
            ClickTarget::NavToggle => self.toggle(),
            ClickTarget::NavMenu(Some(_)) => self.close(),
            ClickTarget::NavMenu(None) => {}
            ClickTarget::Elsewhere => self.close(),
        }
    }

    pub fn select_next(&mut self, link_count: usize) {
        if link_count > 0 {
            self.selected_link = (self.selected_link + 1) % link_count;
        }
    }

    pub fn select_prev(&mut self, link_count: usize) {
        if link_count > 0 {
            self.selected_link = (self.selected_link + link_count - 1) % link_count;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_lockstep(nav: &NavMenu, open: bool) {
        assert_eq!(nav.is_open(), open);
        assert_eq!(nav.toggle_active(), open);
        assert_eq!(nav.menu_active(), open);
        assert_eq!(nav.body_nav_open(), open);
    }

    #[test]
    fn test_starts_closed() {
        assert_lockstep(&NavMenu::default(), false);
    }

    #[test]
    fn test_toggle_button_opens_and_closes() {
        let mut nav = NavMenu::default();
        nav.handle_click(ClickTarget::NavToggle);
        assert_lockstep(&nav, true);
        nav.handle_click(ClickTarget::NavToggle);
        assert_lockstep(&nav, false);
    }

    #[test]
    fn test_link_click_closes() {
        let mut nav = NavMenu::default();
        nav.toggle();
        nav.handle_click(ClickTarget::NavMenu(Some(2)));
        assert_lockstep(&nav, false);
    }

    #[test]
    fn test_click_inside_menu_padding_keeps_open() {
        let mut nav = NavMenu::default();
        nav.toggle();
        nav.handle_click(ClickTarget::NavMenu(None));
        assert_lockstep(&nav, true);
    }

    #[test]
    fn test_click_outside_closes() {
        let mut nav = NavMenu::default();
        nav.toggle();
        nav.handle_click(ClickTarget::Elsewhere);
        assert_lockstep(&nav, false);
    }

    #[test]
    fn test_outside_click_when_closed_is_noop() {
        let mut nav = NavMenu::default();
        nav.handle_click(ClickTarget::Elsewhere);
        assert_lockstep(&nav, false);
    }

    #[test]
    fn test_link_selection_wraps() {
        let mut nav = NavMenu::default();
        nav.toggle();
        nav.select_prev(5);
        assert_eq!(nav.selected_link, 4);
        nav.select_next(5);
        assert_eq!(nav.selected_link, 0);
        nav.select_next(0);
        assert_eq!(nav.selected_link, 0);
    }
}
