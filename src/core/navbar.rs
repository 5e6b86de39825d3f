//! Navigation bar state

/// Scroll offset (px) above which the bar switches to its condensed style
pub const SCROLL_THRESHOLD: f64 = 20.0;

/// Visual style of the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarStyle {
    Transparent,
    Condensed,
}

impl NavbarStyle {
    pub fn class(&self) -> &'static str {
        match self {
            NavbarStyle::Transparent => "bg-transparent py-6",
            NavbarStyle::Condensed => "bg-navy-900/80 backdrop-blur-md border-b border-white/5 py-4",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavbarState {
    scrolled: bool,
    mobile_menu_open: bool,
}

impl NavbarState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a sampled scroll offset. Returns true when the style changed.
    pub fn scroll_to(&mut self, offset: f64) -> bool {
        let scrolled = offset > SCROLL_THRESHOLD;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn style(&self) -> NavbarStyle {
        if self.scrolled {
            NavbarStyle::Condensed
        } else {
            NavbarStyle::Transparent
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// A navigation link was chosen
    pub fn link_selected(&mut self) {
        self.mobile_menu_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let nav = NavbarState::new();
        assert_eq!(nav.style(), NavbarStyle::Transparent);
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_threshold_is_strict() {
        let mut nav = NavbarState::new();
        assert!(!nav.scroll_to(20.0));
        assert_eq!(nav.style(), NavbarStyle::Transparent);
        assert!(nav.scroll_to(20.5));
        assert_eq!(nav.style(), NavbarStyle::Condensed);
    }

    #[test]
    fn test_scroll_flips_once_each_way() {
        let mut nav = NavbarState::new();
        let flips: usize = [0.0, 5.0, 21.0, 40.0, 300.0, 25.0]
            .into_iter()
            .filter(|&y| nav.scroll_to(y))
            .count();
        assert_eq!(flips, 1);
        assert!(nav.is_scrolled());

        assert!(nav.scroll_to(10.0));
        assert!(!nav.scroll_to(0.0));
        assert_eq!(nav.style(), NavbarStyle::Transparent);
    }

    #[test]
    fn test_menu_toggle_and_link_close() {
        let mut nav = NavbarState::new();
        nav.toggle_menu();
        assert!(nav.is_menu_open());
        nav.link_selected();
        assert!(!nav.is_menu_open());
        nav.toggle_menu();
        nav.toggle_menu();
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_scroll_does_not_touch_menu() {
        let mut nav = NavbarState::new();
        nav.toggle_menu();
        nav.scroll_to(500.0);
        assert!(nav.is_menu_open());
    }
}
