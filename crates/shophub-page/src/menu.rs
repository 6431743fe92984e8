//! Mobile navigation menu.

/// Icon shown on the menu toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    /// Hamburger, menu closed.
    Bars,
    /// Cross, menu open.
    Times,
}

impl MenuIcon {
    /// Icon class name.
    pub fn class(&self) -> &'static str {
        match self {
            MenuIcon::Bars => "fa-bars",
            MenuIcon::Times => "fa-times",
        }
    }
}

/// Open/closed state of the mobile menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn icon(&self) -> MenuIcon {
        if self.open {
            MenuIcon::Times
        } else {
            MenuIcon::Bars
        }
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// A navigation link was followed; the menu always closes.
    pub fn link_clicked(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_state_and_icon() {
        let mut menu = MobileMenu::default();
        assert_eq!(menu.icon(), MenuIcon::Bars);

        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.icon().class(), "fa-times");

        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_link_click_closes() {
        let mut menu = MobileMenu::default();
        menu.link_clicked();
        assert!(!menu.is_open());

        menu.toggle();
        menu.link_clicked();
        assert!(!menu.is_open());
        assert_eq!(menu.icon(), MenuIcon::Bars);
    }
}
