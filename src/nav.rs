//! Navbar state: section links, the scrolled flag and the mobile menu.

use crate::content::UiLabels;

/// Vertical offset in px past which the navbar switches to its compact style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

pub fn is_scrolled(offset_y: f64) -> bool {
    offset_y > SCROLL_THRESHOLD
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub fn nav_links(ui: &UiLabels) -> [NavLink; 3] {
    [
        NavLink {
            name: ui.experience,
            href: "#experience",
        },
        NavLink {
            name: ui.skills,
            href: "#skills",
        },
        NavLink {
            name: ui.education,
            href: "#education",
        },
    ]
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Following a link inside the menu closes it.
    pub fn link_activated(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{DATA_EN, DATA_PT};

    #[test]
    fn test_scroll_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(900.0));
        // re-evaluated continuously, scrolling back clears it
        assert!(!is_scrolled(10.0));
    }

    #[test]
    fn test_nav_links_follow_language() {
        let pt = nav_links(&DATA_PT.ui);
        let en = nav_links(&DATA_EN.ui);
        assert_eq!(
            pt.map(|l| l.href),
            ["#experience", "#skills", "#education"]
        );
        assert_eq!(pt.map(|l| l.href), en.map(|l| l.href));
        assert_eq!(pt[0].name, "Experiência");
        assert_eq!(en[0].name, "Experience");
    }

    #[test]
    fn test_mobile_menu() {
        let mut menu = MobileMenu::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.link_activated();
        assert!(!menu.is_open());
        menu.toggle();
        menu.toggle();
        assert!(!menu.is_open());
        // closing a closed menu is harmless
        menu.close();
        assert!(!menu.is_open());
    }
}
