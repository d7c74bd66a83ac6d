//! Mobile navigation menu open/closed flag.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Open/closed state shared by the hamburger's `aria-expanded` attribute and
/// the panel's open class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    open: bool,
}

impl NavState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Handle a document click. Clicks inside the nav region are left to the
    /// nav's own handlers; clicks outside close an open menu.
    ///
    /// Returns `true` when the click closed the menu.
    pub fn click_outside(&mut self, inside_nav: bool) -> bool {
        if inside_nav || !self.open {
            return false;
        }
        self.close();
        true
    }

    /// Value for the hamburger's `aria-expanded` attribute.
    pub fn aria_expanded(self) -> &'static str {
        if self.open { "true" } else { "false" }
    }
}
