//! One-shot section reveal bookkeeping.
//!
//! Sections are revealed the first time at least `REVEAL_THRESHOLD` of them
//! is visible, or at load when their top already sits inside the initial
//! viewport band. After that a section is never reported again. Revealing
//! the skills section also asks for the progress-bar animation.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::HashSet;

/// Fraction of a section that must be visible to reveal it.
pub const REVEAL_THRESHOLD: f64 = 0.2;
/// Fraction of the viewport height treated as "already in view" at load.
pub const INITIAL_VIEW_FRACTION: f64 = 0.8;
/// Class marking a revealed section.
pub const REVEALED_CLASS: &str = "animate";
/// Class shared by every observed section.
pub const SECTION_CLASS: &str = "section";
/// Section whose reveal animates the skill bars.
pub const SKILLS_SECTION_ID: &str = "skills";
/// Delay between resetting bars to zero and restoring their target width.
pub const BAR_ANIMATION_DELAY_MS: u32 = 100;

/// What the DOM layer must do after a reveal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reveal {
    pub section_id: String,
    pub animate_skill_bars: bool,
}

/// Tracks which sections have already been revealed.
#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    revealed: HashSet<String>,
}

impl RevealTracker {
    pub fn is_revealed(&self, section_id: &str) -> bool {
        self.revealed.contains(section_id)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    /// Feed one visibility observation. Returns the reveal to apply the first
    /// time `ratio` crosses the threshold, and `None` ever after.
    pub fn observe(&mut self, section_id: &str, intersecting: bool, ratio: f64) -> Option<Reveal> {
        if !intersecting || ratio < REVEAL_THRESHOLD {
            return None;
        }
        self.reveal(section_id)
    }

    /// Load-time check: reveal a section whose top is already above the
    /// initial viewport band.
    pub fn check_initial(&mut self, section_id: &str, top: f64, viewport_height: f64) -> Option<Reveal> {
        if !in_initial_view(top, viewport_height) {
            return None;
        }
        self.reveal(section_id)
    }

    fn reveal(&mut self, section_id: &str) -> Option<Reveal> {
        if !self.revealed.insert(section_id.to_owned()) {
            return None;
        }
        Some(Reveal {
            section_id: section_id.to_owned(),
            animate_skill_bars: section_id == SKILLS_SECTION_ID,
        })
    }
}

/// Whether a section with bounding-rect `top` counts as visible at load.
pub fn in_initial_view(top: f64, viewport_height: f64) -> bool {
    top < viewport_height * INITIAL_VIEW_FRACTION
}

/// Two-step width sequence for one progress bar: collapse to zero, then
/// restore the captured target once the collapse has been painted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BarAnimation {
    pub target_width: String,
}

impl BarAnimation {
    /// Capture the bar's current inline width as the target.
    pub fn capture(current_width: &str) -> Self {
        Self { target_width: current_width.to_owned() }
    }

    pub fn reset_width(&self) -> &'static str {
        "0"
    }

    pub fn final_width(&self) -> &str {
        &self.target_width
    }
}
