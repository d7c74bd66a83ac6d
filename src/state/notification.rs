//! Transient notification banner timeline.
//!
//! A notification is shown immediately, retracted after `VISIBLE_MS`, and
//! hidden from assistive technology `RETRACT_MS` later. Every `show` bumps
//! `seq`; the delayed steps carry the sequence they were scheduled under, so
//! a newer notification restarts the timeline and stale steps are dropped.

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

/// Time the banner stays visible.
pub const VISIBLE_MS: u32 = 5000;
/// Transition window between retracting and hiding from assistive tech.
pub const RETRACT_MS: u32 = 500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    /// Modifier class on the banner element.
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Font Awesome icon classes for the banner.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "fas fa-check-circle",
            Self::Error => "fas fa-exclamation-circle",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Error, message: message.into() }
    }
}

/// Banner state: current content, visibility, and the timeline sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationState {
    pub current: Option<Notification>,
    pub visible: bool,
    pub aria_hidden: bool,
    pub seq: u64,
}

impl Default for NotificationState {
    fn default() -> Self {
        Self { current: None, visible: false, aria_hidden: true, seq: 0 }
    }
}

impl NotificationState {
    /// Show `notification` now and return the sequence to pass to the
    /// delayed `retract`/`conceal` steps.
    pub fn show(&mut self, notification: Notification) -> u64 {
        self.seq += 1;
        self.current = Some(notification);
        self.visible = true;
        self.aria_hidden = false;
        self.seq
    }

    /// First delayed step: drop the visible flag. Ignored when stale.
    pub fn retract(&mut self, seq: u64) -> bool {
        if seq != self.seq || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    /// Second delayed step: hide from assistive technology. Ignored when
    /// stale or when the banner is visible again.
    pub fn conceal(&mut self, seq: u64) -> bool {
        if seq != self.seq || self.visible {
            return false;
        }
        self.aria_hidden = true;
        true
    }

    /// Full class list for the banner element.
    pub fn class_name(&self) -> String {
        let mut class = String::from("notification");
        if let Some(current) = &self.current {
            class.push(' ');
            class.push_str(current.kind.class());
        }
        if self.visible {
            class.push_str(" show");
        }
        class
    }

    pub fn aria_hidden_attr(&self) -> &'static str {
        if self.aria_hidden { "true" } else { "false" }
    }
}
