//! Typed-text animation state machine.
//!
//! DESIGN
//! ======
//! The animator is a pure step function: each `tick` returns the text to
//! display and the delay before the next tick. The browser side
//! (`components::hero`) owns the timer loop and cancels it on unmount, so
//! the cycle here never needs to know about scheduling.
//!
//! The character counter runs one past the word length while typing; that
//! extra tick is where the full word holds before the long pause.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

/// Delay before the first tick after mount.
pub const START_DELAY_MS: u32 = 1000;
/// Cadence while appending characters.
pub const TYPE_DELAY_MS: u32 = 150;
/// Cadence while removing characters.
pub const DELETE_DELAY_MS: u32 = 50;
/// Hold once the full word is shown.
pub const FULL_PAUSE_MS: u32 = 2000;
/// Hold once the word is fully deleted, before the next word starts.
pub const EMPTY_PAUSE_MS: u32 = 700;

/// Words cycled by the hero heading.
pub const PROFESSIONS: [&str; 4] = [
    "Full Stack Developer",
    "AI Engineer",
    "Python Developer",
    "Machine Learning Engineer",
];

/// Where the animator sits between ticks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Typing,
    /// Full word shown; the next tick starts deleting.
    PausedAtFull,
    Deleting,
    /// Word cleared and index advanced; the next tick starts typing.
    PausedAtEmpty,
}

/// Output of one animation step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tick {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Clone, Debug)]
pub struct TypingAnimator {
    words: Vec<String>,
    index: usize,
    char_count: usize,
    phase: Phase,
}

impl TypingAnimator {
    /// Build an animator over `words`. Returns `None` for an empty list,
    /// which leaves nothing to animate.
    pub fn new<I, S>(words: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = words.into_iter().map(Into::into).collect::<Vec<_>>();
        if words.is_empty() {
            return None;
        }
        Some(Self { words, index: 0, char_count: 0, phase: Phase::Typing })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_deleting(&self) -> bool {
        matches!(self.phase, Phase::Deleting | Phase::PausedAtFull)
    }

    /// Advance one step.
    pub fn tick(&mut self) -> Tick {
        let word = &self.words[self.index];
        let len = word.chars().count();

        if self.is_deleting() {
            let text = prefix(word, self.char_count.saturating_sub(1));
            self.char_count = self.char_count.saturating_sub(1);
            if self.char_count == 0 {
                self.index = (self.index + 1) % self.words.len();
                self.phase = Phase::PausedAtEmpty;
                return Tick { text, delay_ms: EMPTY_PAUSE_MS };
            }
            self.phase = Phase::Deleting;
            Tick { text, delay_ms: DELETE_DELAY_MS }
        } else {
            let text = prefix(word, self.char_count + 1);
            self.char_count += 1;
            if self.char_count == len + 1 {
                self.phase = Phase::PausedAtFull;
                return Tick { text, delay_ms: FULL_PAUSE_MS };
            }
            self.phase = Phase::Typing;
            Tick { text, delay_ms: TYPE_DELAY_MS }
        }
    }
}

/// The cycle never ends, so iteration never yields `None`.
impl Iterator for TypingAnimator {
    type Item = Tick;

    fn next(&mut self) -> Option<Tick> {
        Some(self.tick())
    }
}

fn prefix(word: &str, chars: usize) -> String {
    word.chars().take(chars).collect()
}
