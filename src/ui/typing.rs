//! Typewriter text cycler
//!
//! A two-role state machine: type one character per tick until the phrase is
//! complete, hold once, then delete one character per tick until empty and
//! move to the next phrase (wrapping). Each tick reports the text to display
//! and the delay before the next tick; the caller owns the scheduling.

use std::cell::Cell;
use std::rc::Rc;

/// One tick's output: what to show and how long to wait before the next tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeFrame {
    pub text: String,
    pub delay_ms: u32,
}

/// Typewriter state over a fixed phrase list
///
/// Invariants:
/// - `text_index` is always a valid phrase index (advance wraps)
/// - `char_index` stays in `[0, current phrase char count]`
/// - `deleting` flips only at the full-phrase and empty boundaries
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    speed_ms: u32,
    pause_ms: u32,
    text_index: usize,
    char_index: usize,
    deleting: bool,
}

impl Typewriter {
    /// Returns `None` for an empty phrase list (the behavior then no-ops)
    pub fn new(phrases: Vec<String>, speed_ms: u32, pause_ms: u32) -> Option<Self> {
        if phrases.is_empty() {
            return None;
        }
        Some(Self {
            phrases,
            speed_ms,
            pause_ms,
            text_index: 0,
            char_index: 0,
            deleting: false,
        })
    }

    /// Index of the phrase currently being typed or deleted
    pub fn text_index(&self) -> usize {
        self.text_index
    }

    /// Advance one tick
    ///
    /// The pause delay is emitted exactly once per phrase: on the tick that
    /// completes it. Finishing a deletion advances the phrase with no
    /// special delay.
    pub fn step(&mut self) -> TypeFrame {
        let phrase = &self.phrases[self.text_index];
        let len = phrase.chars().count();

        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
        } else {
            self.char_index = (self.char_index + 1).min(len);
        }
        let text: String = phrase.chars().take(self.char_index).collect();

        let mut delay_ms = self.speed_ms;
        if !self.deleting && self.char_index == len {
            self.deleting = true;
            delay_ms = self.pause_ms;
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.text_index = (self.text_index + 1) % self.phrases.len();
        }

        TypeFrame { text, delay_ms }
    }
}

/// Stop handle for a running typewriter loop
///
/// The tick loop checks [`TypingTask::is_active`] before every step, so a
/// `stop()` takes effect at the next scheduled tick. Dropping clones does
/// not stop the loop; the page never stops it at all (teardown does).
#[derive(Debug, Clone)]
pub struct TypingTask {
    active: Rc<Cell<bool>>,
}

impl Default for TypingTask {
    fn default() -> Self {
        Self::new()
    }
}

impl TypingTask {
    pub fn new() -> Self {
        Self {
            active: Rc::new(Cell::new(true)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    pub fn stop(&self) {
        self.active.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn typewriter(phrases: &[&str]) -> Typewriter {
        Typewriter::new(phrases.iter().map(|s| s.to_string()).collect(), 80, 1500).unwrap()
    }

    #[test]
    fn test_two_phrase_frame_sequence() {
        let mut tw = typewriter(&["AB", "CD"]);
        let shown: Vec<String> = (0..9).map(|_| tw.step().text).collect();
        assert_eq!(shown, ["A", "AB", "A", "", "C", "CD", "C", "", "A"]);
    }

    #[test]
    fn test_pause_once_per_completed_phrase() {
        let mut tw = typewriter(&["AB", "CD"]);
        let delays: Vec<u32> = (0..8).map(|_| tw.step().delay_ms).collect();
        // Pause lands on the completing tick only; delete-complete gets none
        assert_eq!(delays, [80, 1500, 80, 80, 80, 1500, 80, 80]);
    }

    #[test]
    fn test_single_phrase_wraps_to_itself() {
        let mut tw = typewriter(&["Hi"]);
        for _ in 0..4 {
            tw.step();
        }
        assert_eq!(tw.text_index(), 0);
        assert_eq!(tw.step().text, "H");
    }

    #[test]
    fn test_multibyte_phrases_step_per_char() {
        let mut tw = typewriter(&["héllo"]);
        assert_eq!(tw.step().text, "h");
        assert_eq!(tw.step().text, "hé");
        assert_eq!(tw.step().text, "hél");
    }

    #[test]
    fn test_empty_phrase_list_rejected() {
        assert!(Typewriter::new(Vec::new(), 80, 1500).is_none());
    }

    #[test]
    fn test_task_stop() {
        let task = TypingTask::new();
        let handle = task.clone();
        assert!(task.is_active());
        handle.stop();
        assert!(!task.is_active());
    }

    proptest! {
        #[test]
        fn prop_indices_stay_in_bounds(
            phrases in prop::collection::vec("[a-zA-Z ]{1,12}", 1..5),
            steps in 1usize..200,
        ) {
            let lens: Vec<usize> = phrases.iter().map(|p| p.chars().count()).collect();
            let mut tw = Typewriter::new(phrases, 80, 1500).unwrap();
            for _ in 0..steps {
                let frame = tw.step();
                prop_assert!(tw.text_index() < lens.len());
                prop_assert!(frame.text.chars().count() <= lens[tw.text_index()]);
            }
        }
    }
}
