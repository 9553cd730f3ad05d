// SPDX-License-Identifier: MPL-2.0
//! Typewriter text effect for the banner.
//!
//! The state machine types a word one character at a time, holds it, deletes
//! it, then moves on to the next word forever. It has no clock of its own:
//! the owner calls [`Typewriter::advance`] once every [`Typewriter::step_delay`].

use crate::app::config::{TYPEWRITER_DELETE_MS, TYPEWRITER_HOLD_MS, TYPEWRITER_TYPE_MS};
use std::time::Duration;

/// Character drawn after the text.
pub const CURSOR: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Holding,
    Deleting,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    words: &'static [&'static str],
    word: usize,
    /// Number of characters of the current word on screen.
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    #[must_use]
    pub fn new(words: &'static [&'static str]) -> Self {
        Self {
            words,
            word: 0,
            shown: 0,
            phase: Phase::Typing,
        }
    }

    fn current_word(&self) -> &'static str {
        self.words.get(self.word).copied().unwrap_or_default()
    }

    /// Visible part of the current word.
    #[must_use]
    pub fn text(&self) -> &'static str {
        let word = self.current_word();
        match word.char_indices().nth(self.shown) {
            Some((end, _)) => &word[..end],
            None => word,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Time to wait before the next call to [`Typewriter::advance`].
    #[must_use]
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(match self.phase {
            Phase::Typing => TYPEWRITER_TYPE_MS,
            Phase::Holding => TYPEWRITER_HOLD_MS,
            Phase::Deleting => TYPEWRITER_DELETE_MS,
        })
    }

    /// Performs one step of the effect.
    pub fn advance(&mut self) {
        if self.words.is_empty() {
            return;
        }
        let len = self.current_word().chars().count();
        match self.phase {
            Phase::Typing => {
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown >= len {
                    self.phase = Phase::Holding;
                }
            }
            Phase::Holding => self.phase = Phase::Deleting,
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.word = (self.word + 1) % self.words.len();
                    self.phase = Phase::Typing;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &["ab", "xyz"];

    #[test]
    fn types_holds_deletes_and_moves_on() {
        let mut tw = Typewriter::new(WORDS);
        assert_eq!(tw.text(), "");

        tw.advance();
        assert_eq!(tw.text(), "a");
        tw.advance();
        assert_eq!(tw.text(), "ab");
        assert_eq!(tw.phase(), Phase::Holding);

        tw.advance();
        assert_eq!(tw.phase(), Phase::Deleting);
        assert_eq!(tw.text(), "ab");

        tw.advance();
        assert_eq!(tw.text(), "a");
        tw.advance();
        assert_eq!(tw.text(), "");
        assert_eq!(tw.phase(), Phase::Typing);

        tw.advance();
        assert_eq!(tw.text(), "x");
    }

    #[test]
    fn loops_back_to_first_word() {
        let mut tw = Typewriter::new(WORDS);
        // "ab": 2 typed + hold + 2 deleted, "xyz": 3 typed + hold + 3 deleted
        for _ in 0..(2 + 1 + 2 + 3 + 1 + 3) {
            tw.advance();
        }
        tw.advance();
        assert_eq!(tw.text(), "a");
    }

    #[test]
    fn step_delay_follows_phase() {
        let mut tw = Typewriter::new(&["a"]);
        assert_eq!(tw.step_delay(), Duration::from_millis(TYPEWRITER_TYPE_MS));
        tw.advance();
        assert_eq!(tw.step_delay(), Duration::from_millis(TYPEWRITER_HOLD_MS));
        tw.advance();
        assert_eq!(tw.step_delay(), Duration::from_millis(TYPEWRITER_DELETE_MS));
    }

    #[test]
    fn multibyte_words_are_sliced_on_char_boundaries() {
        let mut tw = Typewriter::new(&["héllo"]);
        tw.advance();
        tw.advance();
        assert_eq!(tw.text(), "hé");
    }

    #[test]
    fn empty_word_list_is_inert() {
        let mut tw = Typewriter::new(&[]);
        tw.advance();
        assert_eq!(tw.text(), "");
    }
}
