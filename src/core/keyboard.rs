//! Best-known feedback per keyboard letter
//!
//! A key only ever moves up in precedence during a round:
//! unknown → `Absent` → `Present` → `Correct`.

use super::{Feedback, Letter, Score, WORD_LENGTH};

/// Per-letter aggregate of every guess submitted this round
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    keys: [Option<Feedback>; Letter::COUNT],
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Best feedback seen for a letter, if it has been guessed
    #[must_use]
    pub const fn get(&self, letter: Letter) -> Option<Feedback> {
        self.keys[letter.index()]
    }

    /// Raise a key to `feedback` if that is an upgrade
    ///
    /// Returns `true` when the stored value changed.
    pub fn upgrade(&mut self, letter: Letter, feedback: Feedback) -> bool {
        let slot = &mut self.keys[letter.index()];
        match *slot {
            Some(current) if current >= feedback => false,
            _ => {
                *slot = Some(feedback);
                true
            }
        }
    }

    /// Fold one scored guess into the keyboard
    ///
    /// Letters repeated within the guess are deduplicated with the
    /// highest-precedence result winning. Only keys that actually changed
    /// are returned, in first-appearance order.
    pub fn absorb(
        &mut self,
        letters: &[Letter; WORD_LENGTH],
        score: &Score,
    ) -> Vec<(Letter, Feedback)> {
        let mut best: Vec<(Letter, Feedback)> = Vec::with_capacity(WORD_LENGTH);
        for (&letter, &feedback) in letters.iter().zip(score.feedback()) {
            match best.iter_mut().find(|(seen, _)| *seen == letter) {
                Some((_, existing)) => *existing = (*existing).max(feedback),
                None => best.push((letter, feedback)),
            }
        }

        best.retain(|&(letter, feedback)| self.upgrade(letter, feedback));
        best
    }

    /// Forget everything (start of a new round)
    pub fn clear(&mut self) {
        self.keys = [None; Letter::COUNT];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ScoringRule, Word};

    fn letter(ch: char) -> Letter {
        Letter::from_char(ch).unwrap()
    }

    #[test]
    fn upgrade_never_downgrades() {
        let mut keys = KeyboardState::new();
        let e = letter('e');

        assert!(keys.upgrade(e, Feedback::Present));
        assert!(!keys.upgrade(e, Feedback::Absent));
        assert_eq!(keys.get(e), Some(Feedback::Present));

        assert!(keys.upgrade(e, Feedback::Correct));
        assert!(!keys.upgrade(e, Feedback::Present));
        assert!(!keys.upgrade(e, Feedback::Correct));
        assert_eq!(keys.get(e), Some(Feedback::Correct));
    }

    #[test]
    fn absorb_dedupes_with_highest_precedence() {
        let mut keys = KeyboardState::new();
        let guess = Word::new("levee").unwrap();
        let secret = Word::new("crane").unwrap();
        let score = Score::calculate(&guess, &secret, ScoringRule::Naive);

        let updates = keys.absorb(&guess.letters(), &score);

        assert_eq!(
            updates,
            vec![
                (letter('l'), Feedback::Absent),
                (letter('e'), Feedback::Correct),
                (letter('v'), Feedback::Absent),
            ]
        );
    }

    #[test]
    fn absorb_skips_keys_that_would_not_change() {
        let mut keys = KeyboardState::new();
        let secret = Word::new("trace").unwrap();

        let first = Word::new("trace").unwrap();
        let score = Score::calculate(&first, &secret, ScoringRule::Naive);
        assert_eq!(keys.absorb(&first.letters(), &score).len(), 5);

        // CRATE: c and t are Present now but were Correct before
        let second = Word::new("crate").unwrap();
        let score = Score::calculate(&second, &secret, ScoringRule::Naive);
        assert!(keys.absorb(&second.letters(), &score).is_empty());
        assert_eq!(keys.get(letter('c')), Some(Feedback::Correct));
        assert_eq!(keys.get(letter('t')), Some(Feedback::Correct));
    }

    #[test]
    fn clear_resets_every_key() {
        let mut keys = KeyboardState::new();
        keys.upgrade(letter('a'), Feedback::Correct);
        keys.clear();
        assert_eq!(keys, KeyboardState::new());
    }
}
