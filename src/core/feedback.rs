//! Per-letter feedback for a submitted guess
//!
//! Each position of a guess is scored as one of:
//! - `Absent`  (letter not in the secret)
//! - `Present` (letter in the secret, other position)
//! - `Correct` (letter in this exact position)
//!
//! The variants are ordered by precedence, `Absent < Present < Correct`,
//! which is what keyboard aggregation relies on.

use super::{WORD_LENGTH, Word};

/// Match quality of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feedback {
    Absent,
    Present,
    Correct,
}

impl Feedback {
    /// Emoji square for this feedback
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse one feedback char: 'G'/🟩, 'Y'/🟨, '-'/'_'/⬜
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// How a guess is compared against the secret
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ScoringRule {
    /// Exact match is Correct, otherwise Present if the secret contains the
    /// letter anywhere. A repeated guessed letter can be Present more than
    /// once against a single occurrence in the secret.
    #[default]
    Naive,
    /// Frequency-consuming two-pass scoring: each secret letter is credited
    /// at most once, greens first.
    Standard,
}

/// Feedback for all five positions of one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score([Feedback; WORD_LENGTH]);

impl Score {
    /// All positions correct
    pub const PERFECT: Self = Self([Feedback::Correct; WORD_LENGTH]);

    #[must_use]
    pub const fn new(feedback: [Feedback; WORD_LENGTH]) -> Self {
        Self(feedback)
    }

    /// Score `guess` against `secret` using the given rule
    ///
    /// # Examples
    /// ```
    /// use wordo::core::{Feedback, Score, ScoringRule, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let secret = Word::new("trace").unwrap();
    /// let score = Score::calculate(&guess, &secret, ScoringRule::Naive);
    ///
    /// // R, A and E line up; C is elsewhere in TRACE; N is not in it
    /// assert_eq!(score, Score::parse("YGG-G").unwrap());
    /// assert_eq!(score.feedback()[3], Feedback::Absent);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word, rule: ScoringRule) -> Self {
        match rule {
            ScoringRule::Naive => Self::naive(guess, secret),
            ScoringRule::Standard => Self::standard(guess, secret),
        }
    }

    fn naive(guess: &Word, secret: &Word) -> Self {
        let mut result = [Feedback::Absent; WORD_LENGTH];

        for (i, slot) in result.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            *slot = if letter == secret.char_at(i) {
                Feedback::Correct
            } else if secret.has_letter(letter) {
                Feedback::Present
            } else {
                Feedback::Absent
            };
        }

        Self(result)
    }

    fn standard(guess: &Word, secret: &Word) -> Self {
        let mut result = [Feedback::Absent; WORD_LENGTH];
        let mut available = secret.char_counts();

        // First pass: exact matches consume their letter
        for (i, slot) in result.iter_mut().enumerate() {
            if guess.char_at(i) == secret.char_at(i) {
                *slot = Feedback::Correct;
                if let Some(count) = available.get_mut(&guess.char_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters from what is left
        for (i, slot) in result.iter_mut().enumerate() {
            if *slot == Feedback::Absent
                && let Some(count) = available.get_mut(&guess.char_at(i))
                && *count > 0
            {
                *slot = Feedback::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Per-position feedback
    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &[Feedback; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count positions with the given feedback
    #[must_use]
    pub fn count(&self, kind: Feedback) -> usize {
        self.0.iter().filter(|&&f| f == kind).count()
    }

    /// Parse a score from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordo::core::Score;
    ///
    /// let a = Score::parse("GY-GY").unwrap();
    /// let b = Score::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(a, b);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let parsed: Vec<Feedback> = s.chars().map(Feedback::from_char).collect::<Option<_>>()?;
        let feedback: [Feedback; WORD_LENGTH] = parsed.try_into().ok()?;
        Some(Self(feedback))
    }

    /// Render as a row of emoji squares
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(guess: &str, secret: &str, rule: ScoringRule) -> Score {
        Score::calculate(
            &Word::new(guess).unwrap(),
            &Word::new(secret).unwrap(),
            rule,
        )
    }

    #[test]
    fn precedence_order() {
        assert!(Feedback::Correct > Feedback::Present);
        assert!(Feedback::Present > Feedback::Absent);
        assert_eq!(
            [Feedback::Present, Feedback::Correct, Feedback::Absent]
                .into_iter()
                .max(),
            Some(Feedback::Correct)
        );
    }

    #[test]
    fn naive_crane_against_trace() {
        let s = score("crane", "trace", ScoringRule::Naive);
        assert_eq!(s, Score::parse("YGG-G").unwrap());
        assert_eq!(s, score("crane", "trace", ScoringRule::Standard));
    }

    #[test]
    fn naive_all_present_anagram() {
        let s = score("earth", "heart", ScoringRule::Naive);
        assert_eq!(s, Score::new([Feedback::Present; WORD_LENGTH]));
    }

    #[test]
    fn naive_exact_match_is_perfect() {
        let s = score("trace", "trace", ScoringRule::Naive);
        assert!(s.is_perfect());
        assert_eq!(s.count(Feedback::Correct), 5);
    }

    #[test]
    fn naive_all_absent() {
        let s = score("abcde", "fghij", ScoringRule::Naive);
        assert_eq!(s.count(Feedback::Absent), 5);
    }

    #[test]
    fn naive_double_counts_repeated_letter() {
        // LEVEE against CRANE: CRANE has a single E at position 4.
        // The final E is Correct, and both other E's are still Present.
        let s = score("levee", "crane", ScoringRule::Naive);
        assert_eq!(s, Score::parse("-Y-YG").unwrap());
    }

    #[test]
    fn standard_consumes_letter_counts() {
        // Same guess under standard rules: the only E is used by the green
        let s = score("levee", "crane", ScoringRule::Standard);
        assert_eq!(s, Score::parse("----G").unwrap());
    }

    #[test]
    fn standard_duplicate_letters_complex() {
        // ROBOT vs FLOOR: R yellow, first O yellow, B gray, second O green, T gray
        let s = score("robot", "floor", ScoringRule::Standard);
        assert_eq!(s, Score::parse("YY-G-").unwrap());
    }

    #[test]
    fn rules_agree_without_repeats() {
        for (guess, secret) in [("crane", "slate"), ("audio", "radio"), ("trace", "crate")] {
            assert_eq!(
                score(guess, secret, ScoringRule::Naive),
                score(guess, secret, ScoringRule::Standard),
                "{guess} vs {secret}"
            );
        }
    }

    #[test]
    fn default_rule_is_naive() {
        assert_eq!(ScoringRule::default(), ScoringRule::Naive);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(Score::parse("GYGGYX").is_none());
        assert!(Score::parse("GYG").is_none());
        assert!(Score::parse("GXGGY").is_none());
        assert!(Score::parse("").is_none());
    }

    #[test]
    fn emoji_rendering() {
        assert_eq!(Score::PERFECT.to_emoji(), "🟩🟩🟩🟩🟩");
        assert_eq!(Score::parse("GY-GY").unwrap().to_emoji(), "🟩🟨⬜🟩🟨");
    }
}
