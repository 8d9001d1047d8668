//! A single board/keyboard letter
//!
//! `Letter` is the one mapping between what the player typed, what a board
//! cell shows and which keyboard key gets recolored. It stores the lowercase
//! byte and renders uppercase, so no front-end has to care about case.

use std::fmt;

/// One of the 26 ASCII letters, stored lowercase
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Number of distinct letters
    pub const COUNT: usize = 26;

    /// Build a letter from any ASCII alphabetic char, ignoring case
    ///
    /// # Examples
    /// ```
    /// use wordo::core::Letter;
    ///
    /// assert_eq!(Letter::from_char('Q'), Letter::from_char('q'));
    /// assert!(Letter::from_char('7').is_none());
    /// ```
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        if ch.is_ascii_alphabetic() {
            Some(Self((ch as u8).to_ascii_lowercase()))
        } else {
            None
        }
    }

    /// Build a letter from a lowercase ASCII byte
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        if byte.is_ascii_lowercase() {
            Some(Self(byte))
        } else {
            None
        }
    }

    /// Wrap a byte already known to be lowercase ASCII
    pub(super) const fn from_lowercase_unchecked(byte: u8) -> Self {
        debug_assert!(byte.is_ascii_lowercase());
        Self(byte)
    }

    /// Lowercase byte, as stored in word lists
    #[inline]
    #[must_use]
    pub const fn byte(self) -> u8 {
        self.0
    }

    /// Position in the alphabet (a = 0)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'a') as usize
    }

    /// Lowercase char
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Uppercase char, used for tile and key labels
    #[inline]
    #[must_use]
    pub const fn label(self) -> char {
        self.0.to_ascii_uppercase() as char
    }

    /// All letters a..z in order
    pub fn all() -> impl Iterator<Item = Self> {
        (b'a'..=b'z').map(Self)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_char_normalizes_case() {
        let upper = Letter::from_char('E').unwrap();
        let lower = Letter::from_char('e').unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.byte(), b'e');
    }

    #[test]
    fn from_char_rejects_non_letters() {
        for ch in ['0', ' ', '!', 'é', '\n'] {
            assert!(Letter::from_char(ch).is_none(), "{ch:?} accepted");
        }
    }

    #[test]
    fn from_byte_requires_lowercase() {
        assert!(Letter::from_byte(b'a').is_some());
        assert!(Letter::from_byte(b'A').is_none());
    }

    #[test]
    fn index_and_labels() {
        let z = Letter::from_char('z').unwrap();
        assert_eq!(z.index(), 25);
        assert_eq!(z.as_char(), 'z');
        assert_eq!(z.label(), 'Z');
        assert_eq!(z.to_string(), "Z");
    }

    #[test]
    fn all_covers_alphabet() {
        let letters: Vec<Letter> = Letter::all().collect();
        assert_eq!(letters.len(), Letter::COUNT);
        assert!(letters.iter().enumerate().all(|(i, l)| l.index() == i));
    }
}
