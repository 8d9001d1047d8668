//! Word lists for the game
//!
//! Two static collaborators feed the engine:
//! - the [`Dictionary`] of accepted guesses (membership only)
//! - the [`AnswerPool`] the secret word is drawn from
//!
//! Both are immutable once built. The default lists are embedded at build
//! time; a custom dictionary can be loaded from a file.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

use crate::core::Word;
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fmt;
use std::io;
use std::path::Path;

/// Error building word lists
#[derive(Debug)]
pub enum WordListError {
    /// The answer pool has no valid words to choose a secret from
    EmptyAnswerPool,
    /// A custom word list could not be read
    Io(io::Error),
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyAnswerPool => write!(f, "Answer pool must contain at least one word"),
            Self::Io(err) => write!(f, "Failed to read word list: {err}"),
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EmptyAnswerPool => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for WordListError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Set of words accepted as guesses
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        Self {
            words: words.into_iter().map(|w| w.text().to_owned()).collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word.text())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Ordered, non-empty list of possible secret words
#[derive(Debug, Clone)]
pub struct AnswerPool {
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl AnswerPool {
    /// Build a pool, failing fast if it is empty
    ///
    /// # Errors
    ///
    /// Returns [`WordListError::EmptyAnswerPool`] if `words` yields nothing.
    pub fn new(words: Vec<Word>) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::EmptyAnswerPool);
        }
        let index = words.iter().map(|w| w.text().to_owned()).collect();
        Ok(Self { words, index })
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word.text())
    }

    /// Pick a word uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        &self.words[rng.random_range(0..self.words.len())]
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`; kept for API symmetry with `len`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// The dictionary and answer pool the engine plays with
#[derive(Debug, Clone)]
pub struct WordLists {
    pub dictionary: Dictionary,
    pub answers: AnswerPool,
}

impl WordLists {
    /// Build from plain string slices (invalid entries are dropped)
    ///
    /// # Errors
    ///
    /// Returns [`WordListError::EmptyAnswerPool`] if no answer survives.
    pub fn from_slices(dictionary: &[&str], answers: &[&str]) -> Result<Self, WordListError> {
        Ok(Self {
            dictionary: Dictionary::new(loader::words_from_slice(dictionary)),
            answers: AnswerPool::new(loader::words_from_slice(answers))?,
        })
    }

    /// The embedded lists: every allowed word plus the answer pool
    ///
    /// # Errors
    ///
    /// Only fails if the embedded answer list is empty.
    pub fn embedded() -> Result<Self, WordListError> {
        Self::from_slices(ALLOWED, ANSWERS)
    }

    /// Only answer-pool words are accepted as guesses
    ///
    /// # Errors
    ///
    /// Only fails if the embedded answer list is empty.
    pub fn answers_only() -> Result<Self, WordListError> {
        Self::from_slices(&[], ANSWERS)
    }

    /// Custom dictionary file with the embedded answer pool
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn with_dictionary_file(path: impl AsRef<Path>) -> Result<Self, WordListError> {
        Ok(Self {
            dictionary: Dictionary::new(loader::load_from_file(path)?),
            answers: AnswerPool::new(loader::words_from_slice(ANSWERS))?,
        })
    }

    /// A guess is accepted if it is in either list
    #[must_use]
    pub fn accepts(&self, word: &Word) -> bool {
        self.dictionary.contains(word) || self.answers.contains(word)
    }
}
