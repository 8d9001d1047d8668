//! The game engine: one round at a time, with a streak across rounds
//!
//! All mutation goes through the methods here. Invalid cursor moves and
//! stray input after the round has ended are silent no-ops, not errors.

use super::{GameState, SessionStats, Status};
use crate::core::{Feedback, Letter, MAX_GUESSES, Score, ScoringRule, WORD_LENGTH, Word};
use crate::wordlists::WordLists;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;
use tracing::{debug, info, instrument, trace};

/// Engine settings chosen at startup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameConfig {
    pub scoring: ScoringRule,
    /// Fixed seed for secret selection; `None` seeds from the OS
    pub seed: Option<u64>,
}

/// Why a submitted row was not scored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    /// The active row has an empty cell
    TooShort,
    /// The word is in neither the dictionary nor the answer pool
    NotInDictionary,
    /// The round is already won or lost
    RoundOver,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort => write!(f, "Not enough letters"),
            Self::NotInDictionary => write!(f, "Not in wordlist"),
            Self::RoundOver => write!(f, "The round is over"),
        }
    }
}

impl std::error::Error for GuessError {}

/// What a scored guess did to the round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Won { guesses: usize, streak: u32 },
    Lost { secret: Word },
    Continue,
}

impl Outcome {
    /// Message shown to the player for this outcome
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Won { guesses, streak } => {
                let noun = if *guesses == 1 { "guess" } else { "guesses" };
                format!("You win in {guesses} {noun}!\nYour streak is {streak}.")
            }
            Self::Lost { secret } => format!(
                "Sorry, you lose.\n\nThe word was\n{}",
                secret.text().to_uppercase()
            ),
            Self::Continue => "Guess is incorrect".to_string(),
        }
    }

    #[must_use]
    pub const fn ends_round(&self) -> bool {
        !matches!(self, Self::Continue)
    }
}

/// Result of a successful `submit_guess`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Board row that was scored
    pub row: usize,
    pub guess: Word,
    pub score: Score,
    /// Keys whose displayed feedback must be raised, deduplicated by letter
    pub key_updates: Vec<(Letter, Feedback)>,
    pub outcome: Outcome,
}

/// Owns the current round and the session around it
pub struct GameEngine<'a> {
    lists: &'a WordLists,
    config: GameConfig,
    rng: StdRng,
    state: GameState,
    stats: SessionStats,
}

impl<'a> GameEngine<'a> {
    /// Start a session with a freshly chosen secret
    #[must_use]
    pub fn new(lists: &'a WordLists, config: GameConfig) -> Self {
        let mut rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let secret = lists.answers.choose(&mut rng).clone();

        info!(
            answers = lists.answers.len(),
            dictionary = lists.dictionary.len(),
            scoring = ?config.scoring,
            "session started"
        );
        trace!(secret = %secret, "secret chosen");

        Self {
            lists,
            config,
            rng,
            state: GameState::new(secret, 0),
            stats: SessionStats::default(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn stats(&self) -> &SessionStats {
        &self.stats
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Place a letter in the next empty cell of the active row
    ///
    /// Returns the `(row, column)` written, or `None` when the row is full
    /// or the round has ended.
    pub fn input_letter(&mut self, letter: Letter) -> Option<(usize, usize)> {
        let state = &mut self.state;
        if state.status.is_over() || state.cursor_column >= WORD_LENGTH {
            debug!(%letter, "letter ignored");
            return None;
        }

        let cell = (state.cursor_row, state.cursor_column);
        state.board.set(cell.0, cell.1, Some(letter));
        state.cursor_column += 1;
        debug!(%letter, row = cell.0, column = cell.1, "letter placed");
        Some(cell)
    }

    /// Clear the last filled cell of the active row
    ///
    /// Returns the `(row, column)` cleared, or `None` when the row is empty
    /// or the round has ended.
    pub fn backspace(&mut self) -> Option<(usize, usize)> {
        let state = &mut self.state;
        if state.status.is_over() || state.cursor_column == 0 {
            return None;
        }

        state.cursor_column -= 1;
        let cell = (state.cursor_row, state.cursor_column);
        state.board.set(cell.0, cell.1, None);
        debug!(row = cell.0, column = cell.1, "letter cleared");
        Some(cell)
    }

    /// Validate and score the active row
    ///
    /// # Errors
    ///
    /// - [`GuessError::TooShort`] if the row is not full
    /// - [`GuessError::NotInDictionary`] if the word is not accepted
    /// - [`GuessError::RoundOver`] if the round already ended
    ///
    /// State is left untouched on every error.
    #[instrument(skip(self), fields(row = self.state.cursor_row))]
    pub fn submit_guess(&mut self) -> Result<Submission, GuessError> {
        if self.state.status.is_over() {
            return Err(GuessError::RoundOver);
        }

        let row = self.state.cursor_row;
        let letters = self
            .state
            .board
            .full_row(row)
            .ok_or(GuessError::TooShort)?;
        let guess = Word::from_letters(letters);

        if !self.lists.accepts(&guess) {
            debug!(%guess, "rejected");
            return Err(GuessError::NotInDictionary);
        }

        // Coloring is computed before the win/loss decision
        let score = Score::calculate(&guess, &self.state.secret, self.config.scoring);
        let key_updates = self.state.keyboard.absorb(&letters, &score);

        let state = &mut self.state;
        let outcome = if guess == state.secret {
            state.status = Status::Won;
            state.streak += 1;
            self.stats.record_win(state.guess_count, state.streak);
            info!(guesses = state.guess_count, streak = state.streak, "round won");
            Outcome::Won {
                guesses: state.guess_count,
                streak: state.streak,
            }
        } else if state.guess_count >= MAX_GUESSES {
            state.status = Status::Lost;
            state.streak = 0;
            self.stats.record_loss();
            info!(secret = %state.secret, "round lost");
            Outcome::Lost {
                secret: state.secret.clone(),
            }
        } else {
            state.cursor_row += 1;
            state.cursor_column = 0;
            state.guess_count += 1;
            debug!(%guess, score = %score.to_emoji(), "incorrect guess");
            Outcome::Continue
        };

        Ok(Submission {
            row,
            guess,
            score,
            key_updates,
            outcome,
        })
    }

    /// Start a new round, keeping the streak
    #[instrument(skip(self), fields(streak = self.state.streak))]
    pub fn reset(&mut self) {
        let secret = self.lists.answers.choose(&mut self.rng).clone();
        trace!(secret = %secret, "secret chosen");
        self.state = GameState::new(secret, self.state.streak);
        info!("new round");
    }
}
