//! Input dispatch: logical inputs in, UI effects out

use super::{
    ALERT_DURATION, Effect, GameEngine, GameState, GuessError, OVERLAY_DELAY, SessionStats,
    Submission, UiCommand,
};
use crate::core::Letter;
use tracing::debug;

/// A discrete player action, independent of any input device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    Letter(Letter),
    Enter,
    Backspace,
    PlayAgain,
    Quit,
}

/// Drives a [`GameEngine`] and describes what the screen should do
pub struct Session<'a> {
    engine: GameEngine<'a>,
}

impl<'a> Session<'a> {
    #[must_use]
    pub const fn new(engine: GameEngine<'a>) -> Self {
        Self { engine }
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        self.engine.state()
    }

    #[must_use]
    pub const fn stats(&self) -> &SessionStats {
        self.engine.stats()
    }

    /// Apply one input and return the resulting effects in order
    ///
    /// `Quit` is left to the driver and yields nothing.
    pub fn handle(&mut self, input: Input) -> Vec<Effect> {
        debug!(?input, "input");
        match input {
            Input::Letter(letter) => self
                .engine
                .input_letter(letter)
                .map(|(row, col)| {
                    Effect::now(UiCommand::SetCellText {
                        row,
                        col,
                        letter: Some(letter),
                    })
                })
                .into_iter()
                .collect(),
            Input::Backspace => self
                .engine
                .backspace()
                .map(|(row, col)| {
                    Effect::now(UiCommand::SetCellText {
                        row,
                        col,
                        letter: None,
                    })
                })
                .into_iter()
                .collect(),
            Input::Enter => match self.engine.submit_guess() {
                Ok(submission) => submission_effects(&submission),
                Err(GuessError::RoundOver) => Vec::new(),
                Err(err) => alert(err.to_string()),
            },
            Input::PlayAgain => {
                self.engine.reset();
                vec![
                    Effect::now(UiCommand::HideEndOverlay),
                    Effect::now(UiCommand::ClearBoard),
                ]
            }
            Input::Quit => Vec::new(),
        }
    }
}

/// Show a message now and hide it once it has been up long enough
#[must_use]
pub fn alert(message: String) -> Vec<Effect> {
    vec![
        Effect::now(UiCommand::ShowAlert(message)),
        Effect::after(ALERT_DURATION, UiCommand::HideAlert),
    ]
}

/// Row and key coloring first, then either an alert or the delayed overlay
fn submission_effects(submission: &Submission) -> Vec<Effect> {
    let row = submission.row;
    let mut effects: Vec<Effect> = submission
        .score
        .feedback()
        .iter()
        .enumerate()
        .map(|(col, &feedback)| Effect::now(UiCommand::SetCellFeedback { row, col, feedback }))
        .collect();

    effects.extend(
        submission
            .key_updates
            .iter()
            .map(|&(letter, feedback)| Effect::now(UiCommand::SetKeyFeedback { letter, feedback })),
    );

    let message = submission.outcome.message();
    if submission.outcome.ends_round() {
        effects.push(Effect::after(
            OVERLAY_DELAY,
            UiCommand::ShowEndOverlay(message),
        ));
    } else {
        effects.extend(alert(message));
    }

    effects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Score, WORD_LENGTH};
    use crate::game::{GameConfig, Status};
    use crate::wordlists::WordLists;

    fn lists() -> WordLists {
        WordLists::from_slices(
            &["crane", "slate", "audio", "plumb", "fight", "wordy"],
            &["trace"],
        )
        .unwrap()
    }

    fn session(lists: &WordLists) -> Session<'_> {
        Session::new(GameEngine::new(
            lists,
            GameConfig {
                seed: Some(3),
                ..GameConfig::default()
            },
        ))
    }

    fn type_word(session: &mut Session, text: &str) -> Vec<Effect> {
        text.chars()
            .filter_map(Letter::from_char)
            .flat_map(|l| session.handle(Input::Letter(l)))
            .collect()
    }

    #[test]
    fn letters_write_cells() {
        let lists = lists();
        let mut session = session(&lists);
        let effects = type_word(&mut session, "cr");

        assert_eq!(
            effects,
            vec![
                Effect::now(UiCommand::SetCellText {
                    row: 0,
                    col: 0,
                    letter: Letter::from_char('c'),
                }),
                Effect::now(UiCommand::SetCellText {
                    row: 0,
                    col: 1,
                    letter: Letter::from_char('r'),
                }),
            ]
        );
    }

    #[test]
    fn stray_input_yields_nothing() {
        let lists = lists();
        let mut session = session(&lists);
        assert!(session.handle(Input::Backspace).is_empty());
        assert!(session.handle(Input::Quit).is_empty());

        type_word(&mut session, "crane");
        assert!(type_word(&mut session, "x").is_empty());
    }

    #[test]
    fn backspace_clears_cell() {
        let lists = lists();
        let mut session = session(&lists);
        type_word(&mut session, "cr");

        assert_eq!(
            session.handle(Input::Backspace),
            vec![Effect::now(UiCommand::SetCellText {
                row: 0,
                col: 1,
                letter: None,
            })]
        );
    }

    #[test]
    fn validation_errors_raise_self_dismissing_alert() {
        let lists = lists();
        let mut session = session(&lists);
        type_word(&mut session, "cra");

        assert_eq!(
            session.handle(Input::Enter),
            vec![
                Effect::now(UiCommand::ShowAlert("Not enough letters".into())),
                Effect::after(ALERT_DURATION, UiCommand::HideAlert),
            ]
        );

        type_word(&mut session, "zz");
        let effects = session.handle(Input::Enter);
        assert_eq!(
            effects[0],
            Effect::now(UiCommand::ShowAlert("Not in wordlist".into()))
        );
    }

    #[test]
    fn incorrect_guess_colors_then_alerts() {
        let lists = lists();
        let mut session = session(&lists);
        type_word(&mut session, "crane");
        let effects = session.handle(Input::Enter);

        let cells: Vec<&Effect> = effects
            .iter()
            .filter(|e| matches!(e.command, UiCommand::SetCellFeedback { .. }))
            .collect();
        assert_eq!(cells.len(), WORD_LENGTH);
        let expected = Score::parse("YGG-G").unwrap();
        for (col, (effect, &feedback)) in cells.iter().zip(expected.feedback()).enumerate() {
            assert_eq!(
                effect.command,
                UiCommand::SetCellFeedback { row: 0, col, feedback }
            );
        }

        let tail = &effects[effects.len() - 2..];
        assert_eq!(
            tail,
            [
                Effect::now(UiCommand::ShowAlert("Guess is incorrect".into())),
                Effect::after(ALERT_DURATION, UiCommand::HideAlert),
            ]
        );
    }

    #[test]
    fn win_overlay_is_delayed_and_last() {
        let lists = lists();
        let mut session = session(&lists);
        type_word(&mut session, "trace");
        let effects = session.handle(Input::Enter);

        let (last, coloring) = effects.split_last().unwrap();
        assert!(coloring.iter().all(Effect::is_immediate));
        assert_eq!(
            *last,
            Effect::after(
                OVERLAY_DELAY,
                UiCommand::ShowEndOverlay("You win in 1 guess!\nYour streak is 1.".into())
            )
        );

        // Enter after the round is over does nothing
        assert!(session.handle(Input::Enter).is_empty());
    }

    #[test]
    fn loss_overlay_reveals_secret() {
        let lists = lists();
        let mut session = session(&lists);
        let mut effects = Vec::new();
        for word in ["crane", "slate", "audio", "plumb", "fight", "wordy"] {
            type_word(&mut session, word);
            effects = session.handle(Input::Enter);
        }

        assert_eq!(session.state().status(), Status::Lost);
        let last = effects.last().unwrap();
        assert_eq!(last.delay, OVERLAY_DELAY);
        assert_eq!(
            last.command,
            UiCommand::ShowEndOverlay("Sorry, you lose.\n\nThe word was\nTRACE".into())
        );
    }

    #[test]
    fn play_again_hides_overlay_and_clears() {
        let lists = lists();
        let mut session = session(&lists);
        type_word(&mut session, "trace");
        session.handle(Input::Enter);

        let effects = session.handle(Input::PlayAgain);
        assert_eq!(
            effects,
            vec![
                Effect::now(UiCommand::HideEndOverlay),
                Effect::now(UiCommand::ClearBoard),
            ]
        );
        assert_eq!(session.state().status(), Status::InProgress);
        assert_eq!(session.state().streak(), 1);
        assert_eq!(session.stats().games_won, 1);
    }
}
