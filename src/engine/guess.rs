//! The guess engine: input handling, scoring and round transitions.

use tracing::{debug, info, trace, warn};

use super::event::GameObserver;
use super::input::KeyInput;
use crate::core::{GameConfig, GameState, GameStatus, Result, Secret, ScoredRow};
use crate::scoring::{score_guess, KeyboardHints, RowResult};

/// Drives a round of play.
///
/// Owns the `GameState` exclusively. Each input call runs to completion
/// before returning and reports what happened to the supplied observer.
/// Inputs that are not allowed in the current state are silently
/// ignored; the `bool`/`Option` return only says whether the input was
/// applied.
///
/// ```
/// use wordle_plus::core::{GameConfig, GameStatus, Secret};
/// use wordle_plus::engine::GuessEngine;
///
/// let config = GameConfig::new().with_word_length(5);
/// let mut engine = GuessEngine::new(config, Secret::new("apple", 5).unwrap()).unwrap();
/// for c in "apple".chars() {
///     engine.add_letter(c, &mut ());
/// }
/// engine.submit_guess(&mut ());
/// assert_eq!(engine.state().status(), GameStatus::Won);
/// ```
#[derive(Clone, Debug)]
pub struct GuessEngine {
    state: GameState,
    keyboard: KeyboardHints,
}

impl GuessEngine {
    /// Create an engine with a first round already set up.
    pub fn new(config: GameConfig, secret: Secret) -> Result<Self> {
        Ok(Self {
            state: GameState::new(config, secret)?,
            keyboard: KeyboardHints::new(),
        })
    }

    /// Read-only view of the round.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Best result per keyboard letter this round.
    #[must_use]
    pub fn keyboard(&self) -> &KeyboardHints {
        &self.keyboard
    }

    /// Begin a new round with `secret`.
    ///
    /// Fails only if the secret length does not match the configured
    /// word length, leaving the current round as it was.
    pub fn start_round<O>(&mut self, secret: Secret, observer: &mut O) -> Result<()>
    where
        O: GameObserver + ?Sized,
    {
        self.state.reset(secret)?;
        self.keyboard.clear();
        info!(
            word_length = self.state.config().word_length,
            rows = self.state.config().rows,
            "round started"
        );
        observer.on_round_started(self.state.config());
        Ok(())
    }

    /// Dispatch a parsed key. Returns true if it changed the state.
    pub fn handle_key<O>(&mut self, key: KeyInput, observer: &mut O) -> bool
    where
        O: GameObserver + ?Sized,
    {
        match key {
            KeyInput::Letter(c) => self.add_letter(c, observer),
            KeyInput::Backspace => self.remove_letter(observer),
            KeyInput::Enter => self.submit_guess(observer).is_some(),
            KeyInput::Ignored => false,
        }
    }

    /// Type a letter into the next free cell of the current row.
    pub fn add_letter<O>(&mut self, ch: char, observer: &mut O) -> bool
    where
        O: GameObserver + ?Sized,
    {
        if !ch.is_ascii_alphabetic() || self.is_over() {
            trace!(?ch, "letter ignored");
            return false;
        }

        let letter = ch.to_ascii_lowercase();
        let row = self.state.current_row();
        match self.state.push_letter(letter) {
            Some(col) => {
                observer.on_cell_changed(row, col, Some(letter));
                true
            }
            None => {
                trace!(row, "row full, letter ignored");
                false
            }
        }
    }

    /// Erase the last letter of the current row.
    pub fn remove_letter<O>(&mut self, observer: &mut O) -> bool
    where
        O: GameObserver + ?Sized,
    {
        if self.is_over() {
            return false;
        }

        let row = self.state.current_row();
        match self.state.pop_letter() {
            Some(col) => {
                observer.on_cell_changed(row, col, None);
                true
            }
            None => false,
        }
    }

    /// Score the current row and apply the round transition.
    ///
    /// Returns the row's results, or `None` if the row is not full or the
    /// round is already over.
    pub fn submit_guess<O>(&mut self, observer: &mut O) -> Option<RowResult>
    where
        O: GameObserver + ?Sized,
    {
        if self.is_over() || !self.state.is_row_full() {
            trace!(col = self.state.current_col(), "submit ignored");
            return None;
        }

        let row = self.state.current_row();
        let guess = self.state.current_row_text();
        debug!(row, %guess, "checking guess");

        let results = match score_guess(self.state.secret().as_str(), &guess) {
            Ok(results) => results,
            Err(err) => {
                warn!(%err, "full row could not be scored");
                return None;
            }
        };

        for (col, (letter, &result)) in guess.chars().zip(results.iter()).enumerate() {
            observer.on_cell_scored(row, col, letter, result);
            let best = self.keyboard.record(letter, result);
            observer.on_keyboard_hint(letter, best);
        }

        let won = self.state.secret().letters().eq(guess.chars());
        self.state.record_row(ScoredRow {
            row,
            guess,
            results: results.clone(),
        });

        let status = if won {
            GameStatus::Won
        } else if row == self.state.config().last_row() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };

        if status.is_terminal() {
            self.state.finish(status);
            if let Some(summary) = self.state.round_summary() {
                info!(status = %summary.status, tries = summary.tries, "round ended");
                observer.on_round_ended(&summary);
            }
        } else {
            self.state.advance_row();
            debug!(row = self.state.current_row(), "moved to next row");
        }

        Some(results)
    }

    fn is_over(&self) -> bool {
        self.state.status().is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GameEvent;
    use crate::scoring::CellResult::{Absent, Correct, Present};

    fn engine(secret: &str, rows: usize) -> GuessEngine {
        let config = GameConfig::new()
            .with_word_length(secret.len())
            .with_rows(rows);
        GuessEngine::new(config, Secret::new(secret, secret.len()).unwrap()).unwrap()
    }

    fn type_word(engine: &mut GuessEngine, word: &str) {
        for c in word.chars() {
            engine.add_letter(c, &mut ());
        }
    }

    #[test]
    fn test_add_letter_normalizes_case() {
        let mut engine = engine("apple", 6);
        assert!(engine.add_letter('A', &mut ()));
        assert_eq!(engine.state().current_row_text(), "a");
    }

    #[test]
    fn test_add_letter_rejects_non_letters() {
        let mut engine = engine("apple", 6);
        assert!(!engine.add_letter('1', &mut ()));
        assert!(!engine.add_letter(' ', &mut ()));
        assert!(!engine.add_letter('é', &mut ()));
        assert_eq!(engine.state().current_col(), 0);
    }

    #[test]
    fn test_add_letter_beyond_row_is_noop() {
        let mut engine = engine("apple", 6);
        type_word(&mut engine, "grape");
        assert!(!engine.add_letter('s', &mut ()));
        assert_eq!(engine.state().current_row_text(), "grape");
        assert_eq!(engine.state().current_col(), 5);
    }

    #[test]
    fn test_remove_letter_at_start_is_noop() {
        let mut engine = engine("apple", 6);
        assert!(!engine.remove_letter(&mut ()));
        assert_eq!(engine.state().current_col(), 0);
    }

    #[test]
    fn test_remove_letter() {
        let mut engine = engine("apple", 6);
        type_word(&mut engine, "ap");
        assert!(engine.remove_letter(&mut ()));
        assert_eq!(engine.state().current_row_text(), "a");
        assert_eq!(engine.state().current_col(), 1);
    }

    #[test]
    fn test_submit_partial_row_is_noop() {
        let mut engine = engine("apple", 6);
        type_word(&mut engine, "app");
        assert!(engine.submit_guess(&mut ()).is_none());
        assert_eq!(engine.state().current_row(), 0);
        assert_eq!(engine.state().current_col(), 3);
    }

    #[test]
    fn test_wrong_guess_advances_row() {
        let mut engine = engine("apple", 6);
        type_word(&mut engine, "lleap");
        let results = engine.submit_guess(&mut ()).unwrap();

        assert_eq!(results.as_slice(), &[Present, Absent, Present, Present, Present]);
        assert_eq!(engine.state().status(), GameStatus::InProgress);
        assert_eq!(engine.state().current_row(), 1);
        assert_eq!(engine.state().current_col(), 0);
        assert_eq!(engine.state().tries_used(), 1);
    }

    #[test]
    fn test_win_on_later_row() {
        let mut engine = engine("apple", 6);
        type_word(&mut engine, "grape");
        engine.submit_guess(&mut ());
        type_word(&mut engine, "apple");

        let mut events: Vec<GameEvent> = Vec::new();
        engine.submit_guess(&mut events);

        assert_eq!(engine.state().status(), GameStatus::Won);
        assert_eq!(engine.state().current_row(), 1);
        let summary = engine.state().round_summary().unwrap();
        assert_eq!(summary.tries, 2);
        assert_eq!(events.last(), Some(&GameEvent::RoundEnded(summary)));
    }

    #[test]
    fn test_loss_on_last_row() {
        let mut engine = engine("apple", 2);
        type_word(&mut engine, "grape");
        engine.submit_guess(&mut ());
        type_word(&mut engine, "lemon");
        engine.submit_guess(&mut ());

        assert_eq!(engine.state().status(), GameStatus::Lost);
        assert_eq!(engine.state().current_row(), 1);
        assert_eq!(engine.state().round_summary().unwrap().tries, 2);
    }

    #[test]
    fn test_terminal_state_is_frozen() {
        let mut engine = engine("apple", 6);
        type_word(&mut engine, "apple");
        engine.submit_guess(&mut ());
        let before = engine.state().clone();

        let mut events: Vec<GameEvent> = Vec::new();
        assert!(!engine.add_letter('x', &mut events));
        assert!(!engine.remove_letter(&mut events));
        assert!(engine.submit_guess(&mut events).is_none());

        assert!(events.is_empty());
        assert_eq!(engine.state().current_row(), before.current_row());
        assert_eq!(engine.state().current_col(), before.current_col());
        assert_eq!(engine.state().current_row_text(), before.current_row_text());
        assert_eq!(engine.state().status(), before.status());
    }

    #[test]
    fn test_keyboard_hints_never_downgrade() {
        let mut engine = engine("apple", 6);
        type_word(&mut engine, "axxxx");
        engine.submit_guess(&mut ());
        assert_eq!(engine.keyboard().get('a'), Some(Correct));

        type_word(&mut engine, "xaxxx");
        let mut events: Vec<GameEvent> = Vec::new();
        engine.submit_guess(&mut events);

        assert_eq!(engine.keyboard().get('a'), Some(Correct));
        assert!(events.contains(&GameEvent::KeyboardHint { letter: 'a', best: Correct }));
        assert!(events.contains(&GameEvent::CellScored {
            row: 1,
            col: 1,
            letter: 'a',
            result: Present,
        }));
    }

    #[test]
    fn test_start_round_clears_everything() {
        let mut engine = engine("apple", 6);
        type_word(&mut engine, "apple");
        engine.submit_guess(&mut ());

        let mut events: Vec<GameEvent> = Vec::new();
        engine
            .start_round(Secret::new("berry", 5).unwrap(), &mut events)
            .unwrap();

        assert_eq!(engine.state().status(), GameStatus::InProgress);
        assert_eq!(engine.state().secret().as_str(), "berry");
        assert!(engine.keyboard().is_empty());
        assert!(engine.state().scored_rows().is_empty());
        assert_eq!(events, vec![GameEvent::RoundStarted { word_length: 5, rows: 6 }]);
    }

    #[test]
    fn test_start_round_rejects_secret_of_other_length() {
        let mut engine = engine("coffee", 6);
        type_word(&mut engine, "cof");

        let mut events: Vec<GameEvent> = Vec::new();
        let err = engine
            .start_round(Secret::new("apple", 5).unwrap(), &mut events)
            .unwrap_err();

        assert_eq!(
            err,
            crate::core::WordleError::WrongLength {
                word: "apple".to_string(),
                expected: 6,
                actual: 5,
            }
        );
        assert!(events.is_empty());
        assert_eq!(engine.state().secret().as_str(), "coffee");
        assert_eq!(engine.state().current_row_text(), "cof");
    }

    #[test]
    fn test_handle_key_dispatch() {
        let mut engine = engine("apple", 6);
        assert!(engine.handle_key(KeyInput::Letter('a'), &mut ()));
        assert!(engine.handle_key(KeyInput::Backspace, &mut ()));
        assert!(!engine.handle_key(KeyInput::Enter, &mut ()));
        assert!(!engine.handle_key(KeyInput::Ignored, &mut ()));
        assert_eq!(engine.state().current_col(), 0);
    }
}
