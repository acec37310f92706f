//! Notifications from the engine to the presentation layer.
//!
//! The engine never renders. It reports what happened through a
//! `GameObserver`, and the renderer draws from those reports.
//!
//! ## Ordering
//!
//! After a submit, for each column left to right:
//! 1. `on_cell_scored`
//! 2. `on_keyboard_hint`
//!
//! then, if the round just ended, a single `on_round_ended`.

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, RoundSummary};
use crate::scoring::CellResult;

/// Receives engine notifications. Every method defaults to a no-op.
pub trait GameObserver {
    /// A new round began; the board and keyboard are blank.
    fn on_round_started(&mut self, _config: &GameConfig) {}

    /// A letter was typed (`Some`) or erased (`None`).
    fn on_cell_changed(&mut self, _row: usize, _col: usize, _letter: Option<char>) {}

    /// One cell of a submitted row was scored.
    fn on_cell_scored(&mut self, _row: usize, _col: usize, _letter: char, _result: CellResult) {}

    /// Best result known for a keyboard key after this cell.
    fn on_keyboard_hint(&mut self, _letter: char, _best: CellResult) {}

    /// The round reached a terminal state.
    fn on_round_ended(&mut self, _summary: &RoundSummary) {}
}

/// Discards every notification.
impl GameObserver for () {}

/// Owned form of a notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// See [`GameObserver::on_round_started`].
    RoundStarted {
        word_length: usize,
        rows: usize,
    },
    /// See [`GameObserver::on_cell_changed`].
    CellChanged {
        row: usize,
        col: usize,
        letter: Option<char>,
    },
    /// See [`GameObserver::on_cell_scored`].
    CellScored {
        row: usize,
        col: usize,
        letter: char,
        result: CellResult,
    },
    /// See [`GameObserver::on_keyboard_hint`].
    KeyboardHint {
        letter: char,
        best: CellResult,
    },
    /// See [`GameObserver::on_round_ended`].
    RoundEnded(RoundSummary),
}

/// Records every notification in order.
impl GameObserver for Vec<GameEvent> {
    fn on_round_started(&mut self, config: &GameConfig) {
        self.push(GameEvent::RoundStarted {
            word_length: config.word_length,
            rows: config.rows,
        });
    }

    fn on_cell_changed(&mut self, row: usize, col: usize, letter: Option<char>) {
        self.push(GameEvent::CellChanged { row, col, letter });
    }

    fn on_cell_scored(&mut self, row: usize, col: usize, letter: char, result: CellResult) {
        self.push(GameEvent::CellScored {
            row,
            col,
            letter,
            result,
        });
    }

    fn on_keyboard_hint(&mut self, letter: char, best: CellResult) {
        self.push(GameEvent::KeyboardHint { letter, best });
    }

    fn on_round_ended(&mut self, summary: &RoundSummary) {
        self.push(GameEvent::RoundEnded(summary.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameStatus, Secret};

    #[test]
    fn test_vec_records_in_order() {
        let mut events: Vec<GameEvent> = Vec::new();
        events.on_cell_changed(0, 0, Some('a'));
        events.on_cell_scored(0, 0, 'a', CellResult::Present);
        events.on_keyboard_hint('a', CellResult::Present);

        assert_eq!(
            events,
            vec![
                GameEvent::CellChanged { row: 0, col: 0, letter: Some('a') },
                GameEvent::CellScored { row: 0, col: 0, letter: 'a', result: CellResult::Present },
                GameEvent::KeyboardHint { letter: 'a', best: CellResult::Present },
            ]
        );
    }

    #[test]
    fn test_event_serde() {
        let event = GameEvent::RoundEnded(RoundSummary {
            status: GameStatus::Won,
            secret: Secret::new("coffee", 6).unwrap(),
            tries: 3,
        });

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "round_ended");
        assert_eq!(json["status"], "won");
        assert_eq!(json["secret"], "coffee");
        assert_eq!(json["tries"], 3);

        let back: GameEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_unit_observer_is_silent() {
        let mut sink = ();
        sink.on_keyboard_hint('x', CellResult::Absent);
        sink.on_round_started(&GameConfig::default());
    }
}
