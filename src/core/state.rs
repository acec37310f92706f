//! Game state: secret, board, cursor and status.
//!
//! `GameState` is the single source of truth for a round. It has no
//! knowledge of rendering and exposes read accessors only; every
//! mutation goes through the crate-private methods used by
//! [`GuessEngine`](crate::engine::GuessEngine).
//!
//! ## Invariants
//!
//! - Cells fill left-to-right in the current row only, with no gaps.
//! - `current_row < rows` and `current_col <= word_length`.
//! - `current_col` returns to 0 whenever `current_row` advances.
//! - Status becomes terminal at most once per round.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::GameConfig;
use super::error::{Result, WordleError};
use super::secret::Secret;
use crate::scoring::RowResult;

/// One board row. `None` is an empty cell.
pub type Row = SmallVec<[Option<char>; 8]>;

/// Round status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Accepting input.
    #[default]
    InProgress,
    /// The secret was guessed.
    Won,
    /// The last row was submitted without guessing the secret.
    Lost,
}

impl GameStatus {
    /// True for `Won` and `Lost`.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in_progress"),
            GameStatus::Won => write!(f, "won"),
            GameStatus::Lost => write!(f, "lost"),
        }
    }
}

/// A submitted row with its scoring.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredRow {
    /// Row index on the board.
    pub row: usize,
    /// The guessed word.
    pub guess: String,
    /// One result per column.
    pub results: RowResult,
}

/// Outcome of a finished round, as delivered to the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// `Won` or `Lost`.
    pub status: GameStatus,
    /// The secret, revealed.
    pub secret: Secret,
    /// Guesses used, 1-based.
    pub tries: usize,
}

/// Complete state of one round.
///
/// Uses an `im` vector for submitted rows so snapshots handed to a
/// renderer clone in O(1).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    config: GameConfig,
    secret: Secret,
    board: Vec<Row>,
    current_row: usize,
    current_col: usize,
    status: GameStatus,
    scored_rows: Vector<ScoredRow>,
}

impl GameState {
    /// Create a fresh round.
    ///
    /// Fails if the config is invalid or the secret length does not match
    /// `config.word_length`.
    pub fn new(config: GameConfig, secret: Secret) -> Result<Self> {
        config.validate()?;
        check_secret(&config, &secret)?;

        Ok(Self {
            board: empty_board(&config),
            config,
            secret,
            current_row: 0,
            current_col: 0,
            status: GameStatus::InProgress,
            scored_rows: Vector::new(),
        })
    }

    /// Start over with a new secret: empty board, cursor (0, 0), in progress.
    ///
    /// The only failure is a secret whose length differs from the
    /// configured word length; the state is left untouched in that case.
    pub fn reset(&mut self, secret: Secret) -> Result<()> {
        check_secret(&self.config, &secret)?;

        self.secret = secret;
        self.board = empty_board(&self.config);
        self.current_row = 0;
        self.current_col = 0;
        self.status = GameStatus::InProgress;
        self.scored_rows = Vector::new();
        Ok(())
    }

    // === Read access ===

    /// Round configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The secret word.
    #[must_use]
    pub fn secret(&self) -> &Secret {
        &self.secret
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Row the cursor is on.
    #[must_use]
    pub fn current_row(&self) -> usize {
        self.current_row
    }

    /// Column the next letter goes into.
    #[must_use]
    pub fn current_col(&self) -> usize {
        self.current_col
    }

    /// Letter at `(row, col)`, `None` if empty or out of range.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        self.board.get(row)?.get(col).copied().flatten()
    }

    /// Concatenated letters of `row`, `None` if out of range.
    #[must_use]
    pub fn row_text(&self, row: usize) -> Option<String> {
        self.board.get(row).map(|cells| cells.iter().flatten().collect())
    }

    /// Concatenated letters of the current row.
    #[must_use]
    pub fn current_row_text(&self) -> String {
        self.row_text(self.current_row).unwrap_or_default()
    }

    /// True when the current row has every cell filled.
    #[must_use]
    pub fn is_row_full(&self) -> bool {
        self.current_col == self.config.word_length
    }

    /// Every submitted row, oldest first.
    #[must_use]
    pub fn scored_rows(&self) -> &Vector<ScoredRow> {
        &self.scored_rows
    }

    /// Number of submitted guesses.
    ///
    /// Equals `current_row + 1` once the round is over.
    #[must_use]
    pub fn tries_used(&self) -> usize {
        self.scored_rows.len()
    }

    /// Summary of the round, `None` while still in progress.
    #[must_use]
    pub fn round_summary(&self) -> Option<RoundSummary> {
        self.status.is_terminal().then(|| RoundSummary {
            status: self.status,
            secret: self.secret.clone(),
            tries: self.current_row + 1,
        })
    }

    // === Mutation (engine only) ===

    /// Write `letter` at the cursor. Returns the column written.
    pub(crate) fn push_letter(&mut self, letter: char) -> Option<usize> {
        if self.is_row_full() {
            return None;
        }
        let col = self.current_col;
        self.board[self.current_row][col] = Some(letter);
        self.current_col += 1;
        Some(col)
    }

    /// Clear the cell before the cursor. Returns the column cleared.
    pub(crate) fn pop_letter(&mut self) -> Option<usize> {
        if self.current_col == 0 {
            return None;
        }
        self.current_col -= 1;
        self.board[self.current_row][self.current_col] = None;
        Some(self.current_col)
    }

    pub(crate) fn record_row(&mut self, scored: ScoredRow) {
        self.scored_rows.push_back(scored);
    }

    /// Move to the start of the next row. No-op on the last row.
    pub(crate) fn advance_row(&mut self) {
        if self.current_row < self.config.last_row() {
            self.current_row += 1;
            self.current_col = 0;
        }
    }

    pub(crate) fn finish(&mut self, status: GameStatus) {
        debug_assert!(status.is_terminal());
        self.status = status;
    }
}

fn empty_board(config: &GameConfig) -> Vec<Row> {
    (0..config.rows)
        .map(|_| SmallVec::from_elem(None, config.word_length))
        .collect()
}

fn check_secret(config: &GameConfig, secret: &Secret) -> Result<()> {
    if secret.len() != config.word_length {
        return Err(WordleError::WrongLength {
            word: secret.to_string(),
            expected: config.word_length,
            actual: secret.len(),
        });
    }
    Ok(())
}
