//! Game configuration types.
//!
//! A round is shaped by:
//! - `GameConfig`: word length and number of rows
//! - `ShareConfig`: title and link used in the share text
//!
//! The engine never hardcodes either dimension - every bound check reads
//! them from the config.

use serde::{Deserialize, Serialize};

use super::error::{Result, WordleError};

/// Default number of letters per word.
pub const DEFAULT_WORD_LENGTH: usize = 6;

/// Default number of guesses per round.
pub const DEFAULT_ROWS: usize = 6;

/// Upper bound for either dimension.
///
/// Rows of up to 8 cells are stored inline; wider rows spill to the heap.
pub const MAX_DIMENSION: usize = 16;

/// Title and link for the share text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Headline shown before the score, e.g. `Panda's Wordle+`.
    pub title: String,

    /// Link appended after the emoji grid.
    pub link: String,
}

impl ShareConfig {
    /// Create a share configuration.
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
        }
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self::new("Panda's Wordle+", "https://panda2126.github.io/wordle-plus/")
    }
}

/// Complete game configuration.
///
/// ```
/// use wordle_plus::core::GameConfig;
///
/// let config = GameConfig::new().with_word_length(5).with_rows(6);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.last_row(), 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Letters per word (WORD_LENGTH).
    pub word_length: usize,

    /// Guesses per round (ROWS).
    pub rows: usize,

    /// Share text metadata.
    pub share: ShareConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            rows: DEFAULT_ROWS,
            share: ShareConfig::default(),
        }
    }
}

impl GameConfig {
    /// Create the default configuration (6 letters, 6 rows).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the word length.
    #[must_use]
    pub fn with_word_length(mut self, word_length: usize) -> Self {
        self.word_length = word_length;
        self
    }

    /// Set the number of rows.
    #[must_use]
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// Set the share metadata.
    #[must_use]
    pub fn with_share(mut self, share: ShareConfig) -> Self {
        self.share = share;
        self
    }

    /// Index of the final row.
    ///
    /// Only meaningful on a validated config (`rows > 0`).
    #[must_use]
    pub fn last_row(&self) -> usize {
        self.rows.saturating_sub(1)
    }

    /// Check both dimensions are in `1..=MAX_DIMENSION`.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_DIMENSION).contains(&self.word_length) {
            return Err(WordleError::InvalidConfig(format!(
                "word_length must be between 1 and {}, got {}",
                MAX_DIMENSION, self.word_length
            )));
        }
        if !(1..=MAX_DIMENSION).contains(&self.rows) {
            return Err(WordleError::InvalidConfig(format!(
                "rows must be between 1 and {}, got {}",
                MAX_DIMENSION, self.rows
            )));
        }
        Ok(())
    }
}
