//! Error types.
//!
//! Player input never produces an error: invalid keys and out-of-place
//! operations are silent no-ops. Errors only come from constructing the
//! pieces a round is built from (config, secret, word list) and from
//! host-side setup such as logging.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, WordleError>;

/// Everything that can go wrong building or hosting a round.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordleError {
    /// A dimension is zero or too large, or parts of a session disagree.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A word does not have the letter count the board needs.
    #[error("Invalid word '{word}': expected {expected} letters, got {actual}")]
    WrongLength {
        word: String,
        expected: usize,
        actual: usize,
    },

    /// A word is empty or contains something other than `a-z`/`A-Z`.
    #[error("Invalid word '{0}': only ASCII letters are allowed")]
    NonAlphabetic(String),

    /// No candidate secrets were supplied.
    #[error("Word list is empty")]
    EmptyWordList,

    /// `score_guess` was given words of different lengths.
    #[error("Guess has {guess} letters but the secret has {secret}")]
    LengthMismatch { guess: usize, secret: usize },

    /// Bad log format or level, or a subscriber is already installed.
    #[error("Logging initialization failed: {0}")]
    Logging(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WordleError::WrongLength {
            word: "cat".to_string(),
            expected: 5,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "Invalid word 'cat': expected 5 letters, got 3"
        );

        let err = WordleError::LengthMismatch { guess: 4, secret: 5 };
        assert_eq!(err.to_string(), "Guess has 4 letters but the secret has 5");

        assert_eq!(WordleError::EmptyWordList.to_string(), "Word list is empty");
    }
}
