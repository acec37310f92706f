//! Per-letter feedback and the two-pass scoring algorithm.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::error::{Result, WordleError};

/// Scoring outcome for a single cell.
///
/// Variants are ordered by strength: `Absent < Present < Correct`.
/// Keyboard hints rely on this ordering to never downgrade a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellResult {
    /// Letter does not appear in any unclaimed position of the secret.
    Absent,
    /// Letter appears in the secret at a different, unclaimed position.
    Present,
    /// Letter matches the secret at this position.
    Correct,
}

impl CellResult {
    /// Share-grid emoji for this result.
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            CellResult::Correct => '🟩',
            CellResult::Present => '🟨',
            CellResult::Absent => '⬛',
        }
    }

    /// CSS-style class name used by renderers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CellResult::Correct => "correct",
            CellResult::Present => "present",
            CellResult::Absent => "absent",
        }
    }
}

impl std::fmt::Display for CellResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Results for one row, one entry per column.
pub type RowResult = SmallVec<[CellResult; 8]>;

/// Score `guess` against `secret`.
///
/// Exact matches are claimed first; the remaining guess letters then take
/// the leftmost unclaimed occurrence of the same letter in the secret. A
/// letter is therefore never marked more times than it occurs in the
/// secret.
///
/// ```
/// use wordle_plus::scoring::{score_guess, CellResult::*};
///
/// let result = score_guess("eerie", "rebel").unwrap();
/// assert_eq!(result.as_slice(), &[Present, Correct, Absent, Present, Absent]);
/// ```
pub fn score_guess(secret: &str, guess: &str) -> Result<RowResult> {
    // `None` marks a consumed position.
    let mut secret_left: SmallVec<[Option<char>; 8]> = secret.chars().map(Some).collect();
    let mut guess_left: SmallVec<[Option<char>; 8]> = guess.chars().map(Some).collect();

    if secret_left.len() != guess_left.len() {
        return Err(WordleError::LengthMismatch {
            guess: guess_left.len(),
            secret: secret_left.len(),
        });
    }

    let mut result: RowResult = SmallVec::from_elem(CellResult::Absent, guess_left.len());

    for i in 0..guess_left.len() {
        if guess_left[i] == secret_left[i] {
            result[i] = CellResult::Correct;
            secret_left[i] = None;
            guess_left[i] = None;
        }
    }

    for i in 0..guess_left.len() {
        let Some(letter) = guess_left[i] else {
            continue;
        };
        if let Some(pos) = secret_left.iter().position(|&s| s == Some(letter)) {
            result[i] = CellResult::Present;
            secret_left[pos] = None;
        }
    }

    Ok(result)
}
