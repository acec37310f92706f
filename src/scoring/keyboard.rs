//! Best-known result per keyboard letter.

use rustc_hash::FxHashMap;

use super::feedback::CellResult;

/// Tracks the strongest result seen for each letter across a round.
///
/// A key only ever moves up `Absent -> Present -> Correct`; once a key
/// is `Correct` nothing changes it until [`KeyboardHints::clear`].
#[derive(Clone, Debug, Default)]
pub struct KeyboardHints {
    best: FxHashMap<char, CellResult>,
}

impl KeyboardHints {
    /// Create an empty hint table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a new result for `letter` in and return the best so far.
    pub fn record(&mut self, letter: char, result: CellResult) -> CellResult {
        let letter = letter.to_ascii_lowercase();
        let best = self
            .best
            .get(&letter)
            .map_or(result, |&current| current.max(result));
        self.best.insert(letter, best);
        best
    }

    /// Best result for `letter`, if it has been scored this round.
    #[must_use]
    pub fn get(&self, letter: char) -> Option<CellResult> {
        self.best.get(&letter.to_ascii_lowercase()).copied()
    }

    /// Number of letters with a hint.
    #[must_use]
    pub fn len(&self) -> usize {
        self.best.len()
    }

    /// True when no letter has been scored yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    /// Forget every hint. Called at round start.
    pub fn clear(&mut self) {
        self.best.clear();
    }
}
