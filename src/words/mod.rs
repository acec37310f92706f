//! Word selection.
//!
//! A `WordList` is a fixed, validated set of candidate secrets. Picking is
//! uniform over the list and driven by a `GameRng`, so seeded sessions
//! replay the same secrets.

use serde::Serialize;

use crate::core::{GameRng, Result, Secret, WordleError};

/// The built-in six-letter list.
pub const DEFAULT_WORDS: &[&str] = &[
    "python", "coding", "gaming", "script", "player", "cursor", "syntax", "coffee", "laptop",
    "github", "branch", "commit",
];

/// A non-empty list of secrets of one fixed length.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WordList {
    word_length: usize,
    words: Vec<Secret>,
}

impl WordList {
    /// Validate and build a word list.
    ///
    /// Every word must be alphabetic and exactly `word_length` letters.
    /// Words are lowercased and duplicates dropped, keeping first-seen
    /// order.
    ///
    /// ```
    /// use wordle_plus::words::WordList;
    ///
    /// let list = WordList::new(["apple", "Berry", "apple"], 5).unwrap();
    /// assert_eq!(list.len(), 2);
    /// assert!(WordList::new(["apple", "kiwi"], 5).is_err());
    /// ```
    pub fn new<I, S>(words: I, word_length: usize) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut validated: Vec<Secret> = Vec::new();
        for word in words {
            let secret = Secret::new(word, word_length)?;
            if !validated.contains(&secret) {
                validated.push(secret);
            }
        }

        if validated.is_empty() {
            return Err(WordleError::EmptyWordList);
        }

        Ok(Self {
            word_length,
            words: validated,
        })
    }

    /// Letters per word.
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; an empty list cannot be built.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// True if `word` (any case) is on the list.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w.as_str().eq_ignore_ascii_case(word))
    }

    /// Iterate the words in list order.
    pub fn iter(&self) -> impl Iterator<Item = &Secret> {
        self.words.iter()
    }

    /// Pick a secret uniformly at random.
    #[must_use]
    pub fn pick(&self, rng: &mut GameRng) -> Secret {
        let idx = rng.gen_range_usize(0..self.words.len());
        self.words[idx].clone()
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self {
            word_length: crate::core::DEFAULT_WORD_LENGTH,
            words: DEFAULT_WORDS.iter().map(|w| Secret::from_trusted(w)).collect(),
        }
    }
}
