//! The hidden target word for a round.

use serde::{Deserialize, Serialize};

use super::config::MAX_DIMENSION;
use super::error::{Result, WordleError};

/// A validated, lowercase secret word.
///
/// Once built a `Secret` cannot change; a new round gets a new `Secret`.
///
/// ```
/// use wordle_plus::core::Secret;
///
/// let secret = Secret::new("Coffee", 6).unwrap();
/// assert_eq!(secret.as_str(), "coffee");
/// assert!(Secret::new("tea", 6).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Secret(String);

impl Secret {
    /// Validate `word` as a secret of exactly `word_length` letters.
    pub fn new(word: impl AsRef<str>, word_length: usize) -> Result<Self> {
        let secret = Self::parse(word.as_ref())?;
        let actual = secret.len();
        if actual != word_length {
            return Err(WordleError::WrongLength {
                word: secret.0,
                expected: word_length,
                actual,
            });
        }
        Ok(secret)
    }

    fn parse(word: &str) -> Result<Self> {
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordleError::NonAlphabetic(word.to_string()));
        }
        if word.len() > MAX_DIMENSION {
            return Err(WordleError::WrongLength {
                word: word.to_string(),
                expected: MAX_DIMENSION,
                actual: word.len(),
            });
        }
        Ok(Self(word.to_ascii_lowercase()))
    }

    /// Wrap a word known to be valid, such as a built-in list entry.
    pub(crate) fn from_trusted(word: &str) -> Self {
        debug_assert!(word.chars().all(|c| c.is_ascii_lowercase()));
        Self(word.to_string())
    }

    /// The secret as a lowercase string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a validated secret.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Letters in order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }
}

impl TryFrom<String> for Secret {
    type Error = WordleError;

    fn try_from(word: String) -> Result<Self> {
        Self::parse(&word)
    }
}

impl From<Secret> for String {
    fn from(secret: Secret) -> Self {
        secret.0
    }
}

impl std::fmt::Display for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_normalizes_case() {
        let secret = Secret::new("PyThOn", 6).unwrap();
        assert_eq!(secret.as_str(), "python");
        assert_eq!(secret.len(), 6);
        assert_eq!(secret.to_string(), "python");
    }

    #[test]
    fn test_secret_letters_in_order() {
        let secret = Secret::new("Eerie", 5).unwrap();
        let letters: Vec<char> = secret.letters().collect();
        assert_eq!(letters, vec!['e', 'e', 'r', 'i', 'e']);
    }

    #[test]
    fn test_secret_rejects_wrong_length() {
        let err = Secret::new("apple", 6).unwrap_err();
        assert_eq!(
            err,
            WordleError::WrongLength {
                word: "apple".to_string(),
                expected: 6,
                actual: 5,
            }
        );
    }

    #[test]
    fn test_secret_rejects_non_letters() {
        assert!(matches!(
            Secret::new("c0ffee", 6),
            Err(WordleError::NonAlphabetic(_))
        ));
        assert!(matches!(Secret::new("", 0), Err(WordleError::NonAlphabetic(_))));
        assert!(matches!(
            Secret::new("café!", 5),
            Err(WordleError::NonAlphabetic(_))
        ));
    }

    #[test]
    fn test_secret_serde_validates() {
        let secret = Secret::new("laptop", 6).unwrap();
        let json = serde_json::to_string(&secret).unwrap();
        assert_eq!(json, "\"laptop\"");

        let back: Secret = serde_json::from_str(&json).unwrap();
        assert_eq!(back, secret);

        assert!(serde_json::from_str::<Secret>("\"l4ptop\"").is_err());
    }
}
