//! Error types.
//!
//! Every rejection carries enough detail for a user to correct the input:
//! which part of an id is wrong, which words are unknown and the closest
//! valid word for each.

use std::path::PathBuf;
use thiserror::Error;

use super::Language;
use crate::cards::CardId;

/// Why a card id or a card registration was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// Id is not exactly `CardId::LEN` characters.
    #[error("card id must be exactly {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// The two-letter prefix names no known language.
    #[error("invalid language prefix '{prefix}' (valid: {valid})")]
    UnknownLanguage { prefix: String, valid: String },

    /// The six characters after the prefix are not all digits.
    #[error("the last 6 characters of card id '{0}' must be digits")]
    NonNumericSuffix(String),

    /// A card with this id is already registered.
    #[error("a card with id {0} is already registered")]
    Duplicate(CardId),

    /// More words than the language allows.
    #[error("card has {count} words, the maximum for {language} is {max}")]
    TooManyWords {
        language: Language,
        count: usize,
        max: usize,
    },

    /// No words left after normalization.
    #[error("card has no words")]
    Empty,

    /// Stored match progress does not fit the card's words.
    #[error("card {0} has match progress that does not fit its words")]
    InconsistentProgress(CardId),

    /// One or more words are not in the repository.
    #[error("{0}")]
    UnknownWords(UnknownWords),
}

/// Words missing from a language's repository, with suggestions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownWords {
    /// Language the card was checked against.
    pub language: Language,
    /// Reported words and their closest valid word, if any.
    pub entries: Vec<(String, Option<String>)>,
    /// Invalid words not listed in `entries`.
    pub omitted: usize,
}

impl UnknownWords {
    /// Total number of invalid words, listed or not.
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.len() + self.omitted
    }
}

impl std::fmt::Display for UnknownWords {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "words not found in {}:", self.language)?;
        for (word, suggestion) in &self.entries {
            match suggestion {
                Some(s) => write!(f, "\n  '{word}' -> did you mean '{s}'?")?,
                None => write!(f, "\n  '{word}' (no suggestion)")?,
            }
        }
        if self.omitted > 0 {
            write!(f, "\n  ... (+{} more)", self.omitted)?;
        }
        Ok(())
    }
}

/// A word list that could not be loaded. The language is left empty.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("word list for {language} not found: {}", path.display())]
    MissingSource { language: Language, path: PathBuf },

    #[error("failed to read word list for {language} at {}: {source}", path.display())]
    Unreadable {
        language: Language,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A card source that could not be read at all.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("card source not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read card source {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    /// Classify an I/O error raised while opening `path`.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            LoadError::NotFound { path }
        } else {
            LoadError::Io { path, source }
        }
    }
}

/// Why a single line of a card source was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("invalid format (a card id and at least 1 word are required)")]
    MissingWords,

    #[error("at least 1 word is required after the player id")]
    NoWords,

    #[error(transparent)]
    Rejected(#[from] CardError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_words_message() {
        let err = UnknownWords {
            language: Language::Spanish,
            entries: vec![
                ("csa".to_string(), Some("casa".to_string())),
                ("zzzz".to_string(), None),
            ],
            omitted: 3,
        };

        assert_eq!(err.total(), 5);
        assert_eq!(
            err.to_string(),
            "words not found in Spanish:\n  'csa' -> did you mean 'casa'?\n  'zzzz' (no suggestion)\n  ... (+3 more)"
        );
    }

    #[test]
    fn test_load_error_classification() {
        let missing = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(matches!(LoadError::from_io("cards.txt", missing), LoadError::NotFound { .. }));

        let denied = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        assert!(matches!(LoadError::from_io("cards.txt", denied), LoadError::Io { .. }));
    }

    #[test]
    fn test_line_error_wraps_card_error() {
        let err: LineError = CardError::Empty.into();
        assert_eq!(err.to_string(), "card has no words");
    }
}
