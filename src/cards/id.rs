//! Card identifiers.
//!
//! A card id is exactly 8 characters: a two-letter language code followed
//! by six digits, e.g. `SP000001`. The prefix is case-insensitive on input
//! and stored upper-cased.

use serde::{Deserialize, Serialize};

use crate::core::{CardError, Language};

/// Validated card identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CardId {
    text: String,
    language: Language,
}

impl CardId {
    /// Total id length in characters.
    pub const LEN: usize = 8;

    /// Length of the language prefix.
    pub const PREFIX_LEN: usize = 2;

    /// Validate an id and resolve its language.
    ///
    /// ```
    /// use word_bingo::cards::CardId;
    /// use word_bingo::core::Language;
    ///
    /// let id = CardId::parse("en123456").unwrap();
    /// assert_eq!(id.as_str(), "EN123456");
    /// assert_eq!(id.language(), Language::English);
    ///
    /// assert!(CardId::parse("XX123456").is_err());
    /// assert!(CardId::parse("EN12345").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<CardId, CardError> {
        let actual = raw.chars().count();
        if actual != Self::LEN {
            return Err(CardError::InvalidLength {
                expected: Self::LEN,
                actual,
            });
        }

        let prefix: String = raw.chars().take(Self::PREFIX_LEN).collect::<String>().to_uppercase();
        let Some(language) = Language::from_code(&prefix) else {
            return Err(CardError::UnknownLanguage {
                prefix,
                valid: Language::valid_codes(),
            });
        };

        if !raw.chars().skip(Self::PREFIX_LEN).all(|c| c.is_ascii_digit()) {
            return Err(CardError::NonNumericSuffix(raw.to_string()));
        }

        // Prefix and suffix are ASCII from here on
        Ok(CardId {
            text: raw.to_ascii_uppercase(),
            language,
        })
    }

    /// Language encoded in the prefix.
    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    /// The normalized id text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::str::FromStr for CardId {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CardId::parse(s)
    }
}

impl TryFrom<String> for CardId {
    type Error = CardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        CardId::parse(&value)
    }
}

impl From<CardId> for String {
    fn from(id: CardId) -> Self {
        id.text
    }
}
