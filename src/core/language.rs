//! Languages and per-language storage.
//!
//! ## Language
//!
//! The closed set of languages a card can be written in. Each carries a
//! two-letter code (the card id prefix), a display name and the maximum
//! number of words a card in that language may hold.
//!
//! ## LanguageMap
//!
//! Fixed-size storage with one slot per language, indexed by `Language`.
//! Unknown languages cannot be represented, so lookups never miss.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// A language supported by the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Language {
    /// `SP`, 24 words per card.
    Spanish,
    /// `EN`, 14 words per card.
    English,
    /// `PT`, 20 words per card.
    Portuguese,
    /// `DT`, 10 words per card.
    Dutch,
}

impl Language {
    /// All languages in their canonical order.
    pub const ALL: [Language; 4] = [
        Language::Spanish,
        Language::English,
        Language::Portuguese,
        Language::Dutch,
    ];

    /// Number of supported languages.
    pub const COUNT: usize = Self::ALL.len();

    /// Two-letter uppercase code used as the card id prefix.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Language::Spanish => "SP",
            Language::English => "EN",
            Language::Portuguese => "PT",
            Language::Dutch => "DT",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Language::Spanish => "Spanish",
            Language::English => "English",
            Language::Portuguese => "Portuguese",
            Language::Dutch => "Dutch",
        }
    }

    /// Maximum number of words on a card in this language.
    #[must_use]
    pub const fn max_words(self) -> usize {
        match self {
            Language::Spanish => 24,
            Language::English => 14,
            Language::Portuguese => 20,
            Language::Dutch => 10,
        }
    }

    /// Slot of this language in a `LanguageMap`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Resolve a two-letter code, ignoring case.
    ///
    /// ```
    /// use word_bingo::core::Language;
    ///
    /// assert_eq!(Language::from_code("sp"), Some(Language::Spanish));
    /// assert_eq!(Language::from_code("DT"), Some(Language::Dutch));
    /// assert_eq!(Language::from_code("FR"), None);
    /// ```
    #[must_use]
    pub fn from_code(code: &str) -> Option<Language> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
    }

    /// Comma-separated list of every valid code, for error messages.
    #[must_use]
    pub fn valid_codes() -> String {
        Self::ALL.map(Language::code).join(", ")
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-language data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use word_bingo::core::{Language, LanguageMap};
///
/// let mut counts: LanguageMap<u32> = LanguageMap::default();
/// counts[Language::English] += 3;
///
/// assert_eq!(counts[Language::English], 3);
/// assert_eq!(counts[Language::Dutch], 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageMap<T> {
    data: [T; Language::COUNT],
}

impl<T> LanguageMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Language) -> T) -> Self {
        Self {
            data: Language::ALL.map(factory),
        }
    }

    /// Get a reference to a language's data.
    #[must_use]
    pub fn get(&self, language: Language) -> &T {
        &self.data[language.index()]
    }

    /// Get a mutable reference to a language's data.
    pub fn get_mut(&mut self, language: Language) -> &mut T {
        &mut self.data[language.index()]
    }

    /// Iterate over `(Language, &T)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Language, &T)> {
        Language::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over `(Language, &mut T)` pairs in canonical order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Language, &mut T)> {
        Language::ALL.into_iter().zip(self.data.iter_mut())
    }

    /// Iterate over the values in canonical order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<Language> for LanguageMap<T> {
    type Output = T;

    fn index(&self, language: Language) -> &Self::Output {
        self.get(language)
    }
}

impl<T> IndexMut<Language> for LanguageMap<T> {
    fn index_mut(&mut self, language: Language) -> &mut Self::Output {
        self.get_mut(language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
            assert_eq!(Language::from_code(&lang.code().to_lowercase()), Some(lang));
        }
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(Language::from_code("FR"), None);
        assert_eq!(Language::from_code(""), None);
        assert_eq!(Language::from_code("SPA"), None);
    }

    #[test]
    fn test_max_words() {
        assert_eq!(Language::Spanish.max_words(), 24);
        assert_eq!(Language::English.max_words(), 14);
        assert_eq!(Language::Portuguese.max_words(), 20);
        assert_eq!(Language::Dutch.max_words(), 10);
    }

    #[test]
    fn test_valid_codes() {
        assert_eq!(Language::valid_codes(), "SP, EN, PT, DT");
    }

    #[test]
    fn test_language_map_indexing() {
        let mut map = LanguageMap::new(|lang| lang.max_words());
        assert_eq!(map[Language::Portuguese], 20);

        map[Language::Portuguese] = 1;
        assert_eq!(map[Language::Portuguese], 1);
        assert_eq!(map[Language::Spanish], 24);
    }

    #[test]
    fn test_language_map_iteration_order() {
        let map = LanguageMap::new(|lang| lang.code());
        let pairs: Vec<_> = map.iter().map(|(lang, code)| (lang, *code)).collect();

        assert_eq!(pairs.len(), Language::COUNT);
        assert_eq!(pairs[0], (Language::Spanish, "SP"));
        assert_eq!(pairs[3], (Language::Dutch, "DT"));
    }
}
