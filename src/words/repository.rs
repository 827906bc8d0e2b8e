//! Word repository: valid words per language and draws without repetition.
//!
//! Each language holds a sorted, de-duplicated word list and the set of
//! words already drawn this round. Lists are loaded once; afterwards only
//! `draw` and `reset_round` mutate the repository.
//!
//! ## Word-list format
//!
//! One word per line. Empty lines and lines starting with `#` are skipped.
//! Everything else is trimmed and lowercased.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::algorithms::{binary_search, edit_distance, merge_sort};
use crate::core::{BingoConfig, GameRng, Language, LanguageMap, RepositoryError};

/// Normalize a word: trim and lowercase.
#[must_use]
pub fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

/// Closest valid word to some input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Suggestion {
    pub word: String,
    pub distance: usize,
}

/// Word counts for one language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCounts {
    pub total: usize,
    pub drawn: usize,
    pub remaining: usize,
}

/// Per-language word lists plus the draw history of the current round.
#[derive(Clone, Debug)]
pub struct WordRepository {
    config: BingoConfig,
    words: LanguageMap<Vec<String>>,
    drawn: LanguageMap<FxHashSet<String>>,
    rng: GameRng,
}

impl WordRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new(config: BingoConfig) -> Self {
        let rng = GameRng::from_seed(config.seed);
        Self {
            config,
            words: LanguageMap::default(),
            drawn: LanguageMap::default(),
            rng,
        }
    }

    /// Create a repository and load the word lists under `config.word_list_dir`.
    ///
    /// Missing or unreadable lists leave their language empty; the returned
    /// errors describe them.
    pub fn open(config: BingoConfig) -> (Self, Vec<RepositoryError>) {
        let dir = config.word_list_dir.clone();
        let mut repo = Self::new(config);
        let warnings = repo.load(&dir);
        (repo, warnings)
    }

    /// Replace the random source used by `draw`.
    #[must_use]
    pub fn with_rng(mut self, rng: GameRng) -> Self {
        self.rng = rng;
        self
    }

    /// Load every language's word list from `base_path`.
    ///
    /// Words are appended to what is already loaded. A missing or unreadable
    /// source is logged and reported, never fatal.
    pub fn load(&mut self, base_path: &Path) -> Vec<RepositoryError> {
        let mut warnings = Vec::new();

        for language in Language::ALL {
            let path = self.config.word_list_path(base_path, language);
            match std::fs::read_to_string(&path) {
                Ok(text) => {
                    let added = self.load_str(language, &text);
                    log::info!("Loaded {} {} words from {}", added, language, path.display());
                }
                Err(e) => {
                    let err = if e.kind() == std::io::ErrorKind::NotFound {
                        RepositoryError::MissingSource { language, path }
                    } else {
                        RepositoryError::Unreadable { language, path, source: e }
                    };
                    log::warn!("{}", err);
                    warnings.push(err);
                }
            }
        }

        warnings
    }

    /// Merge words in word-list format into a language.
    ///
    /// Returns how many new words were added.
    pub fn load_str(&mut self, language: Language, text: &str) -> usize {
        let list = &mut self.words[language];
        let before = list.len();

        list.extend(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(str::to_lowercase),
        );
        merge_sort(list.as_mut_slice());
        list.dedup();

        list.len() - before
    }

    /// Check whether a word is valid in a language. Input is normalized first.
    #[must_use]
    pub fn word_exists(&self, language: Language, word: &str) -> bool {
        let word = normalize(word);
        binary_search(&self.words[language], word.as_str()).is_some()
    }

    /// Suggest the closest valid word within `config.suggestion_distance`.
    #[must_use]
    pub fn suggest(&self, language: Language, word: &str) -> Option<Suggestion> {
        self.suggest_within(language, word, self.config.suggestion_distance)
    }

    /// Suggest the closest valid word within `max_distance` edits.
    ///
    /// An exact match yields distance 0. Otherwise scans in sorted order and
    /// keeps the first word at the smallest distance, so ties go to the
    /// lexicographically earliest word. Stops early at distance 1.
    #[must_use]
    pub fn suggest_within(&self, language: Language, word: &str, max_distance: usize) -> Option<Suggestion> {
        let word = normalize(word);
        let words = &self.words[language];
        if binary_search(words, word.as_str()).is_some() {
            return Some(Suggestion { word, distance: 0 });
        }

        // Exact matches are handled above, so distance 1 is the best possible
        let mut best: Option<Suggestion> = None;

        for candidate in words {
            let distance = edit_distance(&word, candidate);
            if distance > max_distance {
                continue;
            }
            if best.as_ref().map_or(true, |b| distance < b.distance) {
                best = Some(Suggestion {
                    word: candidate.clone(),
                    distance,
                });
                if distance == 1 {
                    break;
                }
            }
        }

        best
    }

    /// Draw a word not yet drawn this round, uniformly at random.
    ///
    /// Returns `None` once every word of the language has been drawn.
    pub fn draw(&mut self, language: Language) -> Option<String> {
        let drawn = &self.drawn[language];
        let available: Vec<&String> = self.words[language]
            .iter()
            .filter(|w| !drawn.contains(w.as_str()))
            .collect();

        let word = (*self.rng.choose(&available)?).clone();
        log::debug!("Drew '{}' for {} ({} left)", word, language, available.len() - 1);
        self.drawn[language].insert(word.clone());
        Some(word)
    }

    /// Make every word of one language drawable again.
    pub fn reset_round(&mut self, language: Language) {
        self.drawn[language].clear();
    }

    /// Make every word of every language drawable again.
    pub fn reset_all_rounds(&mut self) {
        for (_, drawn) in self.drawn.iter_mut() {
            drawn.clear();
        }
    }

    /// Number of valid words in a language.
    #[must_use]
    pub fn total(&self, language: Language) -> usize {
        self.words[language].len()
    }

    /// Number of words still drawable this round.
    #[must_use]
    pub fn remaining(&self, language: Language) -> usize {
        self.total(language) - self.drawn[language].len()
    }

    /// Sorted word list of a language.
    #[must_use]
    pub fn words(&self, language: Language) -> &[String] {
        &self.words[language]
    }

    /// Words drawn so far this round.
    #[must_use]
    pub fn drawn(&self, language: Language) -> &FxHashSet<String> {
        &self.drawn[language]
    }

    /// Word counts for every language.
    #[must_use]
    pub fn stats(&self) -> LanguageMap<WordCounts> {
        LanguageMap::new(|language| WordCounts {
            total: self.total(language),
            drawn: self.drawn[language].len(),
            remaining: self.remaining(language),
        })
    }

    /// Configuration this repository was built with.
    #[must_use]
    pub fn config(&self) -> &BingoConfig {
        &self.config
    }
}
