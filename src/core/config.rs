//! Game configuration.
//!
//! `BingoConfig` collects the tunables of the repository and the manager:
//! where word lists live, how far suggestions may reach, how many invalid
//! words a rejection lists, the draw-limit heuristic and the random seed.
//! Every field has a default, so a partial JSON document is enough.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::Language;

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BingoConfig {
    /// Directory holding one word-list file per language.
    pub word_list_dir: PathBuf,

    /// File name prefix; language `XX` reads `<prefix>XX.txt`.
    pub word_list_prefix: String,

    /// Maximum edit distance for a "did you mean" suggestion.
    pub suggestion_distance: usize,

    /// How many invalid words a rejection lists before summarizing the rest.
    pub max_reported_invalid: usize,

    /// Lower bound of the draw limit, as a multiple of the language's max words.
    pub draw_limit_multiplier: usize,

    /// Share of the repository (in percent) a round may draw before stopping.
    pub draw_limit_percent: usize,

    /// Seed for draws and round shuffles. `None` picks one at random.
    pub seed: Option<u64>,
}

impl Default for BingoConfig {
    fn default() -> Self {
        Self {
            word_list_dir: PathBuf::from("repository"),
            word_list_prefix: "palabras_".to_string(),
            suggestion_distance: 2,
            max_reported_invalid: 5,
            draw_limit_multiplier: 3,
            draw_limit_percent: 80,
            seed: None,
        }
    }
}

impl BingoConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Set the word-list directory.
    #[must_use]
    pub fn with_word_list_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.word_list_dir = dir.into();
        self
    }

    /// Set the suggestion distance.
    #[must_use]
    pub fn with_suggestion_distance(mut self, distance: usize) -> Self {
        self.suggestion_distance = distance;
        self
    }

    /// Set the draw-limit heuristic.
    #[must_use]
    pub fn with_draw_limit(mut self, multiplier: usize, percent: usize) -> Self {
        self.draw_limit_multiplier = multiplier;
        self.draw_limit_percent = percent;
        self
    }

    /// Fix the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Path of the word-list file for a language under `base`.
    #[must_use]
    pub fn word_list_path(&self, base: &Path, language: Language) -> PathBuf {
        base.join(format!("{}{}.txt", self.word_list_prefix, language.code()))
    }
}
