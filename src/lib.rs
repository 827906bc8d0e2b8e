//! # word-bingo
//!
//! A word bingo engine. Players hold cards of words in one of four
//! languages; a caller draws unclaimed words from a per-language repository
//! and announces them; every card holding the announced word is marked and
//! full cards win.
//!
//! ## Design Principles
//!
//! 1. **Closed Language Set**: `Language` is an enum and per-language data
//!    lives in `LanguageMap`, so an unknown language is a parse error at the
//!    card id, never a map miss.
//!
//! 2. **Exclusive Ownership**: `BingoManager` owns the cards and the
//!    repository. Cards change only through `mark` and `reset`.
//!
//! 3. **Injectable Randomness**: Draws and round order use `GameRng`; set
//!    `BingoConfig::seed` for reproducible games.
//!
//! ## Architecture
//!
//! - **Sorted word lists**: merge sort once at load time, binary search for
//!   validation, edit distance for "did you mean" suggestions.
//!
//! - **Inverted index**: word → card ids per language, so an announcement
//!   touches only the cards that contain the word.
//!
//! ## Modules
//!
//! - `core`: Languages, configuration, RNG, errors
//! - `words`: Sequence algorithms and the word repository
//! - `cards`: Card ids and cards
//! - `game`: Game manager, inverted index, bulk loading, stats

pub mod cards;
pub mod core;
pub mod game;
pub mod words;

// Re-export commonly used types
pub use crate::core::{
    BingoConfig, CardError, GameRng, Language, LanguageMap, LineError, LoadError, RepositoryError,
    UnknownWords,
};

pub use crate::words::{Suggestion, WordCounts, WordRepository};

pub use crate::cards::{Card, CardId};

pub use crate::game::{
    BingoManager, CardState, DrawOutcome, DrawProgress, GameStats, LanguageStats, LoadIssue,
    LoadReport, RoundAdvance, WordIndex,
};
