//! Game management: registration, inverted index, rounds and winners.
//!
//! ## Key Types
//!
//! - `BingoManager`: Owns cards and drives rounds
//! - `WordIndex`: Word → card ids, per language
//! - `LoadReport`: Outcome of a bulk card load
//! - `GameStats` / `CardState`: Read-only views for display

pub mod index;
pub mod loader;
pub mod manager;
pub mod stats;

pub use index::WordIndex;
pub use loader::{is_player_id, parse_line, CardLine, LoadIssue, LoadReport};
pub use manager::{BingoManager, DrawOutcome, RoundAdvance};
pub use stats::{CardState, DrawProgress, GameStats, LanguageStats};
