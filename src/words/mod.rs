//! Word handling: sequence algorithms and the per-language repository.
//!
//! ## Key Types
//!
//! - `WordRepository`: sorted word lists, existence checks, suggestions, draws
//! - `Suggestion`: closest valid word and its edit distance
//! - `WordCounts`: total / drawn / remaining per language

pub mod algorithms;
pub mod repository;

pub use algorithms::{binary_search, edit_distance, merge_sort};
pub use repository::{normalize, Suggestion, WordCounts, WordRepository};
