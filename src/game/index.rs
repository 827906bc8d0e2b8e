//! Inverted index from word to the cards containing it.
//!
//! Lookup is O(1) expected per announced word. Each posting list keeps
//! card ids in insertion (registration) order so multi-winner results are
//! reproducible.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::cards::CardId;

/// Posting list for one word. Most words appear on only a few cards.
pub type Postings = SmallVec<[CardId; 4]>;

/// Word → card ids for a single language.
#[derive(Clone, Debug, Default)]
pub struct WordIndex {
    postings: FxHashMap<String, Postings>,
}

impl WordIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `card` contains each of `words`.
    pub fn insert<'a>(&mut self, card: &CardId, words: impl IntoIterator<Item = &'a String>) {
        for word in words {
            self.postings.entry(word.clone()).or_default().push(card.clone());
        }
    }

    /// Cards containing `word`, in registration order.
    #[must_use]
    pub fn cards_for(&self, word: &str) -> &[CardId] {
        self.postings.get(word).map(|p| p.as_slice()).unwrap_or(&[])
    }

    /// Number of distinct indexed words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    /// Check if nothing is indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}
