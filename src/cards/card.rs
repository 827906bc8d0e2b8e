//! A player's card: target words plus match progress.
//!
//! Cards are owned by the game manager once registered. The only mutation
//! surface is `mark` and `reset`.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::id::CardId;
use crate::core::{CardError, Language};

/// Shown in place of a missing player id.
pub const NO_PLAYER: &str = "N/A";

/// A bingo card.
///
/// `matched_count` always equals the size of the matched set; a card is won
/// once every target word has been matched. Deserialization goes through
/// `Card::new` and replays the stored matches, so it upholds the same rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CardRecord")]
pub struct Card {
    id: CardId,
    words: BTreeSet<String>,
    player: Option<String>,
    matched: FxHashSet<String>,
    matched_count: usize,
}

impl Card {
    /// Create a card from already-normalized words.
    ///
    /// Rejects an empty word set: such a card would be won before any draw.
    pub fn new(id: CardId, words: BTreeSet<String>) -> Result<Self, CardError> {
        if words.is_empty() {
            return Err(CardError::Empty);
        }
        Ok(Self {
            id,
            words,
            player: None,
            matched: FxHashSet::default(),
            matched_count: 0,
        })
    }

    /// Attach the owning player's id.
    #[must_use]
    pub fn with_player(mut self, player: impl Into<String>) -> Self {
        self.player = Some(player.into());
        self
    }

    /// Mark a word. Returns `true` if the card changed.
    ///
    /// Words not on the card, or already marked, are ignored.
    pub fn mark(&mut self, word: &str) -> bool {
        if !self.words.contains(word) || !self.matched.insert(word.to_string()) {
            return false;
        }
        self.matched_count += 1;
        true
    }

    /// Check whether every word on the card has been matched.
    #[must_use]
    pub fn is_winner(&self) -> bool {
        self.matched_count == self.words.len()
    }

    /// Clear all match progress.
    pub fn reset(&mut self) {
        self.matched.clear();
        self.matched_count = 0;
    }

    #[must_use]
    pub fn id(&self) -> &CardId {
        &self.id
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.id.language()
    }

    /// Target words in sorted order.
    #[must_use]
    pub fn words(&self) -> &BTreeSet<String> {
        &self.words
    }

    #[must_use]
    pub fn player(&self) -> Option<&str> {
        self.player.as_deref()
    }

    /// Check whether a word has been matched.
    #[must_use]
    pub fn is_marked(&self, word: &str) -> bool {
        self.matched.contains(word)
    }

    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.matched_count
    }

    /// Words still needed to win.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.words.len() - self.matched_count
    }

    /// Number of target words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`: empty cards cannot be built.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Serialized form of a card, checked before it becomes a `Card`.
#[derive(Deserialize)]
struct CardRecord {
    id: CardId,
    words: BTreeSet<String>,
    #[serde(default)]
    player: Option<String>,
    #[serde(default)]
    matched: BTreeSet<String>,
    #[serde(default)]
    matched_count: Option<usize>,
}

impl TryFrom<CardRecord> for Card {
    type Error = CardError;

    fn try_from(record: CardRecord) -> Result<Self, Self::Error> {
        let mut card = Card::new(record.id, record.words)?;
        card.player = record.player;

        for word in &record.matched {
            if !card.mark(word) {
                return Err(CardError::InconsistentProgress(card.id));
            }
        }
        if record.matched_count.is_some_and(|count| count != card.matched_count) {
            return Err(CardError::InconsistentProgress(card.id));
        }

        Ok(card)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] Player: {} - {} - {}/{} words",
            self.id,
            self.player().unwrap_or(NO_PLAYER),
            self.language(),
            self.matched_count,
            self.words.len()
        )
    }
}
