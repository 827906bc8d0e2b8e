//! Read-only views of a game for display.

use serde::Serialize;

use crate::cards::{Card, CardId};
use crate::core::Language;

/// Whole-game summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameStats {
    pub total_cards: usize,
    pub languages: Vec<LanguageStats>,
    pub round_order: Vec<Language>,
    /// 1-based round number, `None` before a game starts or after the last round.
    pub current_round: Option<usize>,
}

/// Per-language summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LanguageStats {
    pub language: Language,
    pub cards: usize,
    pub announced: usize,
    pub winners: usize,
}

/// Progress of a single card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CardState {
    pub id: CardId,
    pub language: Language,
    pub player: Option<String>,
    pub matched: usize,
    pub total: usize,
    pub remaining: usize,
    pub is_winner: bool,
}

impl From<&Card> for CardState {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id().clone(),
            language: card.language(),
            player: card.player().map(str::to_string),
            matched: card.matched_count(),
            total: card.len(),
            remaining: card.remaining(),
            is_winner: card.is_winner(),
        }
    }
}

/// Announcements made in the current round against its limit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DrawProgress {
    pub announced: usize,
    pub limit: usize,
}
