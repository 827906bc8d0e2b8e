//! Game manager: card registration, rounds, announcements and winners.
//!
//! The `BingoManager` owns every registered card, partitioned by language,
//! plus one inverted index per language. A game plays one round per
//! language in a shuffled order. During a round, each announced word is
//! looked up in that language's index and every card containing it is
//! marked; cards completing their set become winners.
//!
//! ## Usage
//!
//! ```
//! use word_bingo::core::{BingoConfig, Language};
//! use word_bingo::game::BingoManager;
//! use word_bingo::words::WordRepository;
//!
//! let mut repo = WordRepository::new(BingoConfig::default().with_seed(7));
//! repo.load_str(Language::Spanish, "casa\nperro\ngato\n");
//!
//! let mut manager = BingoManager::new(repo);
//! manager.register_card("SP000001", &["casa", "perro"], None).unwrap();
//! manager.start_game();
//!
//! while manager.current_language() != Some(Language::Spanish) {
//!     manager.advance_round();
//! }
//! assert!(manager.announce("casa").is_empty());
//! assert_eq!(manager.announce("perro")[0].as_str(), "SP000001");
//! ```

use rustc_hash::FxHashMap;
use std::collections::BTreeSet;
use std::path::Path;

use super::index::WordIndex;
use super::loader::{parse_line, LoadReport};
use super::stats::{CardState, DrawProgress, GameStats, LanguageStats};
use crate::cards::{Card, CardId};
use crate::core::{BingoConfig, CardError, GameRng, Language, LanguageMap, LoadError, UnknownWords};
use crate::words::{normalize, WordRepository};

/// Mixed into the configured seed so round shuffles and word draws use
/// different streams.
const SHUFFLE_STREAM: u64 = 0x9E37_79B9_7F4A_7C15;

/// Result of moving to the next round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundAdvance {
    /// A new round started for this language.
    Next(Language),
    /// Every round has been played.
    Finished,
}

impl RoundAdvance {
    /// Check whether another round is active.
    #[must_use]
    pub fn has_more(self) -> bool {
        matches!(self, RoundAdvance::Next(_))
    }
}

impl std::fmt::Display for RoundAdvance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundAdvance::Next(language) => write!(f, "Round: {language}"),
            RoundAdvance::Finished => f.write_str("All rounds have finished"),
        }
    }
}

/// Result of `BingoManager::draw_next`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    /// No game started, or every round has been played.
    NoActiveRound,
    /// The current round already has a winner.
    RoundWon,
    /// The current round hit its draw limit.
    LimitReached,
    /// Every word of the current language has been drawn.
    Exhausted,
    /// A word was drawn and announced.
    Announced { word: String, winners: Vec<CardId> },
}

/// Everything the manager tracks for one language.
#[derive(Clone, Debug, Default)]
struct LanguageTable {
    cards: FxHashMap<CardId, Card>,
    /// Registration order, for stable listings.
    order: Vec<CardId>,
    index: WordIndex,
    announced: Vec<String>,
    winners: Vec<CardId>,
}

/// Owns the cards and drives rounds for a single game at a time.
#[derive(Clone, Debug)]
pub struct BingoManager {
    repository: WordRepository,
    tables: LanguageMap<LanguageTable>,
    round_order: Vec<Language>,
    current_round: usize,
    rng: GameRng,
}

impl BingoManager {
    /// Create a manager over a loaded repository.
    ///
    /// No round is active until `start_game` is called.
    #[must_use]
    pub fn new(repository: WordRepository) -> Self {
        let rng = GameRng::from_seed(repository.config().seed.map(|s| s ^ SHUFFLE_STREAM));
        Self {
            repository,
            tables: LanguageMap::default(),
            round_order: Vec::new(),
            current_round: 0,
            rng,
        }
    }

    /// Replace the random source used for round order.
    #[must_use]
    pub fn with_rng(mut self, rng: GameRng) -> Self {
        self.rng = rng;
        self
    }

    fn config(&self) -> &BingoConfig {
        self.repository.config()
    }

    // === Registration ===

    /// Validate a card id and return its language.
    pub fn validate_card_id(&self, id: &str) -> Result<Language, CardError> {
        CardId::parse(id).map(|id| id.language())
    }

    /// Register a card.
    ///
    /// Checks run in order: id shape, duplicate id, word count against the
    /// language maximum, every word present in the repository, at least one
    /// word. Nothing is stored unless all of them pass.
    pub fn register_card<S: AsRef<str>>(
        &mut self,
        id: &str,
        words: &[S],
        player: Option<&str>,
    ) -> Result<CardId, CardError> {
        let id = CardId::parse(id)?;
        let language = id.language();

        if self.tables[language].cards.contains_key(&id) {
            return Err(CardError::Duplicate(id));
        }

        let max = language.max_words();
        if words.len() > max {
            return Err(CardError::TooManyWords {
                language,
                count: words.len(),
                max,
            });
        }

        let targets: BTreeSet<String> = words
            .iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();

        self.check_words(language, &targets)?;

        let mut card = Card::new(id.clone(), targets)?;
        if let Some(player) = player {
            card = card.with_player(player);
        }

        let table = &mut self.tables[language];
        table.index.insert(&id, card.words());
        table.order.push(id.clone());
        table.cards.insert(id.clone(), card);

        log::info!("Registered card {}", id);
        Ok(id)
    }

    /// Fail with suggestions if any word is missing from the repository.
    fn check_words(&self, language: Language, words: &BTreeSet<String>) -> Result<(), CardError> {
        let invalid: Vec<&String> = words
            .iter()
            .filter(|w| !self.repository.word_exists(language, w))
            .collect();

        if invalid.is_empty() {
            return Ok(());
        }

        let shown = self.config().max_reported_invalid;
        let entries = invalid
            .iter()
            .take(shown)
            .map(|w| {
                let suggestion = self.repository.suggest(language, w).map(|s| s.word);
                ((*w).clone(), suggestion)
            })
            .collect();

        Err(CardError::UnknownWords(UnknownWords {
            language,
            entries,
            omitted: invalid.len().saturating_sub(shown),
        }))
    }

    /// Register one card per line. Each line is independent.
    pub fn load_from_source<'a>(&mut self, lines: impl IntoIterator<Item = &'a str>) -> LoadReport {
        let mut report = LoadReport::default();

        for (i, line) in lines.into_iter().enumerate() {
            let number = i + 1;
            let parsed = match parse_line(line) {
                Ok(Some(parsed)) => parsed,
                Ok(None) => continue,
                Err(e) => {
                    report.reject(number, e);
                    continue;
                }
            };

            match self.register_card(parsed.id, &parsed.words, parsed.player) {
                Ok(_) => report.loaded += 1,
                Err(e) => report.reject(number, e.into()),
            }
        }

        log::info!("Loaded {} cards ({} rejected)", report.loaded, report.failed);
        report
    }

    /// Register cards from a file. An unreadable file yields a single issue.
    pub fn load_cards_from_path(&mut self, path: &Path) -> LoadReport {
        match std::fs::read_to_string(path) {
            Ok(text) => self.load_from_source(text.lines()),
            Err(e) => {
                let err = LoadError::from_io(path, e);
                log::error!("{}", err);
                LoadReport::unreadable(err)
            }
        }
    }

    // === Rounds ===

    /// Start a new game.
    ///
    /// Shuffles the round order, rewinds to the first round, clears every
    /// card's progress, every announcement and winner list, and the
    /// repository's draw history.
    pub fn start_game(&mut self) -> Vec<Language> {
        let mut order = Language::ALL.to_vec();
        self.rng.shuffle(&mut order);
        self.round_order = order;
        self.current_round = 0;

        for (_, table) in self.tables.iter_mut() {
            for card in table.cards.values_mut() {
                card.reset();
            }
            table.announced.clear();
            table.winners.clear();
        }
        self.repository.reset_all_rounds();

        log::info!(
            "Game started (seed {}), round order: {}",
            self.rng.seed(),
            self.round_order.iter().map(|l| l.code()).collect::<Vec<_>>().join(" -> ")
        );
        self.round_order.clone()
    }

    /// Language of the active round.
    #[must_use]
    pub fn current_language(&self) -> Option<Language> {
        self.round_order.get(self.current_round).copied()
    }

    /// Move to the next round. Card wins from earlier rounds are kept.
    pub fn advance_round(&mut self) -> RoundAdvance {
        if self.current_round < self.round_order.len() {
            self.current_round += 1;
        }
        let advance = match self.current_language() {
            Some(language) => RoundAdvance::Next(language),
            None => RoundAdvance::Finished,
        };
        log::info!("{}", advance);
        advance
    }

    // === Announcements ===

    /// Announce a word for the active round.
    ///
    /// The word is always recorded in the round's history. Every card
    /// containing it that has not already won is marked; the ids of cards
    /// that win because of this word are returned in registration order.
    /// Returns nothing when no round is active.
    pub fn announce(&mut self, word: &str) -> Vec<CardId> {
        let Some(language) = self.current_language() else {
            return Vec::new();
        };
        let word = normalize(word);

        let LanguageTable {
            cards,
            index,
            announced,
            winners,
            ..
        } = &mut self.tables[language];
        announced.push(word.clone());

        let mut new_winners = Vec::new();
        for id in index.cards_for(&word) {
            let Some(card) = cards.get_mut(id) else {
                continue;
            };
            if card.is_winner() {
                continue;
            }
            if card.mark(&word) && card.is_winner() {
                log::info!("Card {} wins the {} round", id, language);
                winners.push(id.clone());
                new_winners.push(id.clone());
            }
        }

        log::debug!("Announced '{}' in {}: {} new winners", word, language, new_winners.len());
        new_winners
    }

    /// Draw the next word for the active round and announce it.
    ///
    /// Stops without drawing when the round already has a winner or has
    /// reached its draw limit.
    pub fn draw_next(&mut self) -> DrawOutcome {
        let Some(language) = self.current_language() else {
            return DrawOutcome::NoActiveRound;
        };
        if !self.tables[language].winners.is_empty() {
            return DrawOutcome::RoundWon;
        }
        if self.limit_reached() {
            return DrawOutcome::LimitReached;
        }
        let Some(word) = self.repository.draw(language) else {
            return DrawOutcome::Exhausted;
        };

        let winners = self.announce(&word);
        DrawOutcome::Announced { word, winners }
    }

    /// Maximum announcements for a language's round.
    ///
    /// `max(max_words * 3, floor(repository_size * 0.8))` with the default
    /// configuration. Computed from the live repository size on every call.
    #[must_use]
    pub fn draw_limit(&self, language: Language) -> usize {
        let config = self.config();
        let floor = language.max_words().saturating_mul(config.draw_limit_multiplier);
        let share = self.repository.total(language).saturating_mul(config.draw_limit_percent) / 100;
        floor.max(share)
    }

    /// Check whether the active round has used up its draws.
    #[must_use]
    pub fn limit_reached(&self) -> bool {
        self.draw_progress()
            .is_some_and(|p| p.announced >= p.limit)
    }

    /// Announcements so far and the limit, for the active round.
    #[must_use]
    pub fn draw_progress(&self) -> Option<DrawProgress> {
        let language = self.current_language()?;
        Some(DrawProgress {
            announced: self.tables[language].announced.len(),
            limit: self.draw_limit(language),
        })
    }

    // === Queries ===

    /// Look up a registered card.
    #[must_use]
    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.tables[id.language()].cards.get(id)
    }

    /// Cards of a language in registration order.
    pub fn cards(&self, language: Language) -> impl Iterator<Item = &Card> {
        let table = &self.tables[language];
        table.order.iter().filter_map(move |id| table.cards.get(id))
    }

    /// Total registered cards across languages.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.tables.values().map(|t| t.cards.len()).sum()
    }

    /// Winners of a language's round, in the order they won.
    #[must_use]
    pub fn winners(&self, language: Language) -> &[CardId] {
        &self.tables[language].winners
    }

    /// Words announced in a language's round, in order.
    #[must_use]
    pub fn announced(&self, language: Language) -> &[String] {
        &self.tables[language].announced
    }

    /// Round order of the current game. Empty before `start_game`.
    #[must_use]
    pub fn round_order(&self) -> &[Language] {
        &self.round_order
    }

    #[must_use]
    pub fn repository(&self) -> &WordRepository {
        &self.repository
    }

    /// Mutable access for callers that draw words themselves.
    pub fn repository_mut(&mut self) -> &mut WordRepository {
        &mut self.repository
    }

    /// Game summary.
    #[must_use]
    pub fn stats(&self) -> GameStats {
        let languages = self
            .tables
            .iter()
            .map(|(language, table)| LanguageStats {
                language,
                cards: table.cards.len(),
                announced: table.announced.len(),
                winners: table.winners.len(),
            })
            .collect();

        GameStats {
            total_cards: self.card_count(),
            languages,
            round_order: self.round_order.clone(),
            current_round: self.current_language().map(|_| self.current_round + 1),
        }
    }

    /// Progress of every card, or of one language's cards.
    #[must_use]
    pub fn card_states(&self, language: Option<Language>) -> Vec<CardState> {
        let languages: Vec<Language> = match language {
            Some(language) => vec![language],
            None => Language::ALL.to_vec(),
        };
        languages
            .into_iter()
            .flat_map(|language| self.cards(language).map(CardState::from))
            .collect()
    }
}
