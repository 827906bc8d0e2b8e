//! End-to-end game flow tests.
//!
//! These tests drive the manager the way a front-end would:
//! - register or bulk-load cards
//! - start a game and walk the rounds
//! - draw, announce and collect winners

use word_bingo::core::{BingoConfig, CardError, Language, LineError};
use word_bingo::game::{BingoManager, DrawOutcome, LoadIssue, RoundAdvance};
use word_bingo::words::WordRepository;

const SPANISH: &str = "# palabras de prueba\ncasa\nperro\ngato\nsol\nluna\nagua\nfuego\ntierra\n";
const ENGLISH: &str = "house\ndog\ncat\nsun\nmoon\n";
const DUTCH: &str = "huis\nhond\nkat\n";

fn repository(seed: u64) -> WordRepository {
    let mut repo = WordRepository::new(BingoConfig::default().with_seed(seed));
    repo.load_str(Language::Spanish, SPANISH);
    repo.load_str(Language::English, ENGLISH);
    repo.load_str(Language::Dutch, DUTCH);
    repo
}

fn advance_to(manager: &mut BingoManager, language: Language) {
    while manager.current_language() != Some(language) {
        assert!(manager.advance_round().has_more(), "{language} round never came up");
    }
}

/// Register one Spanish card, announce both words, see it win.
#[test]
fn test_single_card_wins_in_spanish_round() {
    let mut manager = BingoManager::new(repository(1));
    let id = manager.register_card("SP000001", &["casa", "perro"], None).unwrap();

    manager.start_game();
    advance_to(&mut manager, Language::Spanish);

    assert!(manager.announce("casa").is_empty());
    assert_eq!(manager.announce("perro"), vec![id.clone()]);
    assert!(manager.card(&id).unwrap().is_winner());
}

/// Bulk-load a mixed source and check per-line accounting.
#[test]
fn test_bulk_load_mixed_source() {
    let mut manager = BingoManager::new(repository(2));
    let source = "\
SP000001 J1 casa perro
EN000001 dog cat

SP000002
SP000003 J2
XX000001 casa
SP000001 gato
SP000004 cassa perro
DT000001 P7 huis hond kat
";

    let report = manager.load_from_source(source.lines());

    assert_eq!(report.loaded, 3);
    assert_eq!(report.failed, 5);

    let lines: Vec<usize> = report
        .issues
        .iter()
        .map(|issue| match issue {
            LoadIssue::Line { number, .. } => *number,
            LoadIssue::Source(e) => panic!("unexpected source failure: {e}"),
        })
        .collect();
    assert_eq!(lines, vec![4, 5, 6, 7, 8]);

    assert!(matches!(report.issues[0], LoadIssue::Line { error: LineError::MissingWords, .. }));
    assert!(matches!(report.issues[1], LoadIssue::Line { error: LineError::NoWords, .. }));
    assert!(matches!(
        report.issues[2],
        LoadIssue::Line { error: LineError::Rejected(CardError::UnknownLanguage { .. }), .. }
    ));
    assert!(matches!(
        report.issues[3],
        LoadIssue::Line { error: LineError::Rejected(CardError::Duplicate(_)), .. }
    ));

    let message = report.issues[4].to_string();
    assert!(message.starts_with("line 8: words not found in Spanish:"), "{message}");
    assert!(message.contains("'cassa' -> did you mean 'casa'?"), "{message}");

    // Player ids picked up from the second token
    let states = manager.card_states(None);
    let players: Vec<Option<&str>> = states.iter().map(|s| s.player.as_deref()).collect();
    assert_eq!(players, vec![Some("J1"), None, Some("P7")]);
}

/// A missing source is one terminal issue, not per-line failures.
#[test]
fn test_missing_card_source() {
    let mut manager = BingoManager::new(repository(3));
    let dir = tempfile::tempdir().unwrap();
    let report = manager.load_cards_from_path(&dir.path().join("nope.txt"));

    assert_eq!(report.loaded, 0);
    assert_eq!(report.failed, 0);
    assert_eq!(report.issues.len(), 1);
    assert!(matches!(report.issues[0], LoadIssue::Source(_)));
    assert!(report.issues[0].to_string().contains("card source not found"));
}

/// Cards loaded from a file on disk.
#[test]
fn test_load_cards_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cards.txt");
    std::fs::write(&path, "SP000001 J1 casa perro\nEN000001 house\n").unwrap();

    let mut manager = BingoManager::new(repository(4));
    let report = manager.load_cards_from_path(&path);

    assert_eq!(report.loaded, 2);
    assert!(report.issues.is_empty());
    assert_eq!(manager.card_count(), 2);
}

/// Play every round with `draw_next` until each ends.
#[test]
fn test_full_game_with_draws() {
    let mut manager = BingoManager::new(repository(5));
    let sp = manager.register_card("SP000001", &["casa", "sol"], Some("J1")).unwrap();
    let en = manager.register_card("EN000001", &["dog", "cat", "sun", "moon", "house"], None).unwrap();
    let dt = manager.register_card("DT000001", &["huis"], None).unwrap();

    let order = manager.start_game();
    let mut rounds_played = Vec::new();

    while let Some(language) = manager.current_language() {
        rounds_played.push(language);
        let mut draws = 0;
        loop {
            match manager.draw_next() {
                DrawOutcome::Announced { .. } => draws += 1,
                DrawOutcome::RoundWon | DrawOutcome::LimitReached | DrawOutcome::Exhausted => break,
                DrawOutcome::NoActiveRound => panic!("round vanished"),
            }
        }
        assert!(draws <= manager.repository().total(language));
        assert_eq!(manager.announced(language).len(), draws);
        manager.advance_round();
    }

    assert_eq!(rounds_played, order);

    // Every card's words are all drawable before the limit, so each wins
    assert_eq!(manager.winners(Language::Spanish), [sp]);
    assert_eq!(manager.winners(Language::English), [en]);
    assert_eq!(manager.winners(Language::Dutch), [dt]);
    assert!(manager.winners(Language::Portuguese).is_empty());

    // The Portuguese repository is empty
    assert!(manager.announced(Language::Portuguese).is_empty());

    assert_eq!(manager.draw_next(), DrawOutcome::NoActiveRound);
    assert_eq!(manager.advance_round(), RoundAdvance::Finished);
}

/// Winners from a round stay winners while later rounds play.
#[test]
fn test_wins_persist_across_rounds() {
    let mut manager = BingoManager::new(repository(6));
    let id = manager.register_card("DT000001", &["kat"], None).unwrap();

    manager.start_game();
    advance_to(&mut manager, Language::Dutch);
    assert_eq!(manager.announce("kat"), vec![id.clone()]);

    while manager.advance_round().has_more() {
        manager.announce("kat");
    }

    assert!(manager.card(&id).unwrap().is_winner());
    assert_eq!(manager.winners(Language::Dutch), [id]);
}

/// A second game starts from scratch.
#[test]
fn test_restart_clears_everything() {
    let mut manager = BingoManager::new(repository(7));
    let id = manager.register_card("EN000001", &["dog"], None).unwrap();

    manager.start_game();
    advance_to(&mut manager, Language::English);
    manager.announce("dog");
    manager.repository_mut().draw(Language::English);

    manager.start_game();
    assert!(!manager.card(&id).unwrap().is_winner());
    assert!(manager.announced(Language::English).is_empty());
    assert_eq!(manager.repository().remaining(Language::English), 5);
    assert_eq!(manager.stats().current_round, Some(1));
}

/// Stats serialize for front-ends.
#[test]
fn test_stats_serialize() {
    let mut manager = BingoManager::new(repository(8));
    manager.register_card("SP000001", &["casa"], None).unwrap();
    manager.start_game();

    let json = serde_json::to_value(manager.stats()).unwrap();
    assert_eq!(json["total_cards"], 1);
    assert_eq!(json["languages"][0]["language"], "Spanish");
    assert_eq!(json["round_order"].as_array().unwrap().len(), 4);
    assert_eq!(json["current_round"], 1);

    let states = serde_json::to_value(manager.card_states(None)).unwrap();
    assert_eq!(states[0]["id"], "SP000001");
    assert_eq!(states[0]["is_winner"], false);
}
