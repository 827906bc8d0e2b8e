//! Headless bingo runner.
//!
//! Plays a full game without a front-end:
//!
//! ```text
//! bingo <word-list-dir> <cards-file> [seed]
//! ```
//!
//! Set `RUST_LOG=debug` to see every draw.

use std::path::PathBuf;
use std::process::ExitCode;

use word_bingo::{BingoConfig, BingoManager, DrawOutcome, Language, WordRepository};

fn usage(args: &[String]) -> String {
    let program = args.first().map_or("bingo", String::as_str);
    format!("usage: {program} <word-list-dir> <cards-file> [seed]")
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("{}", usage(&args));
        return ExitCode::from(2);
    }

    let mut config = BingoConfig::default().with_word_list_dir(&args[1]);
    if let Some(raw) = args.get(3) {
        match raw.parse() {
            Ok(seed) => config = config.with_seed(seed),
            Err(e) => {
                eprintln!("invalid seed '{}': {}", raw, e);
                return ExitCode::from(2);
            }
        }
    }

    let (repository, warnings) = WordRepository::open(config);
    if warnings.len() == Language::COUNT {
        eprintln!("no word lists found in {}", args[1]);
        return ExitCode::FAILURE;
    }

    let mut manager = BingoManager::new(repository);
    let report = manager.load_cards_from_path(&PathBuf::from(&args[2]));
    println!("Cards loaded: {}, rejected: {}", report.loaded, report.failed);
    for issue in &report.issues {
        println!("  {issue}");
    }
    if manager.card_count() == 0 {
        eprintln!("no cards to play with");
        return ExitCode::FAILURE;
    }

    let order = manager.start_game();
    println!(
        "Round order: {}",
        order.iter().map(|l| l.name()).collect::<Vec<_>>().join(" -> ")
    );

    while let Some(language) = manager.current_language() {
        println!("\n--- {} ---", language);
        loop {
            match manager.draw_next() {
                DrawOutcome::Announced { word, winners } => {
                    println!("  * {word}");
                    for id in winners {
                        if let Some(card) = manager.card(&id) {
                            println!("  WINNER {card}");
                        }
                    }
                }
                DrawOutcome::RoundWon => break,
                DrawOutcome::LimitReached => {
                    if let Some(progress) = manager.draw_progress() {
                        println!("  No winner after {} draws", progress.limit);
                    }
                    break;
                }
                DrawOutcome::Exhausted => {
                    println!("  No words left for {language}");
                    break;
                }
                DrawOutcome::NoActiveRound => break,
            }
        }
        println!("{}", manager.advance_round());
    }

    let stats = manager.stats();
    for lang in &stats.languages {
        println!(
            "{}: {} cards, {} words announced, {} winners",
            lang.language, lang.cards, lang.announced, lang.winners
        );
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_without_program_name() {
        assert_eq!(usage(&[]), "usage: bingo <word-list-dir> <cards-file> [seed]");
        assert_eq!(
            usage(&["./target/bingo".to_string()]),
            "usage: ./target/bingo <word-list-dir> <cards-file> [seed]"
        );
    }
}
