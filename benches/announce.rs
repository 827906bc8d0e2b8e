use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use word_bingo::{BingoConfig, BingoManager, Language, WordRepository, words::edit_distance};

const VOCABULARY: usize = 500;

fn word(i: usize) -> String {
    format!("palabra{i:04}")
}

/// Manager with `n_cards` Spanish cards of 12 words each, already in the Spanish round.
fn setup_manager(n_cards: usize) -> BingoManager {
    let mut repo = WordRepository::new(BingoConfig::default().with_seed(42));
    let list: String = (0..VOCABULARY).map(|i| word(i) + "\n").collect();
    repo.load_str(Language::Spanish, &list);

    let mut manager = BingoManager::new(repo);
    for card in 0..n_cards {
        let words: Vec<String> = (0..12).map(|k| word((card * 7 + k * 31) % VOCABULARY)).collect();
        manager
            .register_card(&format!("SP{card:06}"), &words, None)
            .unwrap();
    }

    manager.start_game();
    while manager.current_language() != Some(Language::Spanish) {
        manager.advance_round();
    }
    manager
}

/// Announce every word of the vocabulary against growing card counts
fn bench_announce_round(c: &mut Criterion) {
    let mut group = c.benchmark_group("announce_round");
    let words: Vec<String> = (0..VOCABULARY).map(word).collect();

    for n_cards in [10, 100, 1000] {
        let manager = setup_manager(n_cards);
        group.bench_with_input(BenchmarkId::from_parameter(n_cards), &n_cards, |b, _| {
            b.iter_batched(
                || manager.clone(),
                |mut m| {
                    for w in &words {
                        black_box(m.announce(w));
                    }
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

/// A single announcement of a word no card holds
fn bench_announce_miss(c: &mut Criterion) {
    let mut manager = setup_manager(1000);

    c.bench_function("announce_miss_1000_cards", |b| {
        b.iter(|| black_box(manager.announce("inexistente")));
    });
}

/// Draw words until the round ends
fn bench_draw_round(c: &mut Criterion) {
    let manager = setup_manager(100);

    c.bench_function("draw_round_100_cards", |b| {
        b.iter_batched(
            || manager.clone(),
            |mut m| while let word_bingo::DrawOutcome::Announced { .. } = m.draw_next() {},
            BatchSize::LargeInput,
        );
    });
}

/// Suggestion lookup over the whole vocabulary
fn bench_suggest(c: &mut Criterion) {
    let manager = setup_manager(0);
    let repo = manager.repository();

    c.bench_function("suggest_miss", |b| {
        b.iter(|| black_box(repo.suggest(Language::Spanish, "palabrx0250")));
    });

    c.bench_function("edit_distance_10_chars", |b| {
        b.iter(|| black_box(edit_distance(black_box("palabra0001"), black_box("palabro1000"))));
    });
}

criterion_group!(announcement, bench_announce_round, bench_announce_miss);

criterion_group!(drawing, bench_draw_round, bench_suggest);

criterion_main!(announcement, drawing);
