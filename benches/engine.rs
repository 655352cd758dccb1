//! Engine benchmarks: dealing and solving a board.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use memory_match::core::GameConfig;
use memory_match::rules::GameEngine;

fn bench_reset(c: &mut Criterion) {
    let mut engine = GameEngine::new(GameConfig::default().with_seed(1)).unwrap();
    c.bench_function("reset_16_cards", |b| {
        b.iter(|| {
            engine.reset();
            black_box(engine.state().deck().len())
        })
    });
}

fn bench_solve(c: &mut Criterion) {
    let faces: Vec<String> = (0..32).map(|i| format!("face-{i}")).collect();
    let mut engine = GameEngine::new(GameConfig::new().with_faces(faces).with_seed(2)).unwrap();

    c.bench_function("solve_64_cards", |b| {
        b.iter(|| {
            engine.reset();
            let deck = engine.state().deck().clone();
            for card in deck.iter() {
                if let Some(partner) = deck.partner_of(card.index()) {
                    let _ = engine.select_card(card.index());
                    let _ = engine.select_card(partner);
                }
            }
            black_box(engine.state().is_won())
        })
    });
}

criterion_group!(benches, bench_reset, bench_solve);
criterion_main!(benches);
