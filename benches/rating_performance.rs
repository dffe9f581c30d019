//! Performance benchmarks for rating calculations

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use elo_kfactor::rating::{
    expected_score, new_rating_with_defaults, resolve_k_factor, EloRatingCalculator,
    KFactorConditions, KFactorConfig, KFactorRule, RatingCalculator, DEFAULT_K_FACTOR_CONFIG,
};
use elo_kfactor::types::Player;

fn bench_expected_score(c: &mut Criterion) {
    c.bench_function("expected_score", |b| {
        b.iter(|| expected_score(black_box(1500.0), black_box(1620.0), black_box(400.0)))
    });
}

fn bench_k_factor_resolution(c: &mut Criterion) {
    c.bench_function("resolve_k_factor_default", |b| {
        b.iter(|| resolve_k_factor(&DEFAULT_K_FACTOR_CONFIG, black_box(2450.0), black_box(120)))
    });

    // Worst case: no rule matches and every rule is checked
    let rules = (0..9)
        .map(|i| {
            KFactorRule::new(
                10.0 + i as f64,
                KFactorConditions::NONE.min_rating(3000.0 + 100.0 * i as f64),
            )
        })
        .collect();
    let config = KFactorConfig::new(20.0, rules);

    c.bench_function("resolve_k_factor_fallthrough_9_rules", |b| {
        b.iter(|| resolve_k_factor(&config, black_box(1500.0), black_box(40)))
    });
}

fn bench_rating_calculations(c: &mut Criterion) {
    let player = Player::new(1500.0, 31);
    let opponent = Player::new(1600.0, 12);

    c.bench_function("new_rating_default_config", |b| {
        b.iter(|| new_rating_with_defaults(black_box(&player), black_box(&opponent), 1.0))
    });

    let calculator = EloRatingCalculator::default();
    c.bench_function("rating_calculation_both_players", |b| {
        b.iter(|| calculator.calculate_rating_changes(black_box(&player), black_box(&opponent), 0.5))
    });
}

criterion_group!(
    benches,
    bench_expected_score,
    bench_k_factor_resolution,
    bench_rating_calculations
);
criterion_main!(benches);
