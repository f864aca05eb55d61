//! Criterion benchmarks for u-drsa.
//!
//! Uses random decision tables (gain/cost integer criteria, ordinal classes)
//! to measure cone construction, union approximation and rule measure
//! evaluation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_drsa::decision::Decision;
use u_drsa::dominance::{ApproximationConfig, Approximations, ConeConfig, DecisionTable, DominanceCones, Union};
use u_drsa::field::{AttributePreferenceType, EvaluationField};
use u_drsa::rules::{ComputableRuleCharacteristics, RuleCoverageInformation};

// ===========================================================================
// Random tables
// ===========================================================================

const CLASSES: i64 = 4;

fn class(v: i64) -> Decision {
    Decision::simple(EvaluationField::integer(v, AttributePreferenceType::Gain), 0)
}

fn random_table(objects: usize, attributes: usize, seed: u64) -> DecisionTable {
    let mut rng = StdRng::seed_from_u64(seed);
    let rows = (0..objects)
        .map(|_| {
            (0..attributes)
                .map(|a| {
                    let preference = if a % 2 == 0 {
                        AttributePreferenceType::Gain
                    } else {
                        AttributePreferenceType::Cost
                    };
                    EvaluationField::integer(rng.random_range(0..10), preference)
                })
                .collect()
        })
        .collect();
    let decisions = (0..objects).map(|_| class(rng.random_range(1..=CLASSES))).collect();
    // rows and decisions have matching shapes by construction
    DecisionTable::new(rows, decisions).unwrap()
}

fn random_coverage(objects: usize, seed: u64) -> RuleCoverageInformation {
    let mut rng = StdRng::seed_from_u64(seed);
    let covered = (0..objects).filter(|_| rng.random_bool(0.3)).collect();
    let positive: Vec<usize> = (0..objects).filter(|_| rng.random_bool(0.5)).collect();
    let neutral = (0..objects)
        .filter(|i| positive.binary_search(i).is_err() && rng.random_bool(0.1))
        .collect();
    RuleCoverageInformation::new(objects, covered)
        .and_then(|c| c.with_positive_objects(positive))
        .and_then(|c| c.with_neutral_objects(neutral))
        .unwrap()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_cones(c: &mut Criterion) {
    let mut group = c.benchmark_group("dominance_cones");
    group.sample_size(10);

    for &(objects, attributes) in &[(100usize, 5usize), (500, 5), (1000, 10)] {
        let table = random_table(objects, attributes, 42);
        for parallel in [false, true] {
            let config = ConeConfig::default().with_parallel(parallel);
            group.bench_with_input(
                BenchmarkId::new(if parallel { "parallel" } else { "sequential" }, objects),
                &(&table, config),
                |b, (t, c)| {
                    b.iter(|| {
                        let cones = DominanceCones::calculate(black_box(t), black_box(c));
                        black_box(cones)
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_approximations(c: &mut Criterion) {
    let mut group = c.benchmark_group("union_approximations");
    group.sample_size(10);

    for &objects in &[100usize, 500, 1000] {
        let table = random_table(objects, 5, 7);
        let cones = DominanceCones::calculate(&table, &ConeConfig::default());
        let union = Union::at_least(class(CLASSES / 2));
        let config = ApproximationConfig::default().with_consistency_threshold(0.05);
        group.bench_with_input(BenchmarkId::from_parameter(objects), &objects, |b, _| {
            b.iter(|| {
                let result = Approximations::calculate(
                    black_box(&table),
                    black_box(&cones),
                    black_box(&union),
                    black_box(&config),
                );
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_rule_measures(c: &mut Criterion) {
    let mut group = c.benchmark_group("rule_measures");
    group.sample_size(10);

    for &objects in &[1000usize, 10_000, 100_000] {
        let coverage = random_coverage(objects, 11);
        group.bench_with_input(BenchmarkId::from_parameter(objects), &coverage, |b, cov| {
            b.iter(|| {
                let characteristics = ComputableRuleCharacteristics::new(cov.clone());
                characteristics.calculate_all_characteristics();
                black_box(characteristics.to_rule_characteristics())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_cones, bench_approximations, bench_rule_measures);
criterion_main!(benches);
