// Criterion benchmarks for the MentorMatch scoring core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mentor_match::core::calculate_match_score;
use mentor_match::models::{ScoringWeights, FIELD_OPTIONS, OPPORTUNITY_OPTIONS};

fn tag_set(len: usize, offset: usize) -> Vec<String> {
    (0..len)
        .map(|i| FIELD_OPTIONS[(i + offset) % FIELD_OPTIONS.len()].to_string())
        .collect()
}

fn opportunity_set(len: usize) -> Vec<String> {
    (0..len)
        .map(|i| OPPORTUNITY_OPTIONS[i % OPPORTUNITY_OPTIONS.len()].to_string())
        .collect()
}

fn bench_score(c: &mut Criterion) {
    let weights = ScoringWeights::default();
    let interests = tag_set(5, 0);
    let expertise = tag_set(5, 2);
    let opportunity_types = opportunity_set(2);
    let opportunities = opportunity_set(3);

    c.bench_function("calculate_match_score", |b| {
        b.iter(|| {
            calculate_match_score(
                black_box(&interests),
                black_box(&expertise),
                black_box(&opportunity_types),
                black_box(&opportunities),
                black_box(&weights),
            )
        });
    });
}

fn bench_registration_batch(c: &mut Criterion) {
    let weights = ScoringWeights::default();
    let interests = tag_set(4, 0);
    let opportunity_types = opportunity_set(2);

    let mut group = c.benchmark_group("registration_batch");

    for counterpart_count in [10, 100, 1000].iter() {
        let counterparts: Vec<(Vec<String>, Vec<String>)> = (0..*counterpart_count)
            .map(|i| (tag_set(3 + i % 5, i), opportunity_set(1 + i % 3)))
            .collect();

        group.bench_with_input(
            BenchmarkId::new("score_all", counterpart_count),
            counterpart_count,
            |b, _| {
                b.iter(|| {
                    counterparts
                        .iter()
                        .map(|(expertise, opportunities)| {
                            calculate_match_score(
                                black_box(&interests),
                                expertise,
                                black_box(&opportunity_types),
                                opportunities,
                                &weights,
                            )
                        })
                        .filter(|score| *score > 0)
                        .count()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_score, bench_registration_batch);
criterion_main!(benches);
