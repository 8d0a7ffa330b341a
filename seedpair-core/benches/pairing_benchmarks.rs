use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seedpair_core::{filter_pairs, find_matches, split};
use std::collections::BTreeMap;

fn generate_test_sequence(length: usize, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..length)
        .map(|_| ['A', 'C', 'G', 'T'][rng.gen_range(0..4)])
        .collect()
}

fn bench_split(c: &mut Criterion) {
    let seq = generate_test_sequence(100_000, 1);

    c.bench_function("split_100kb", |b| {
        b.iter(|| black_box(split(black_box(&seq), 15)))
    });
}

fn bench_find_matches(c: &mut Criterion) {
    let mut databases = BTreeMap::new();
    databases.insert("db".to_string(), generate_test_sequence(50_000, 2));
    let mut queries = BTreeMap::new();
    queries.insert("q".to_string(), generate_test_sequence(50_000, 3));

    c.bench_function("find_matches_50kb", |b| {
        b.iter(|| black_box(find_matches(black_box(&databases), black_box(&queries), 12)))
    });
}

fn bench_pairing(c: &mut Criterion) {
    let mut databases = BTreeMap::new();
    databases.insert("db".to_string(), generate_test_sequence(50_000, 4));
    let mut queries = BTreeMap::new();
    queries.insert("q".to_string(), generate_test_sequence(50_000, 5));

    let matches = find_matches(&databases, &queries, 10).expect("matching failed");

    c.bench_function("filter_pairs_50kb", |b| {
        b.iter(|| black_box(filter_pairs(black_box(&matches), 1000)))
    });
}

criterion_group!(benches, bench_split, bench_find_matches, bench_pairing);
criterion_main!(benches);
