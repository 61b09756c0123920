#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::similar_names
)]
use std::collections::HashMap;

use chainmap::ChainedHashMap;
use criterion::{criterion_group, criterion_main, Criterion};
use proptest::{
    collection::vec,
    prelude::any,
    strategy::{Strategy, ValueTree},
    test_runner::TestRunner,
};

const ITEMS_AMOUNT: usize = 1000;
const SAMPLE_SIZE: usize = 10;

fn chained_map_benches(c: &mut Criterion) {
    let mut runner = TestRunner::default();
    let items = vec(any::<(String, String)>(), ITEMS_AMOUNT)
        .new_tree(&mut runner)
        .unwrap()
        .current();

    let mut group = c.benchmark_group("Chained hash map comparison benchmark");
    group.sample_size(SAMPLE_SIZE);
    let mut chained_map = ChainedHashMap::new();
    let mut rust_map = HashMap::new();
    group.bench_function("chained insert", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                chained_map.insert(key, value);
            }
        });
    });
    group.bench_function("rust std insert", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                rust_map.insert(key, value);
            }
        });
    });
    group.bench_function("chained get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = chained_map.get(key);
            }
        });
    });
    group.bench_function("rust std get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = rust_map.get(key);
            }
        });
    });
    group.finish();
}

criterion_group!(benches, chained_map_benches);

criterion_main!(benches);
