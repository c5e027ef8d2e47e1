use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

use avl_words::{AvlTreeMap, BstMap, SlowKey};

const N: usize = 100_000;
const SLOW_N: usize = 1_000;

pub fn benchmarks(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let values: Vec<u64> = (1..=N).map(|_| rng.gen()).collect();

    c.bench_function("avl_insert", |b| {
        b.iter(|| {
            let mut map = AvlTreeMap::new();
            for value in &values {
                map.insert(*value, 1u32);
            }
            map
        })
    });

    c.bench_function("bst_insert", |b| {
        b.iter(|| {
            let mut map = BstMap::new();
            for value in &values {
                map.insert(*value, 1u32);
            }
            map
        })
    });

    let mut map = AvlTreeMap::new();
    for value in &values {
        map.insert(*value, 1u32);
    }

    c.bench_function("avl_find", |b| {
        b.iter(|| {
            for value in &values {
                black_box(map.find(value));
            }
        })
    });

    c.bench_function("avl_iter", |b| {
        b.iter(|| {
            for (k, v) in &map {
                black_box((k, v));
            }
        })
    });
}

/// Lookup cost when every key comparison is expensive.
pub fn slow_key_benchmarks(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);

    SlowKey::delay_off();
    let mut map = AvlTreeMap::new();
    while map.size() < SLOW_N {
        let n: u64 = rng.gen();
        map.insert(SlowKey::new(n), n);
    }

    let lookups: Vec<SlowKey> = (0..10).map(|_| SlowKey::new(rng.gen())).collect();

    SlowKey::delay_on();
    let mut group = c.benchmark_group("slow_key");
    group.sample_size(10);
    group.bench_function("avl_find", |b| {
        b.iter(|| {
            for lookup in &lookups {
                black_box(map.find(lookup));
            }
        })
    });
    group.finish();
    SlowKey::delay_off();
}

criterion_group!(benches, benchmarks, slow_key_benchmarks);
criterion_main!(benches);
