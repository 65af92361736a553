//! # Username Registry Benchmarks
//!
//! | Group | Measures |
//! |-------|----------|
//! | bloom-filter | raw `add` / `contains` per key |
//! | lookup-strategy | two-level check vs linear scan, by population |
//! | registration | validate + persist + commit against the in-memory store |

use std::time::Duration;

use bloom_filter::{BloomFilter, FilterConfig};
use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use registry_tests::fixtures::{novel_names, seeded_registry};
use username_registry::UsernameApi;

fn bench_bloom_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("bloom-filter");
    let keys: Vec<String> = (0..1_000).map(|i| format!("user{}", i)).collect();
    group.throughput(Throughput::Elements(keys.len() as u64));

    group.bench_function("add_1000", |b| {
        b.iter(|| {
            let mut filter = BloomFilter::from_config(&FilterConfig::default());
            for key in &keys {
                filter.add(black_box(key));
            }
            filter
        })
    });

    let mut filter = BloomFilter::from_config(&FilterConfig::default());
    for key in &keys {
        filter.add(key);
    }
    group.bench_function("contains_1000", |b| {
        b.iter(|| keys.iter().filter(|key| filter.contains(black_box(key))).count())
    });

    group.finish();
}

fn bench_lookup_strategy(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup-strategy");
    group.measurement_time(Duration::from_secs(5));

    for population in [1_000usize, 10_000, 50_000] {
        let registry = seeded_registry(population, FilterConfig::default());
        let names = registry.usernames();
        let probes = novel_names(100);
        group.throughput(Throughput::Elements(probes.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("filter_then_scan", population),
            &probes,
            |b, probes| {
                b.iter(|| {
                    for probe in probes {
                        black_box(registry.check_username(black_box(probe)));
                    }
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("linear_scan", population),
            &probes,
            |b, probes| {
                b.iter(|| {
                    for probe in probes {
                        black_box(names.iter().any(|n| n == black_box(probe)));
                    }
                })
            },
        );
    }

    group.finish();
}

fn bench_registration(c: &mut Criterion) {
    let mut group = c.benchmark_group("registration");

    group.bench_function("add_user_100", |b| {
        b.iter_batched(
            || seeded_registry(1_000, FilterConfig::default()),
            |registry| {
                for i in 0..100 {
                    black_box(registry.add_user(&format!("bench_{}", i)));
                }
            },
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_bloom_filter,
    bench_lookup_strategy,
    bench_registration
);
criterion_main!(benches);
