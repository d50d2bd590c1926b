//! Trieful Benchmarks
//!
//! This module contains benchmarks for the trie engine. The benchmarks are
//! implemented using the Criterion framework, which provides statistical
//! analysis and performance regression detection.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, SamplingMode,
    Throughput,
};
use std::time::Duration;

use trieful_lib::data_structures::trie::{Scope, StoreStrategy, TextKey, Trie, TrieConfig};

/// Deterministic word list with plenty of shared prefixes.
fn words(count: usize) -> Vec<String> {
    const LETTERS: &[u8] = b"etaoinshrdlu";
    (0..count)
        .map(|i| {
            let mut n = i * 7919 + 13;
            let mut word = String::new();
            for _ in 0..(3 + i % 6) {
                word.push(LETTERS[n % LETTERS.len()] as char);
                n /= LETTERS.len();
                n += i;
            }
            word
        })
        .collect()
}

fn counting() -> Trie<TextKey, u64> {
    Trie::with_config(TrieConfig::new().with_store(StoreStrategy::count()))
}

/// Benchmark building and querying the trie
fn bench_trie(c: &mut Criterion) {
    let mut group = c.benchmark_group("trie");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in [1_000, 10_000].iter() {
        let list = words(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("add", size), &list, |b, list| {
            b.iter(|| {
                let mut trie = counting();
                for word in list {
                    trie.add(black_box(word), 1);
                }
                trie
            });
        });

        group.bench_with_input(BenchmarkId::new("add_all_sub_paths", size), &list, |b, list| {
            b.iter(|| {
                let mut trie = counting();
                for word in list {
                    trie.add_with(black_box(word), Some(1), Scope::AllSubPaths)
                        .ok();
                }
                trie
            });
        });

        let mut loaded = counting();
        for word in &list {
            loaded.add(word, 1);
        }

        group.bench_with_input(BenchmarkId::new("get", size), &list, |b, list| {
            b.iter(|| list.iter().filter(|w| loaded.get(black_box(w)).is_some()).count());
        });

        group.bench_with_input(BenchmarkId::new("paths", size), &loaded, |b, trie| {
            b.iter(|| trie.paths().count());
        });

        group.bench_with_input(BenchmarkId::new("remove", size), &list, |b, list| {
            b.iter_batched(
                || loaded.clone(),
                |mut trie| {
                    for word in list {
                        trie.remove(black_box(word), &1);
                    }
                    trie
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_trie);
criterion_main!(benches);
