//! Construction and search benchmarks over synthetic nucleotide data.
//!
//! Run with: `cargo bench`
//! Save baseline: `cargo bench -- --save-baseline main`
//! Compare: `cargo bench -- --baseline main`

use criterion::{Criterion, criterion_group, criterion_main};
use sfx::index::SuffixIndex;
use sfx::sequence::SequenceStore;
use std::hint::black_box;

/// Deterministic xorshift nucleotides, so runs are comparable.
fn synthetic(len: usize) -> Vec<u8> {
    let mut state = 0x2545F491u32;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            b"ACGT"[(state % 4) as usize]
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    group.sample_size(20);

    for size in [1usize << 12, 1 << 16] {
        let data = synthetic(size);
        group.bench_function(format!("{}_bytes", size), |b| {
            b.iter(|| {
                let store = SequenceStore::new(data.clone(), data.len());
                black_box(SuffixIndex::build(&store).len())
            })
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let data = synthetic(1 << 16);
    let store = SequenceStore::new(data.clone(), data.len());
    let index = SuffixIndex::build(&store);

    let hit_pattern = data[1024..1024 + 12].to_vec();

    let mut group = c.benchmark_group("search");
    group.bench_function("hit_12_bytes", |b| {
        b.iter(|| black_box(index.search(&hit_pattern).unwrap().len()))
    });
    group.bench_function("miss_12_bytes", |b| {
        // N never appears in the synthetic alphabet
        b.iter(|| black_box(index.search(b"NNNNNNNNNNNN").unwrap().len()))
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_search);
criterion_main!(benches);
