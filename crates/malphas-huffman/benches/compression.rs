//! Huffman compression benchmarks.
//!
//! Benchmarks cover:
//! - Frequency histogram over raw bytes
//! - Code tree construction from a histogram
//! - End-to-end compression

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use malphas_huffman::{compress, CodeTable, FrequencyTable, HuffmanTree};

/// Text-like bytes: a skewed distribution over a few dozen symbols.
fn generate_skewed_bytes(size: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..size)
        .map(|_| {
            let roll: f64 = rng.gen();
            // Roughly Zipfian over 64 symbols.
            let symbol = (64.0 * roll * roll) as u8;
            b' ' + symbol.min(63)
        })
        .collect()
}

fn bench_histogram(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram");
    for size in [1 << 10, 1 << 16, 1 << 20] {
        let data = generate_skewed_bytes(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("from_bytes", size), &data, |b, data| {
            b.iter(|| FrequencyTable::from_bytes(black_box(data)))
        });
    }
    group.finish();
}

fn bench_tree_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree");
    for size in [1 << 10, 1 << 16, 1 << 20] {
        let freq = FrequencyTable::from_bytes(&generate_skewed_bytes(size));
        group.bench_with_input(BenchmarkId::new("build", size), &freq, |b, freq| {
            b.iter(|| {
                let tree = HuffmanTree::from_frequencies(black_box(freq)).unwrap();
                CodeTable::from_tree(&tree)
            })
        });
    }
    group.finish();
}

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress");
    for size in [1 << 10, 1 << 16, 1 << 20] {
        let data = generate_skewed_bytes(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("end_to_end", size), &data, |b, data| {
            b.iter(|| compress(black_box(data)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_histogram, bench_tree_build, bench_compress);
criterion_main!(benches);
