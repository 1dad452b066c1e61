use criterion::{black_box, criterion_group, Criterion};
use suffixarray::SuffixArrayIndex;

use super::util::{generate_text, sample_patterns};

mod bounds;
mod descent;

/// Build the index that is shared by all search benchmarks.
fn build_index() -> (SuffixArrayIndex, Vec<Vec<u8>>) {
    let text = generate_text(100_000);
    let patterns = sample_patterns(&text, 100, 12);
    let index = SuffixArrayIndex::new(&text).unwrap();
    (index, patterns)
}

pub fn locate_benchmark(c: &mut Criterion) {
    let (index, patterns) = build_index();
    c.bench_function("locate", |b| {
        b.iter(|| {
            for pattern in &patterns {
                black_box(index.locate(pattern));
            }
        })
    });
}

criterion_group!(
    benches,
    descent::descent_benchmark,
    bounds::bounds_benchmark,
    locate_benchmark
);
