use criterion::{black_box, criterion_group, BenchmarkId, Criterion};
use suffixarray::SuffixArrayIndex;

use super::util::generate_text;

pub fn construction_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");
    for length in [1_000, 10_000, 100_000] {
        let text = generate_text(length);
        group.bench_with_input(BenchmarkId::from_parameter(length), &text, |b, text| {
            b.iter(|| black_box(SuffixArrayIndex::new(text)))
        });
    }
    group.finish();
}

criterion_group!(benches, construction_benchmark);
