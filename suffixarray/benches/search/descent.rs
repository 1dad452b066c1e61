use criterion::{black_box, Criterion};

use super::build_index;

pub fn descent_benchmark(c: &mut Criterion) {
    let (index, patterns) = build_index();
    c.bench_function("match_pattern", |b| {
        b.iter(|| {
            for pattern in &patterns {
                black_box(index.match_pattern(pattern));
            }
        })
    });
}
