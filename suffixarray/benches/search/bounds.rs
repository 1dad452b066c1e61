use criterion::{black_box, Criterion};

use super::build_index;

pub fn bounds_benchmark(c: &mut Criterion) {
    let (index, patterns) = build_index();
    c.bench_function("search_bounds", |b| {
        b.iter(|| {
            for pattern in &patterns {
                black_box(index.search_bounds(pattern));
            }
        })
    });
}
