//! Microbenchmarks for stride derivation across ranks.
//!
//! Run with: cargo bench --bench stride_bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use strided_layout::{fill_strides, ColMajor, RowMajor};

fn bench_fill_strides(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_strides");

    for rank in [2usize, 4, 8, 16, 32] {
        let dims: Vec<usize> = (0..rank).map(|i| 2 + i % 5).collect();
        let mut strides = vec![0isize; rank];

        group.bench_with_input(BenchmarkId::new("row_major", rank), &dims, |b, dims| {
            b.iter(|| {
                fill_strides::<RowMajor>(black_box(dims), black_box(&mut strides)).unwrap();
            })
        });
        group.bench_with_input(BenchmarkId::new("col_major", rank), &dims, |b, dims| {
            b.iter(|| {
                fill_strides::<ColMajor>(black_box(dims), black_box(&mut strides)).unwrap();
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fill_strides);
criterion_main!(benches);
