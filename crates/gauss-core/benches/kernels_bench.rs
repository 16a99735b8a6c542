//! Benchmarks comparing scalar vs SIMD row-reduction kernels

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gauss_core::{Avx2Backend, PortableSimdBackend, RowKernel, ScalarBackend};

/// Generate a row with a deterministic pattern
fn generate_row(len: usize) -> Vec<f64> {
    (0..len).map(|i| (i as f64 * 0.1).sin() * 100.0).collect()
}

fn bench_subtract_scaled_row(c: &mut Criterion) {
    let mut group = c.benchmark_group("subtract_scaled_row");

    // Augmented row widths of the benchmarked system sizes
    for &len in &[129usize, 257, 513, 1025, 2049] {
        let src = generate_row(len);
        let dest = generate_row(len);

        group.bench_with_input(BenchmarkId::new("scalar", len), &len, |b, _| {
            let mut row = dest.clone();
            b.iter(|| ScalarBackend.subtract_scaled_row(black_box(&mut row), black_box(&src), 1e-9));
        });

        group.bench_with_input(BenchmarkId::new("portable-simd", len), &len, |b, _| {
            let mut row = dest.clone();
            b.iter(|| {
                PortableSimdBackend.subtract_scaled_row(black_box(&mut row), black_box(&src), 1e-9)
            });
        });

        if let Some(avx2) = Avx2Backend::try_new() {
            group.bench_with_input(BenchmarkId::new("avx2", len), &len, |b, _| {
                let mut row = dest.clone();
                b.iter(|| avx2.subtract_scaled_row(black_box(&mut row), black_box(&src), 1e-9));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_subtract_scaled_row);
criterion_main!(benches);
