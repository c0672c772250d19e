//! Benchmarks for the transforms and the two multiplication algorithms.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use polymul::{fft, ifft, Polynomial};

fn coefficients(n: usize, offset: usize) -> Vec<f64> {
    (0..n).map(|i| ((i + offset) % 100) as f64).collect()
}

fn bench_fft(c: &mut Criterion) {
    let mut group = c.benchmark_group("fft");

    for n in [512usize, 1024, 4096] {
        let data = coefficients(n, 0);
        let points = fft(&data).unwrap();

        group.bench_with_input(BenchmarkId::new("forward", n), &data, |b, data| {
            b.iter(|| fft(black_box(data)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("inverse", n), &points, |b, points| {
            b.iter(|| ifft(black_box(points)).unwrap())
        });
    }

    group.finish();
}

fn bench_poly_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("poly_mul");

    for n in [64usize, 512, 2048] {
        let a = Polynomial::new(coefficients(n, 0)).unwrap();
        let b = Polynomial::new(coefficients(n, 50)).unwrap();

        group.bench_function(BenchmarkId::new("naive", n), |bencher| {
            bencher.iter(|| black_box(&a).multiply(black_box(&b)))
        });
        group.bench_function(BenchmarkId::new("fft", n), |bencher| {
            bencher.iter(|| black_box(&a).multiply_fft(black_box(&b)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fft, bench_poly_mul);
criterion_main!(benches);
