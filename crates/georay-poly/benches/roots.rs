//! Benchmarks for the polynomial root finders.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use georay_poly::{cubic, quadratic, quartic};

fn bench_quadratic(c: &mut Criterion) {
    c.bench_function("quadratic_two_roots", |b| {
        b.iter(|| quadratic::real_roots(black_box(1.0), black_box(-3.0), black_box(2.0)))
    });
    c.bench_function("quadratic_cancelling", |b| {
        b.iter(|| quadratic::real_roots(black_box(1.0), black_box(-1e8), black_box(1.0)))
    });
}

fn bench_cubic(c: &mut Criterion) {
    let mut group = c.benchmark_group("cubic");

    let cases = [
        ("three_roots", [1.0, -6.0, 11.0, -6.0]),
        ("one_root", [1.0, -2.0, 1.0, -2.0]),
        ("pure_cube", [2.0, 0.0, 0.0, -16.0]),
    ];

    for (name, coefficients) in cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), &coefficients, |b, k| {
            b.iter(|| {
                cubic::real_roots(black_box(k[0]), black_box(k[1]), black_box(k[2]), black_box(k[3]))
            })
        });
    }

    group.finish();
}

fn bench_quartic(c: &mut Criterion) {
    let mut group = c.benchmark_group("quartic");

    // One representative per branch
    let cases = [
        ("ferrari", [1.0, -10.0, 35.0, -50.0, 24.0]),
        ("neumark", [1.0, 5.25, 7.125, 0.875, -0.75]),
        ("biquadratic", [1.0, 0.0, -5.0, 0.0, 4.0]),
        ("no_roots", [1.0, 2.0, 6.0, 2.0, 5.0]),
    ];

    for (name, coefficients) in cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), &coefficients, |b, k| {
            b.iter(|| {
                quartic::real_roots(
                    black_box(k[0]),
                    black_box(k[1]),
                    black_box(k[2]),
                    black_box(k[3]),
                    black_box(k[4]),
                )
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_quadratic, bench_cubic, bench_quartic);
criterion_main!(benches);
