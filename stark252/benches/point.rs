//! STARK curve `ProjectivePoint` benchmarks

use core::hint::black_box;
use criterion::{
    BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement,
};
use stark252::{
    AffinePoint, ProjectivePoint, Scalar,
    elliptic_curve::{Group, ops::MulByGeneratorVartime},
};

const SCALAR: Scalar =
    Scalar::from_hex_vartime("0139fe4d6f02e666e86a6f58e65060f115cd3c185bd9e98bd829636931458f79");

fn bench_point_add<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let p = ProjectivePoint::GENERATOR;
    let a = AffinePoint::GENERATOR;
    group.bench_function("add", |b| b.iter(|| black_box(p) + black_box(p)));
    group.bench_function("add_mixed", |b| b.iter(|| black_box(p) + black_box(a)));
}

fn bench_point_double<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let p = ProjectivePoint::GENERATOR;
    group.bench_function("double", |b| b.iter(|| black_box(p).double()));
}

fn bench_point_mul<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let p = ProjectivePoint::GENERATOR;
    group.bench_function("point-scalar mul", |b| {
        b.iter(|| black_box(p) * black_box(SCALAR))
    });
    group.bench_function("mul_by_generator_vartime", |b| {
        b.iter(|| ProjectivePoint::mul_by_generator_vartime(&black_box(SCALAR)))
    });
}

fn bench_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("point operations");
    bench_point_add(&mut group);
    bench_point_double(&mut group);
    bench_point_mul(&mut group);
    group.finish();
}

criterion_group!(benches, bench_point);
criterion_main!(benches);
