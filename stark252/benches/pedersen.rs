//! Pedersen hash benchmarks

use core::hint::black_box;
use criterion::{Criterion, criterion_group, criterion_main};
use stark252::{FieldElement, compute_hash_on_elements, pedersen_hash};

const ELEMENT_A: FieldElement = FieldElement::from_hex_vartime(
    "03d937c035c878245caf64531a5756109c53068da139362728feb561405371cb",
);
const ELEMENT_B: FieldElement = FieldElement::from_hex_vartime(
    "0208a0a10250e382e1e4bbe2880906c2791bf6275695e02fbbc6aeff9cd8b31a",
);

fn bench_pedersen(c: &mut Criterion) {
    let mut group = c.benchmark_group("pedersen");

    let a = ELEMENT_A;
    let b = ELEMENT_B;

    group.bench_function("hash", |bench| {
        bench.iter(|| pedersen_hash(black_box(&a), black_box(&b)))
    });

    let elements = [a, b, a, b];
    group.bench_function("hash on 4 elements", |bench| {
        bench.iter(|| compute_hash_on_elements(black_box(&elements)))
    });

    group.finish();
}

criterion_group!(benches, bench_pedersen);
criterion_main!(benches);
