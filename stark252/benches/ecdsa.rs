//! STARK ECDSA benchmarks

use core::hint::black_box;
use criterion::{Criterion, criterion_group, criterion_main};
use hex_literal::hex;
use stark252::{
    FieldBytes, FieldElement,
    ecdsa::{
        Signature, SigningKey,
        signature::hazmat::{PrehashSigner, PrehashVerifier},
    },
};

fn test_signing_key() -> SigningKey {
    SigningKey::from_bytes(
        &hex!("0139fe4d6f02e666e86a6f58e65060f115cd3c185bd9e98bd829636931458f79").into(),
    )
    .unwrap()
}

fn test_message_hash() -> FieldBytes {
    hex!("06fea80189363a786037ed3e7ba546dad0ef7de49fccae0e31eb658b7dd4ea76").into()
}

fn bench_ecdsa(c: &mut Criterion) {
    let mut group = c.benchmark_group("ecdsa");

    let d = test_signing_key();
    let z = test_message_hash();

    group.bench_function("try_sign_prehashed", |b| {
        b.iter(|| {
            let _: Signature = black_box(&d).sign_prehash(&black_box(z)).unwrap();
        })
    });

    let q = d.verifying_key();
    let s: Signature = d.sign_prehash(&z).unwrap();

    group.bench_function("verify_prehashed", |b| {
        b.iter(|| {
            black_box(q)
                .verify_prehash(&black_box(z), &black_box(s))
                .unwrap()
        })
    });

    let stark_key = q.stark_key();
    let message_hash = FieldElement::from_bytes(&z).unwrap();

    group.bench_function("verify_stark_key", |b| {
        b.iter(|| {
            stark252::ecdsa::verify(
                black_box(&stark_key),
                black_box(&message_hash),
                black_box(&s),
            )
            .unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_ecdsa);
criterion_main!(benches);
