//! Pedersen hash test vectors.

use hex_literal::hex;

/// Pedersen hash test vector: `digest = H(a, b)`.
pub struct TestVector {
    /// First input.
    pub a: [u8; 32],

    /// Second input.
    pub b: [u8; 32],

    /// Expected digest.
    pub digest: [u8; 32],
}

/// Pedersen hash test vectors.
///
/// The first two are from `cairo-lang`'s `signature_test_data.json`.
pub const PEDERSEN_TEST_VECTORS: &[TestVector] = &[
    TestVector {
        a: hex!("03d937c035c878245caf64531a5756109c53068da139362728feb561405371cb"),
        b: hex!("0208a0a10250e382e1e4bbe2880906c2791bf6275695e02fbbc6aeff9cd8b31a"),
        digest: hex!("030e480bed5fe53fa909cc0f8c4d99b8f9f2c016be4c41e13a4848797979c662"),
    },
    TestVector {
        a: hex!("058f580910a6ca59b28927c08fe6c43e2e303ca384badc365795fc645d479d45"),
        b: hex!("078734f65a067be9bdb39de18434d71e79f7b6466a4b66bbd979ab9e7515fe0b"),
        digest: hex!("068cc0b76cddd1dd4ed2301ada9b7c872b23875d5ff837b3a87993e0d9996b87"),
    },
    TestVector {
        a: hex!("0000000000000000000000000000000000000000000000000000000000000001"),
        b: hex!("0000000000000000000000000000000000000000000000000000000000000000"),
        digest: hex!("0268a9d47dde48af4b6e2c33932ed1c13adec25555abaa837c376af4ea2f8a94"),
    },
    TestVector {
        a: hex!("0000000000000000000000000000000000000000000000000000000000000000"),
        b: hex!("0000000000000000000000000000000000000000000000000000000000000001"),
        digest: hex!("046c9aeb066cc2f41c7124af30514f9e607137fbac950524f5fdace5788f9d43"),
    },
];
