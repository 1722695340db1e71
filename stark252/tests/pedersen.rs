//! Pedersen hash tests.

#![cfg(feature = "pedersen")]

use hex_literal::hex;
use proptest::prelude::*;
use stark252::{FieldElement, PedersenHasher, compute_hash_on_elements, pedersen_hash};

fn fe(bytes: [u8; 32]) -> FieldElement {
    FieldElement::from_bytes(&bytes.into()).unwrap()
}

#[test]
fn cairo_lang_vector() {
    let a = fe(hex!(
        "058f580910a6ca59b28927c08fe6c43e2e303ca384badc365795fc645d479d45"
    ));
    let b = fe(hex!(
        "078734f65a067be9bdb39de18434d71e79f7b6466a4b66bbd979ab9e7515fe0b"
    ));
    assert_eq!(
        pedersen_hash(&a, &b),
        fe(hex!(
            "068cc0b76cddd1dd4ed2301ada9b7c872b23875d5ff837b3a87993e0d9996b87"
        ))
    );
}

#[cfg(feature = "test-vectors")]
#[test]
fn test_vectors() {
    use stark252::test_vectors::pedersen::PEDERSEN_TEST_VECTORS;

    for vector in PEDERSEN_TEST_VECTORS {
        assert_eq!(
            pedersen_hash(&fe(vector.a), &fe(vector.b)),
            fe(vector.digest)
        );
    }
}

#[test]
fn largest_inputs() {
    // p - 1 exercises the high-bit points with their largest multiplier
    let max = -FieldElement::ONE;
    let digest = pedersen_hash(&max, &max);
    assert_eq!(digest, pedersen_hash(&max, &max));
    assert_ne!(digest, pedersen_hash(&max, &FieldElement::ZERO));
}

prop_compose! {
    fn field_element()(bytes in any::<[u8; 32]>()) -> FieldElement {
        let mut bytes = bytes;
        bytes[0] &= 0x07;
        fe(bytes)
    }
}

proptest! {
    #[test]
    fn deterministic(a in field_element(), b in field_element()) {
        prop_assert_eq!(pedersen_hash(&a, &b), pedersen_hash(&a, &b));
    }

    #[test]
    fn order_matters(a in field_element(), b in field_element()) {
        prop_assume!(a != b);
        prop_assert_ne!(pedersen_hash(&a, &b), pedersen_hash(&b, &a));
    }

    #[test]
    fn hasher_agrees_with_chain(elements in proptest::collection::vec(field_element(), 0..6)) {
        let mut hasher = PedersenHasher::new();
        for element in &elements {
            hasher.update(element);
        }
        prop_assert_eq!(hasher.finalize(), compute_hash_on_elements(&elements));
    }
}
