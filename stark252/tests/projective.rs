//! Projective arithmetic tests.

#![cfg(all(feature = "arithmetic", feature = "test-vectors"))]

use elliptic_curve::{
    Group,
    group::{GroupEncoding, ff::PrimeField},
    ops::{MulByGeneratorVartime, Reduce},
    sec1::{self, ToSec1Point},
};
use primeorder::test_projective_arithmetic;
use proptest::{prelude::any, prop_compose, proptest};
use stark252::{
    AffinePoint, FieldBytes, ProjectivePoint, Scalar,
    test_vectors::group::{ADD_TEST_VECTORS, MUL_TEST_VECTORS},
};

test_projective_arithmetic!(
    AffinePoint,
    ProjectivePoint,
    Scalar,
    ADD_TEST_VECTORS,
    MUL_TEST_VECTORS
);

#[test]
fn projective_identity_to_bytes() {
    // This is technically an invalid SEC1 encoding, but is preferable to panicking.
    assert_eq!([0; 33], ProjectivePoint::IDENTITY.to_bytes().as_slice());
}

#[test]
fn generator_order() {
    let minus_one = -Scalar::ONE;
    assert_eq!(
        ProjectivePoint::GENERATOR * minus_one,
        -ProjectivePoint::GENERATOR
    );
    assert!(bool::from(
        (ProjectivePoint::GENERATOR * minus_one + ProjectivePoint::GENERATOR).is_identity()
    ));
}

prop_compose! {
    fn scalar()(bytes in any::<[u8; 32]>()) -> Scalar {
        Scalar::reduce(&FieldBytes::from(bytes))
    }
}

proptest! {
    #[test]
    fn scalar_mul_distributes(a in scalar(), b in scalar()) {
        let g = ProjectivePoint::GENERATOR;
        assert_eq!(g * (a + b), g * a + g * b);
    }

    #[test]
    fn mul_by_generator_vartime(k in scalar()) {
        assert_eq!(
            ProjectivePoint::mul_by_generator_vartime(&k),
            ProjectivePoint::GENERATOR * k
        );
    }

    #[test]
    fn compressed_round_trip(k in scalar()) {
        let point = (ProjectivePoint::GENERATOR * k).to_affine();
        let decoded = AffinePoint::from_bytes(&point.to_bytes()).unwrap();
        assert_eq!(decoded, point);
    }
}
