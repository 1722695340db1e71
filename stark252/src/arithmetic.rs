//! Pure Rust implementation of group operations on the STARK curve.
//!
//! Curve parameters can be found in the StarkWare documentation:
//! <https://docs.starkware.co/starkex/crypto/stark-curve.html>

pub(crate) mod field;
pub(crate) mod scalar;

pub use self::{field::FieldElement, scalar::Scalar};

use crate::Stark252;
use elliptic_curve::{
    CurveArithmetic, PrimeCurveArithmetic,
    hazmat::FieldArithmetic,
    point::{AffineCoordinates, DecompressPoint},
    subtle::{Choice, CtOption},
};
use primeorder::{PrimeCurveParams, point_arithmetic};

/// Elliptic curve point in affine coordinates.
pub type AffinePoint = primeorder::AffinePoint<Stark252>;

/// Elliptic curve point in projective coordinates.
pub type ProjectivePoint = primeorder::ProjectivePoint<Stark252>;

impl CurveArithmetic for Stark252 {
    type AffinePoint = AffinePoint;
    type ProjectivePoint = ProjectivePoint;
    type Scalar = Scalar;
}

impl FieldArithmetic for Stark252 {
    type FieldElement = FieldElement;
}

impl PrimeCurveArithmetic for Stark252 {
    type CurveGroup = ProjectivePoint;
}

/// Adapted from StarkWare's `stark_curve` parameters.
impl PrimeCurveParams for Stark252 {
    type PointArithmetic = point_arithmetic::EquationAIsGeneric;
    type Backend = primeorder::mul_backend::VariableOnly;

    /// α = 1
    const EQUATION_A: FieldElement = FieldElement::ONE;

    /// β = 0x06f21413efbe40de150e596d72f7a8c5609ad26c15c915c1f4cdfcb99cee9e89
    const EQUATION_B: FieldElement = FieldElement::from_hex_vartime(
        "06f21413efbe40de150e596d72f7a8c5609ad26c15c915c1f4cdfcb99cee9e89",
    );

    /// Base point of the STARK curve.
    const GENERATOR: (FieldElement, FieldElement) = (
        FieldElement::from_hex_vartime(
            "01ef15c18599971b7beced415a40f0c7deacfd9b0d1819e03d723d8bc943cfca",
        ),
        FieldElement::from_hex_vartime(
            "005668060aa49730b7be4801df46ec62de53ecd11abe43a32873000c36e8dc1f",
        ),
    );
}

/// Affine x-coordinate of `point` as a base field element.
///
/// The identity maps to zero.
pub(crate) fn x_coordinate(point: &AffinePoint) -> FieldElement {
    FieldElement::from_bytes(&point.x()).unwrap_or(FieldElement::ZERO)
}

/// Recover the curve point with the given x-coordinate and y-parity.
///
/// Returns `None` when `x³ + αx + β` is not a square.
pub(crate) fn decompress(x: &FieldElement, y_is_odd: Choice) -> CtOption<AffinePoint> {
    AffinePoint::decompress(&x.to_bytes(), y_is_odd)
}
