//! Starknet Pedersen hash over the STARK curve.
//!
//! ## Algorithm
//!
//! Each input is split into its low 248 bits and its high 4 bits, and every
//! part is multiplied by its own constant point:
//!
//! ```text
//! 1. Set a_low ← a mod 2²⁴⁸, a_high ← a >> 248 (same for b).
//! 2. Set R ← SHIFT + a_low·P₀ + a_high·P₁ + b_low·P₂ + b_high·P₃.
//! 3. Return R.x.
//! ```
//!
//! The constant points are taken from StarkWare's `pedersen_params`.
//!
//! ## Usage
//!
//! ```
//! use stark252::{FieldElement, pedersen_hash};
//!
//! let a = FieldElement::from_u64(1);
//! let b = FieldElement::from_u64(2);
//! assert_ne!(pedersen_hash(&a, &b), pedersen_hash(&b, &a));
//! ```

use crate::{
    AffinePoint, ProjectivePoint, Sec1Point, U256,
    arithmetic::{FieldElement, Scalar, x_coordinate},
};
use elliptic_curve::{group::Curve as _, sec1::FromSec1Point};

/// Mask selecting the low 248 bits of an input.
const LOW_MASK: U256 =
    U256::from_be_hex("00ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff");

/// Number of bits in the low part of an input.
const LOW_BITS: u32 = 248;

/// Starting point of every hash.
pub(crate) const SHIFT_POINT: (FieldElement, FieldElement) = (
    FieldElement::from_hex_vartime("049ee3eba8c1600700ee1b87eb599f16716b0b1022947733551fde4050ca6804"),
    FieldElement::from_hex_vartime("03ca0cfe4b3bc6ddf346d49d06ea0ed34e621062c0e056c1d0405d266e10268a"),
);

/// Multiplier of the low bits of the first input.
pub(crate) const P0: (FieldElement, FieldElement) = (
    FieldElement::from_hex_vartime("0234287dcbaffe7f969c748655fca9e58fa8120b6d56eb0c1080d17957ebe47b"),
    FieldElement::from_hex_vartime("03b056f100f96fb21e889527d41f4e39940135dd7a6c94cc6ed0268ee89e5615"),
);

/// Multiplier of the high bits of the first input.
pub(crate) const P1: (FieldElement, FieldElement) = (
    FieldElement::from_hex_vartime("04fa56f376c83db33f9dab2656558f3399099ec1de5e3018b7a6932dba8aa378"),
    FieldElement::from_hex_vartime("03fa0984c931c9e38113e0c0e47e4401562761f92a7a23b45168f4e80ff5b54d"),
);

/// Multiplier of the low bits of the second input.
pub(crate) const P2: (FieldElement, FieldElement) = (
    FieldElement::from_hex_vartime("04ba4cc166be8dec764910f75b45f74b40c690c74709e90f3aa372f0bd2d6997"),
    FieldElement::from_hex_vartime("0040301cf5c1751f4b971e46c4ede85fcac5c59a5ce5ae7c48151f27b24b219c"),
);

/// Multiplier of the high bits of the second input.
pub(crate) const P3: (FieldElement, FieldElement) = (
    FieldElement::from_hex_vartime("054302dcb0e6cc1c6e44cca8f61a63bb2ca65048d53fb325d36ff12c49a58202"),
    FieldElement::from_hex_vartime("01b77b3e37d13504b348046268d8ae25ce98ad783c25561a879dcc77e99c2426"),
);

/// Compute the Pedersen hash of two field elements.
///
/// The result is the x-coordinate of
/// `SHIFT + a_low·P₀ + a_high·P₁ + b_low·P₂ + b_high·P₃`.
pub fn pedersen_hash(a: &FieldElement, b: &FieldElement) -> FieldElement {
    let (a_low, a_high) = split(a);
    let (b_low, b_high) = split(b);

    let result = point(&SHIFT_POINT)
        + point(&P0) * a_low
        + point(&P1) * a_high
        + point(&P2) * b_low
        + point(&P3) * b_high;

    x_coordinate(&result.to_affine())
}

/// Compute the Pedersen hash chain of a sequence of field elements.
///
/// ```text
/// h = H(H(...H(H(0, e₀), e₁)..., eₙ₋₁), n)
/// ```
///
/// This is the `compute_hash_on_elements` function used throughout Starknet
/// for hashing calldata and transaction fields.
pub fn compute_hash_on_elements(elements: &[FieldElement]) -> FieldElement {
    elements
        .iter()
        .fold(PedersenHasher::new(), |hasher, element| hasher.chain(element))
        .finalize()
}

/// Incremental form of [`compute_hash_on_elements`].
///
/// ```
/// use stark252::{FieldElement, PedersenHasher, compute_hash_on_elements};
///
/// let elements = [FieldElement::from_u64(1), FieldElement::from_u64(2)];
///
/// let mut hasher = PedersenHasher::new();
/// for element in &elements {
///     hasher.update(element);
/// }
///
/// assert_eq!(hasher.finalize(), compute_hash_on_elements(&elements));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PedersenHasher {
    /// Running hash of the elements seen so far.
    state: FieldElement,

    /// Number of elements seen so far.
    len: u64,
}

impl PedersenHasher {
    /// Create a hasher with an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element to the chain.
    pub fn update(&mut self, element: &FieldElement) {
        self.state = pedersen_hash(&self.state, element);
        self.len += 1;
    }

    /// Append an element to the chain, builder style.
    #[must_use]
    pub fn chain(mut self, element: &FieldElement) -> Self {
        self.update(element);
        self
    }

    /// Number of elements appended so far.
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Has nothing been appended yet?
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Hash the element count into the chain and return the result.
    pub fn finalize(&self) -> FieldElement {
        pedersen_hash(&self.state, &FieldElement::from_u64(self.len))
    }
}

impl<'a> Extend<&'a FieldElement> for PedersenHasher {
    fn extend<I: IntoIterator<Item = &'a FieldElement>>(&mut self, iter: I) {
        for element in iter {
            self.update(element);
        }
    }
}

/// Split an element into its low 248 bits and high 4 bits.
///
/// Both parts are below `2²⁴⁸ < n`, so they are valid scalars without
/// reduction.
fn split(fe: &FieldElement) -> (Scalar, Scalar) {
    let uint = fe.to_canonical();
    let low = uint.bitand(&LOW_MASK);
    let high = uint.shr_vartime(LOW_BITS);
    (
        Scalar::from_uint_unchecked(low),
        Scalar::from_uint_unchecked(high),
    )
}

/// Lift a constant coordinate pair onto the curve.
///
/// The constants are checked to lie on the curve by the tests below.
pub(crate) fn point(coords: &(FieldElement, FieldElement)) -> ProjectivePoint {
    let encoded =
        Sec1Point::from_affine_coordinates(&coords.0.to_bytes(), &coords.1.to_bytes(), false);
    let affine: Option<AffinePoint> = AffinePoint::from_sec1_point(&encoded).into();
    affine
        .map(ProjectivePoint::from)
        .unwrap_or(ProjectivePoint::IDENTITY)
}
