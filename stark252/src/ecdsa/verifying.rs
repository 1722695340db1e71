//! Support for verifying STARK ECDSA signatures.
//!
//! ## Algorithm
//!
//! ```text
//! 1. If z ⩾ 2²⁵¹, return NO.
//! 2. Set w ← s⁻¹ mod n. If w ∉ [1, 2²⁵¹), return NO.
//! 3. Set A ← (z·w)G and B ← (r·w)Q.
//! 4. If (A + B).x = r or (A − B).x = r, return YES.
//! 5. Return NO.
//! ```
//!
//! Accepting `A − B` makes the result independent of the sign of `Q`, which
//! cannot be told apart when the key is given as a stark key.

use super::{
    Signature, check_message_hash, hash_message, prehash_to_field, to_scalar, verify_with_point,
};
use crate::{
    AffinePoint, Error, FieldElement, ProjectivePoint, PublicKey, Result, Scalar, Sec1Point,
    Stark252,
    arithmetic::{decompress, x_coordinate},
};
use elliptic_curve::{group::Curve as _, sec1::ToSec1Point, subtle::Choice};
use signature::{Verifier, hazmat::PrehashVerifier};

/// STARK ECDSA public key used for verifying signatures are valid for a given
/// message hash.
///
/// ## Usage
///
/// The [`signature`] crate defines the following traits which are the
/// primary API for verifying:
///
/// - [`Verifier`]: verify a message against a provided key and signature
/// - [`PrehashVerifier`]: verify a 32-byte big-endian message hash
///
/// [`VerifyingKey::verify_prehash_field`] is the native entry point, which
/// distinguishes malformed inputs from signatures which do not verify.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VerifyingKey {
    /// Signer's public key.
    public_key: PublicKey,
}

impl VerifyingKey {
    /// Initialize [`VerifyingKey`] from a public key.
    pub fn new(public_key: PublicKey) -> Self {
        Self { public_key }
    }

    /// Initialize [`VerifyingKey`] from an affine point.
    ///
    /// Returns [`Error::InvalidPublicKey`] if the given affine point is the
    /// additive identity (a.k.a. point at infinity).
    pub fn from_affine(affine: AffinePoint) -> Result<Self> {
        let public_key = PublicKey::from_affine(affine).map_err(|_| Error::InvalidPublicKey)?;
        Ok(Self::new(public_key))
    }

    /// Initialize [`VerifyingKey`] from a stark key, the x-coordinate of the
    /// public point.
    ///
    /// The point with the even y-coordinate is chosen. Returns
    /// [`Error::InvalidPublicKey`] if no point has this x-coordinate.
    pub fn from_stark_key(stark_key: &FieldElement) -> Result<Self> {
        let affine = Option::<AffinePoint>::from(decompress(stark_key, Choice::from(0)))
            .ok_or(Error::InvalidPublicKey)?;
        Self::from_affine(affine)
    }

    /// Parse a SEC1-encoded [`VerifyingKey`].
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        let public_key = PublicKey::from_sec1_bytes(bytes).map_err(|_| Error::InvalidPublicKey)?;
        Ok(Self::new(public_key))
    }

    /// Borrow the inner [`AffinePoint`] for this public key.
    pub fn as_affine(&self) -> &AffinePoint {
        self.public_key.as_affine()
    }

    /// The stark key: x-coordinate of the public point.
    pub fn stark_key(&self) -> FieldElement {
        x_coordinate(self.as_affine())
    }

    /// Verify a signature over a message hash.
    ///
    /// Returns `Ok(false)` for a signature which does not verify, and an
    /// error when the message hash or the signature's `s⁻¹` is out of range.
    pub fn verify_prehash_field(
        &self,
        message_hash: &FieldElement,
        signature: &Signature,
    ) -> Result<bool> {
        verify_with_point(self.as_affine(), message_hash, signature.r(), signature.s())
    }

    /// Verify a signature over a message hash given as separate `r` and `s`
    /// components, where `s` may be anywhere in `[1, n)`.
    ///
    /// See [`verify_components`][`super::verify_components`].
    pub fn verify_prehash_components(
        &self,
        message_hash: &FieldElement,
        r: &FieldElement,
        s: &FieldElement,
    ) -> Result<bool> {
        verify_with_point(self.as_affine(), message_hash, r, s)
    }

    /// Recover the [`VerifyingKey`] which produced `signature` over
    /// `message_hash`, given the recovery value `v` (`0` or `1`).
    ///
    /// ```text
    /// 1. Set R ← the point with x-coordinate r and y-parity v.
    /// 2. Return r⁻¹(sR − zG).
    /// ```
    pub fn recover_from_prehash(
        message_hash: &FieldElement,
        signature: &Signature,
        v: u8,
    ) -> Result<Self> {
        check_message_hash(message_hash)?;

        if v > 1 {
            return Err(Error::InvalidInput);
        }

        let big_r = Option::<AffinePoint>::from(decompress(signature.r(), Choice::from(v)))
            .ok_or(Error::InvalidR)?;
        let r_inv = Option::<Scalar>::from(to_scalar(signature.r()).invert())
            .ok_or(Error::InvalidR)?;

        let s_r = ProjectivePoint::from(big_r) * to_scalar(signature.s());
        let z_g = ProjectivePoint::GENERATOR * to_scalar(message_hash);
        let public_point = (s_r - z_g) * r_inv;

        Self::from_affine(public_point.to_affine())
    }
}

//
// `*Verifier` trait impls
//

impl PrehashVerifier<Signature> for VerifyingKey {
    fn verify_prehash(&self, prehash: &[u8], signature: &Signature) -> signature::Result<()> {
        let message_hash = prehash_to_field(prehash)?;

        if self.verify_prehash_field(&message_hash, signature)? {
            Ok(())
        } else {
            Err(signature::Error::new())
        }
    }
}

impl Verifier<Signature> for VerifyingKey {
    fn verify(&self, msg: &[u8], signature: &Signature) -> signature::Result<()> {
        if self.verify_prehash_field(&hash_message(msg), signature)? {
            Ok(())
        } else {
            Err(signature::Error::new())
        }
    }
}

//
// Other trait impls
//

impl AsRef<AffinePoint> for VerifyingKey {
    fn as_ref(&self) -> &AffinePoint {
        self.as_affine()
    }
}

impl From<PublicKey> for VerifyingKey {
    fn from(public_key: PublicKey) -> VerifyingKey {
        VerifyingKey::new(public_key)
    }
}

impl From<&PublicKey> for VerifyingKey {
    fn from(public_key: &PublicKey) -> VerifyingKey {
        VerifyingKey::new(*public_key)
    }
}

impl From<VerifyingKey> for PublicKey {
    fn from(verifying_key: VerifyingKey) -> PublicKey {
        verifying_key.public_key
    }
}

impl From<&VerifyingKey> for PublicKey {
    fn from(verifying_key: &VerifyingKey) -> PublicKey {
        verifying_key.public_key
    }
}

impl ToSec1Point<Stark252> for VerifyingKey {
    fn to_sec1_point(&self, compress: bool) -> Sec1Point {
        self.as_affine().to_sec1_point(compress)
    }
}
