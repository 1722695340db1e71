//! STARK curve Elliptic Curve Digital Signature Algorithm, as used by
//! Starknet.
//!
//! This differs from textbook ECDSA in a few ways:
//!
//! - message hashes are field elements below `2²⁵¹` and are used as-is
//! - both `r` and `s` must lie in `[1, 2²⁵¹)`; signing retries with a fresh
//!   nonce otherwise
//! - public keys are usually exchanged as a "stark key", the x-coordinate of
//!   the public point, so verification accepts either sign of the point
//!
//! ## Usage
//!
#![cfg_attr(feature = "std", doc = "```")]
#![cfg_attr(not(feature = "std"), doc = "```ignore")]
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use stark252::{
//!     FieldElement,
//!     ecdsa::{SigningKey, verify},
//! };
//!
//! // Signing
//! let private_key = FieldElement::from_u64(0x1234);
//! let signing_key = SigningKey::from_field_element(&private_key)?;
//! let stark_key = signing_key.verifying_key().stark_key();
//!
//! let message_hash = FieldElement::from_u64(0xabcd);
//! let signature = signing_key.sign_prehash_recoverable(&message_hash)?;
//!
//! // Verifying
//! assert!(verify(&stark_key, &message_hash, signature.signature())?);
//! # Ok(())
//! # }
//! ```

mod rfc6979;
mod signing;
mod verifying;

pub use signature;

pub use self::{rfc6979::generate_k, signing::SigningKey, verifying::VerifyingKey};

use crate::{
    AffinePoint, Error, FieldBytes, FieldElement, ProjectivePoint, Result, Scalar, U256,
    arithmetic::x_coordinate,
};
use core::fmt::{self, Debug, Display};
use elliptic_curve::{bigint::ArrayEncoding, group::Curve as _, point::AffineCoordinates};
use sha2::{Digest, Sha256};
use signature::SignatureEncoding;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// STARK ECDSA signature serialized as bytes (`r ‖ s`, big endian).
pub type SignatureBytes = [u8; Signature::BYTE_SIZE];

/// Exclusive upper bound on message hashes and signature components: `2²⁵¹`.
pub(crate) const ELEMENT_UPPER_BOUND: U256 =
    U256::from_be_hex("0800000000000000000000000000000000000000000000000000000000000000");

/// Is `value` in `[1, 2²⁵¹)`?
fn is_in_range(value: &FieldElement) -> bool {
    let uint = value.to_canonical();
    uint != U256::ZERO && uint < ELEMENT_UPPER_BOUND
}

/// Reject message hashes which are not below `2²⁵¹`.
pub(crate) fn check_message_hash(message_hash: &FieldElement) -> Result<()> {
    if message_hash.to_canonical() < ELEMENT_UPPER_BOUND {
        Ok(())
    } else {
        Err(Error::InvalidMessageHash)
    }
}

/// Parse a 32-byte big-endian message hash.
pub(crate) fn prehash_to_field(prehash: &[u8]) -> Result<FieldElement> {
    let message_hash = FieldElement::from_slice(prehash).ok_or(Error::InvalidMessageHash)?;
    check_message_hash(&message_hash)?;
    Ok(message_hash)
}

/// Hash an arbitrary message with SHA-256, keeping the leftmost 251 bits so
/// the result is a valid message hash.
pub(crate) fn hash_message(msg: &[u8]) -> FieldElement {
    let digest = Sha256::digest(msg);
    FieldElement::from_uint_unchecked(U256::from_be_byte_array(digest).shr_vartime(5))
}

/// Lift an `s` component into the scalar field, rejecting values outside of
/// `[1, n)`.
fn s_to_scalar(s: &FieldElement) -> Result<Scalar> {
    let s = Option::<Scalar>::from(Scalar::from_uint(&s.to_canonical())).ok_or(Error::InvalidS)?;
    if bool::from(s.is_zero()) {
        return Err(Error::InvalidS);
    }
    Ok(s)
}

/// Lift a field element below `2²⁵¹` into the scalar field.
///
/// Such values are smaller than the group order, so no reduction occurs.
pub(crate) fn to_scalar(value: &FieldElement) -> Scalar {
    Scalar::from_uint_unchecked(value.to_canonical())
}

/// STARK ECDSA signature.
///
/// Both components are guaranteed to lie in `[1, 2²⁵¹)`.
///
/// The [`Display`] impl renders `r ‖ s` as 128 lowercase hex digits.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct Signature {
    r: FieldElement,
    s: FieldElement,
}

impl Signature {
    /// Size of an encoded signature in bytes.
    pub const BYTE_SIZE: usize = 64;

    /// Create a [`Signature`] from its `r` and `s` components.
    ///
    /// Returns [`Error::InvalidR`] or [`Error::InvalidS`] if a component is
    /// outside of `[1, 2²⁵¹)`.
    pub fn new(r: FieldElement, s: FieldElement) -> Result<Self> {
        if !is_in_range(&r) {
            return Err(Error::InvalidR);
        }

        if !is_in_range(&s) {
            return Err(Error::InvalidS);
        }

        Ok(Self { r, s })
    }

    /// Parse a signature from its `r ‖ s` byte encoding.
    pub fn from_bytes(bytes: &SignatureBytes) -> Result<Self> {
        let (r, s) = bytes.split_at(Self::BYTE_SIZE / 2);
        let r = FieldElement::from_slice(r).ok_or(Error::InvalidR)?;
        let s = FieldElement::from_slice(s).ok_or(Error::InvalidS)?;
        Self::new(r, s)
    }

    /// Parse a signature from a byte slice, which must be exactly
    /// [`Signature::BYTE_SIZE`] bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes = SignatureBytes::try_from(bytes).map_err(|_| Error::InvalidInput)?;
        Self::from_bytes(&bytes)
    }

    /// Serialize this signature as `r ‖ s`.
    pub fn to_bytes(&self) -> SignatureBytes {
        let mut ret = [0; Self::BYTE_SIZE];
        let (r_bytes, s_bytes) = ret.split_at_mut(Self::BYTE_SIZE / 2);
        r_bytes.copy_from_slice(&self.r.to_bytes());
        s_bytes.copy_from_slice(&self.s.to_bytes());
        ret
    }

    /// Convert this signature into a byte vector.
    #[cfg(feature = "alloc")]
    pub fn to_vec(&self) -> Vec<u8> {
        self.to_bytes().to_vec()
    }

    /// The `r` component: x-coordinate of the nonce point.
    pub fn r(&self) -> &FieldElement {
        &self.r
    }

    /// The `s` component.
    pub fn s(&self) -> &FieldElement {
        &self.s
    }

    /// Bytes for the `r` component of a signature.
    pub fn r_bytes(&self) -> FieldBytes {
        self.r.to_bytes()
    }

    /// Bytes for the `s` component of a signature.
    pub fn s_bytes(&self) -> FieldBytes {
        self.s.to_bytes()
    }

    /// Split the signature into its `r` and `s` components.
    pub fn split(&self) -> (FieldElement, FieldElement) {
        (self.r, self.s)
    }
}

impl Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stark252::ecdsa::Signature({:X}{:X})", self.r, self.s)
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}{:x}", self.r, self.s)
    }
}

impl From<Signature> for SignatureBytes {
    fn from(signature: Signature) -> SignatureBytes {
        signature.to_bytes()
    }
}

impl From<&Signature> for SignatureBytes {
    fn from(signature: &Signature) -> SignatureBytes {
        signature.to_bytes()
    }
}

impl From<RecoverableSignature> for Signature {
    fn from(signature: RecoverableSignature) -> Signature {
        signature.signature
    }
}

impl SignatureEncoding for Signature {
    type Repr = SignatureBytes;

    fn to_bytes(&self) -> Self::Repr {
        self.into()
    }

    fn encoded_len(&self) -> usize {
        Self::BYTE_SIZE
    }
}

impl TryFrom<SignatureBytes> for Signature {
    type Error = signature::Error;

    fn try_from(signature: SignatureBytes) -> signature::Result<Signature> {
        Ok(Signature::from_bytes(&signature)?)
    }
}

impl TryFrom<&SignatureBytes> for Signature {
    type Error = signature::Error;

    fn try_from(signature: &SignatureBytes) -> signature::Result<Signature> {
        Ok(Signature::from_bytes(signature)?)
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = signature::Error;

    fn try_from(bytes: &[u8]) -> signature::Result<Signature> {
        Ok(Signature::from_slice(bytes)?)
    }
}

#[cfg(feature = "serde")]
impl serdect::serde::Serialize for Signature {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serdect::serde::Serializer,
    {
        serdect::array::serialize_hex_lower_or_bin(&self.to_bytes(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serdect::serde::Deserialize<'de> for Signature {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serdect::serde::Deserializer<'de>,
    {
        let mut bytes = [0u8; Self::BYTE_SIZE];
        serdect::array::deserialize_hex_or_bin(&mut bytes, deserializer)?;
        Self::from_bytes(&bytes).map_err(serdect::serde::de::Error::custom)
    }
}

/// [`Signature`] together with the parity of the nonce point's y-coordinate,
/// which allows recovering the signer's public key.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RecoverableSignature {
    signature: Signature,
    y_is_odd: bool,
}

impl RecoverableSignature {
    /// Attach a recovery bit to a signature.
    pub fn new(signature: Signature, y_is_odd: bool) -> Self {
        Self {
            signature,
            y_is_odd,
        }
    }

    /// Borrow the inner [`Signature`].
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Recovery value `v`: `1` if the nonce point's y-coordinate is odd,
    /// `0` otherwise.
    pub fn v(&self) -> u8 {
        self.y_is_odd as u8
    }

    /// Recover the [`VerifyingKey`] which produced this signature over
    /// `message_hash`.
    pub fn recover_verifying_key(&self, message_hash: &FieldElement) -> Result<VerifyingKey> {
        VerifyingKey::recover_from_prehash(message_hash, &self.signature, self.v())
    }
}

/// Compute the stark key (public key x-coordinate) for a private key.
///
/// Returns [`Error::InvalidPrivateKey`] unless the key is in `[1, n)`.
pub fn get_public_key(private_key: &FieldElement) -> Result<FieldElement> {
    Ok(SigningKey::from_field_element(private_key)?
        .verifying_key()
        .stark_key())
}

/// Sign `message_hash` with `private_key`, deriving the nonce with RFC 6979.
pub fn sign(private_key: &FieldElement, message_hash: &FieldElement) -> Result<RecoverableSignature> {
    SigningKey::from_field_element(private_key)?.sign_prehash_recoverable(message_hash)
}

/// Verify a signature over `message_hash` against a stark key.
///
/// Returns `Ok(false)` for a well-formed signature which does not verify, and
/// an error when an input is out of range.
pub fn verify(
    stark_key: &FieldElement,
    message_hash: &FieldElement,
    signature: &Signature,
) -> Result<bool> {
    VerifyingKey::from_stark_key(stark_key)?.verify_prehash_field(message_hash, signature)
}

/// Verify a signature given as separate `r` and `s` components.
///
/// Unlike [`Signature`], which bounds `s` below `2²⁵¹`, `s` may be anywhere in
/// `[1, n)`. Its inverse `w = s⁻¹ mod n` must still lie in `[1, 2²⁵¹)`.
///
/// Returns [`Error::InvalidR`] if `r ∉ [1, 2²⁵¹)` and [`Error::InvalidS`] if
/// `s` or `w` is out of range.
pub fn verify_components(
    stark_key: &FieldElement,
    message_hash: &FieldElement,
    r: &FieldElement,
    s: &FieldElement,
) -> Result<bool> {
    VerifyingKey::from_stark_key(stark_key)?.verify_prehash_components(message_hash, r, s)
}

/// Recover the stark key of the signer from a signature and its recovery
/// value `v`.
pub fn recover(message_hash: &FieldElement, signature: &Signature, v: u8) -> Result<FieldElement> {
    Ok(VerifyingKey::recover_from_prehash(message_hash, signature, v)?.stark_key())
}

/// Sign with an explicit nonce.
///
/// ```text
/// 1. If k = 0, fail.
/// 2. Set R ← kG, r ← R.x.
/// 3. If r ∉ [1, 2²⁵¹), fail.
/// 4. Set s ← k⁻¹(z + r·d) mod n.
/// 5. If s ∉ [1, 2²⁵¹), fail.
/// 6. Return (r, s, v = R.y mod 2).
/// ```
///
/// Every failure is reported as [`Error::InvalidK`] so callers can retry
/// with another nonce.
pub(crate) fn sign_with_k(
    secret_scalar: &Scalar,
    message_hash: &FieldElement,
    k: &Scalar,
) -> Result<RecoverableSignature> {
    check_message_hash(message_hash)?;

    let k_inv = Option::<Scalar>::from(k.invert()).ok_or(Error::InvalidK)?;

    let big_r: AffinePoint = (ProjectivePoint::GENERATOR * k).to_affine();
    let r = x_coordinate(&big_r);
    if !is_in_range(&r) {
        return Err(Error::InvalidK);
    }

    let z = to_scalar(message_hash);
    let s = k_inv * (z + to_scalar(&r) * secret_scalar);

    // s < n < p
    let s = FieldElement::from_uint_unchecked(s.to_canonical());
    if !is_in_range(&s) {
        return Err(Error::InvalidK);
    }

    Ok(RecoverableSignature::new(
        Signature { r, s },
        big_r.y_is_odd().into(),
    ))
}

/// Check `(r, s)` against a full public point, accepting either sign of the
/// point.
///
/// ```text
/// 0. Fail unless r ∈ [1, 2²⁵¹) and s ∈ [1, n).
/// 1. Set w ← s⁻¹ mod n; fail unless w ∈ [1, 2²⁵¹).
/// 2. Set A ← (z·w)G, B ← (r·w)Q.
/// 3. Accept if (A + B).x = r or (A − B).x = r.
/// ```
pub(crate) fn verify_with_point(
    public_point: &AffinePoint,
    message_hash: &FieldElement,
    r: &FieldElement,
    s: &FieldElement,
) -> Result<bool> {
    check_message_hash(message_hash)?;

    if !is_in_range(r) {
        return Err(Error::InvalidR);
    }

    let w = Option::<Scalar>::from(s_to_scalar(s)?.invert()).ok_or(Error::InvalidS)?;
    if !is_in_range(&FieldElement::from_uint_unchecked(w.to_canonical())) {
        return Err(Error::InvalidS);
    }

    let zw = to_scalar(message_hash) * w;
    let rw = to_scalar(r) * w;

    let a = ProjectivePoint::GENERATOR * zw;
    let b = ProjectivePoint::from(*public_point) * rw;

    Ok(x_coordinate(&(a + b).to_affine()) == *r || x_coordinate(&(a - b).to_affine()) == *r)
}
