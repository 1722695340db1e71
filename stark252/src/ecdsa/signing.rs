//! Support for computing STARK ECDSA signatures.
//!
//! ## Algorithm
//!
//! ```text
//! 1. If z ⩾ 2²⁵¹, fail.
//! 2. Set seed ← None.
//! 3. Set k ← generate_k(z, d, seed).
//! 4. Set R ← kG, r ← R.x.
//! 5. If r ∉ [1, 2²⁵¹), bump seed (None → 1 → 2 → …) and go to 3.
//! 6. Set s ← k⁻¹(z + r·d) mod n.
//! 7. If s ∉ [1, 2²⁵¹), bump seed and go to 3.
//! 8. Return (r, s), with v ← R.y mod 2 for recovery.
//! ```

use super::{
    RecoverableSignature, Signature, VerifyingKey, check_message_hash, generate_k, hash_message,
    prehash_to_field, sign_with_k,
};
use crate::{Error, FieldBytes, FieldElement, NonZeroScalar, PublicKey, Result, Scalar, SecretKey};
use core::fmt::{self, Debug};
use elliptic_curve::{
    rand_core::CryptoRng,
    subtle::{Choice, ConstantTimeEq},
    zeroize::{Zeroize, ZeroizeOnDrop},
};
use signature::{KeypairRef, Signer, hazmat::PrehashSigner};

/// STARK ECDSA secret key used for signing message hashes.
///
/// The secret scalar is zeroized on drop and is never part of the [`Debug`]
/// output.
///
/// ## Usage
///
/// The [`signature`] crate defines the following traits which are the
/// primary API for signing:
///
/// - [`Signer`]: sign a message using this key. The message is hashed with
///   SHA-256 truncated to 251 bits.
/// - [`PrehashSigner`]: sign a 32-byte big-endian message hash, which must be
///   below `2²⁵¹`.
///
/// [`SigningKey::sign_prehash_recoverable`] is the native entry point, taking
/// the message hash as a [`FieldElement`].
#[derive(Clone)]
pub struct SigningKey {
    /// Secret scalar.
    secret_scalar: NonZeroScalar,

    /// Verifying key for this signing key.
    verifying_key: VerifyingKey,
}

impl SigningKey {
    /// Generate a cryptographically random [`SigningKey`].
    pub fn random<R: CryptoRng + ?Sized>(rng: &mut R) -> Self {
        Self::from_nonzero_scalar(NonZeroScalar::random(rng))
    }

    /// Create a signing key from a private key given as a field element.
    ///
    /// Returns [`Error::InvalidPrivateKey`] unless the key is in `[1, n)`.
    pub fn from_field_element(private_key: &FieldElement) -> Result<Self> {
        Self::from_bytes(&private_key.to_bytes())
    }

    /// Parse signing key from big endian-encoded bytes.
    pub fn from_bytes(bytes: &FieldBytes) -> Result<Self> {
        let scalar =
            Option::<Scalar>::from(Scalar::from_bytes(bytes)).ok_or(Error::InvalidPrivateKey)?;
        let secret_scalar = Option::<NonZeroScalar>::from(NonZeroScalar::new(scalar))
            .ok_or(Error::InvalidPrivateKey)?;
        Ok(Self::from_nonzero_scalar(secret_scalar))
    }

    /// Parse signing key from a big endian-encoded byte slice, which must be
    /// exactly 32 bytes long.
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        let bytes = FieldBytes::try_from(slice).map_err(|_| Error::InvalidPrivateKey)?;
        Self::from_bytes(&bytes)
    }

    /// Create a signing key from a non-zero scalar.
    pub fn from_nonzero_scalar(secret_scalar: NonZeroScalar) -> Self {
        let public_key = PublicKey::from_secret_scalar(&secret_scalar);
        Self {
            secret_scalar,
            verifying_key: VerifyingKey::new(public_key),
        }
    }

    /// Serialize as bytes.
    pub fn to_bytes(&self) -> FieldBytes {
        self.secret_scalar.to_bytes()
    }

    /// Borrow the secret [`NonZeroScalar`] value for this key.
    ///
    /// # ⚠️ Warning
    ///
    /// This value is key material.
    ///
    /// Please treat it with the care it deserves!
    pub fn as_nonzero_scalar(&self) -> &NonZeroScalar {
        &self.secret_scalar
    }

    /// Get the [`VerifyingKey`] which corresponds to this [`SigningKey`].
    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }

    /// Sign a message hash, deriving the nonce deterministically.
    ///
    /// Returns [`Error::InvalidMessageHash`] if the hash is not below `2²⁵¹`.
    pub fn sign_prehash_recoverable(
        &self,
        message_hash: &FieldElement,
    ) -> Result<RecoverableSignature> {
        check_message_hash(message_hash)?;

        let mut seed: Option<FieldElement> = None;
        loop {
            let k = generate_k(message_hash, &self.secret_scalar, seed.as_ref());

            match sign_with_k(&self.secret_scalar, message_hash, &k) {
                Err(Error::InvalidK) => {
                    seed = Some(seed.map_or(FieldElement::ONE, |seed| seed + FieldElement::ONE));
                }
                result => return result,
            }
        }
    }
}

//
// `*Signer` trait impls
//

impl PrehashSigner<Signature> for SigningKey {
    fn sign_prehash(&self, prehash: &[u8]) -> signature::Result<Signature> {
        let message_hash = prehash_to_field(prehash)?;
        Ok(self.sign_prehash_recoverable(&message_hash)?.into())
    }
}

impl PrehashSigner<RecoverableSignature> for SigningKey {
    fn sign_prehash(&self, prehash: &[u8]) -> signature::Result<RecoverableSignature> {
        let message_hash = prehash_to_field(prehash)?;
        Ok(self.sign_prehash_recoverable(&message_hash)?)
    }
}

impl Signer<Signature> for SigningKey {
    fn try_sign(&self, msg: &[u8]) -> signature::Result<Signature> {
        Ok(self.sign_prehash_recoverable(&hash_message(msg))?.into())
    }
}

impl Signer<RecoverableSignature> for SigningKey {
    fn try_sign(&self, msg: &[u8]) -> signature::Result<RecoverableSignature> {
        Ok(self.sign_prehash_recoverable(&hash_message(msg))?)
    }
}

//
// Other trait impls
//

impl AsRef<VerifyingKey> for SigningKey {
    fn as_ref(&self) -> &VerifyingKey {
        &self.verifying_key
    }
}

impl ConstantTimeEq for SigningKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.secret_scalar.ct_eq(&other.secret_scalar)
    }
}

impl Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("verifying_key", &self.verifying_key)
            .finish_non_exhaustive()
    }
}

impl Drop for SigningKey {
    fn drop(&mut self) {
        self.secret_scalar.zeroize();
    }
}

impl ZeroizeOnDrop for SigningKey {}

/// Constant-time comparison
impl Eq for SigningKey {}
impl PartialEq for SigningKey {
    fn eq(&self, other: &SigningKey) -> bool {
        self.ct_eq(other).into()
    }
}

impl From<NonZeroScalar> for SigningKey {
    fn from(secret_scalar: NonZeroScalar) -> Self {
        Self::from_nonzero_scalar(secret_scalar)
    }
}

impl From<&SecretKey> for SigningKey {
    fn from(secret_key: &SecretKey) -> Self {
        Self::from_nonzero_scalar(secret_key.to_nonzero_scalar())
    }
}

impl From<SigningKey> for SecretKey {
    fn from(signing_key: SigningKey) -> SecretKey {
        SecretKey::from(&signing_key.secret_scalar)
    }
}

impl From<&SigningKey> for SecretKey {
    fn from(signing_key: &SigningKey) -> SecretKey {
        SecretKey::from(&signing_key.secret_scalar)
    }
}

impl KeypairRef for SigningKey {
    type VerifyingKey = VerifyingKey;
}
