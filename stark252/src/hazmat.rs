//! Low-level STARK ECDSA primitives.
//!
//! # ⚠️ Warning: Hazmat!
//!
//! YOU PROBABLY DON'T WANT TO USE THESE!
//!
//! Signing with a caller-chosen nonce leaks the private key as soon as the
//! same `k` is used for two different message hashes, or when `k` is
//! predictable. These functions exist for reproducing fixed test vectors.
//! Use [`SigningKey::sign_prehash_recoverable`] instead, which derives `k`
//! deterministically.

use crate::{
    FieldElement, Result, Scalar, U256,
    ecdsa::{RecoverableSignature, SigningKey, sign_with_k},
};
use elliptic_curve::ops::Reduce;

/// Sign `message_hash` using the explicit nonce `k`.
///
/// `k` is reduced modulo the group order `n`. There is no retry: a zero
/// nonce, or one producing `r` or `s` outside of `[1, 2²⁵¹)`, fails with
/// [`Error::InvalidK`](crate::Error::InvalidK).
pub fn sign_prehash_with_k(
    signing_key: &SigningKey,
    message_hash: &FieldElement,
    k: &FieldElement,
) -> Result<RecoverableSignature> {
    let k = <Scalar as Reduce<U256>>::reduce(&k.to_canonical());
    sign_with_k(signing_key.as_nonzero_scalar(), message_hash, &k)
}
