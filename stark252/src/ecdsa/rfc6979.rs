//! Deterministic nonce generation in the manner of RFC 6979.
//!
//! Starknet deviates from RFC 6979 §3.2 in how candidates are turned into
//! integers: every 32-byte HMAC-DRBG output is shifted right by 4 bits and
//! kept if it lies in `[1, n)`, and the optional seed is passed as the
//! DRBG's additional data with its leading zero bytes stripped.

use crate::{FieldBytes, FieldElement, Scalar, Stark252, U256};
use elliptic_curve::{
    Curve, bigint::ArrayEncoding, subtle::ConstantTimeLess, zeroize::Zeroizing,
};
use sha2::Sha256;

/// Generate the nonce `k` for signing `message_hash` with `secret_scalar`.
///
/// `seed` is extra entropy used to obtain a different nonce when a
/// previous one produced an out-of-range signature; `None` is the first
/// attempt.
pub fn generate_k(
    message_hash: &FieldElement,
    secret_scalar: &Scalar,
    seed: Option<&FieldElement>,
) -> Scalar {
    let seed_bytes = seed.map(|seed| seed.to_bytes()).unwrap_or_default();
    let first_non_zero = seed_bytes
        .iter()
        .position(|&byte| byte != 0)
        .unwrap_or(seed_bytes.len());

    let x = Zeroizing::new(secret_scalar.to_bytes());
    let mut hmac_drbg = ::rfc6979::HmacDrbg::<Sha256>::new(
        &x,
        &message_hash.to_bytes(),
        &seed_bytes[first_non_zero..],
    );

    loop {
        let mut bytes = Zeroizing::new(FieldBytes::default());
        hmac_drbg.fill_bytes(&mut bytes);
        let k = Zeroizing::new(U256::from_be_byte_array(*bytes).shr_vartime(4));

        if *k != U256::ZERO && bool::from(k.ct_lt(Stark252::ORDER.as_ref())) {
            return Scalar::from_uint_unchecked(*k);
        }
    }
}
