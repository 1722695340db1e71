//! String interface for callers which exchange field elements as hex text.
//!
//! Inputs are hexadecimal strings with an optional `0x`/`0X` prefix. Digits
//! are case-insensitive and may carry any number of leading zeros. Malformed
//! text fails with [`Error::InvalidInput`]. Values are never wrapped: a
//! well-formed value which is not smaller than the field modulus fails with
//! the error for the argument it was given as, e.g.
//! [`Error::InvalidPrivateKey`] for a private key and
//! [`Error::InvalidMessageHash`] for a message hash.
//!
//! Outputs use the canonical form `0x` followed by exactly 64 lowercase hex
//! digits per field element.
//!
//! ```
//! use stark252::bridge;
//!
//! let digest = bridge::pedersen_hash(
//!     "0x03d937c035c878245caf64531a5756109c53068da139362728feb561405371cb",
//!     "0x208a0a10250e382e1e4bbe2880906c2791bf6275695e02fbbc6aeff9cd8b31a",
//! )?;
//! assert_eq!(
//!     digest,
//!     "0x030e480bed5fe53fa909cc0f8c4d99b8f9f2c016be4c41e13a4848797979c662"
//! );
//! # Ok::<(), stark252::Error>(())
//! ```

use crate::{
    Error, FieldBytes, FieldElement, Result,
    ecdsa::{self, Signature, SignatureBytes, SigningKey},
    pedersen,
};
use alloc::{format, string::String, vec::Vec};
use elliptic_curve::zeroize::Zeroizing;

/// Number of hex digits in a canonical field element.
const FIELD_HEX_DIGITS: usize = 64;

impl FieldElement {
    /// Parse a field element from a hex string.
    ///
    /// Accepts an optional `0x`/`0X` prefix, either letter case and any
    /// number of leading zeros. Fails with [`Error::InvalidInput`] on empty
    /// or malformed input, and on values not smaller than the modulus.
    pub fn from_hex_str(input: &str) -> Result<Self> {
        parse_field_element(input, Error::InvalidInput)
    }

    /// Format as `0x` followed by 64 lowercase hex digits.
    pub fn to_hex_string(&self) -> String {
        format!("0x{}", hex::encode(self.to_bytes()))
    }
}

impl Signature {
    /// Format as `0x` followed by the 64 hex digits of `r` and the 64 hex
    /// digits of `s`.
    pub fn to_hex_string(&self) -> String {
        format!("0x{}", self)
    }

    /// Parse the format produced by [`Signature::to_hex_string`].
    ///
    /// The `0x` prefix is optional but both components must be given with
    /// exactly 64 digits each.
    pub fn from_hex_str(input: &str) -> Result<Self> {
        let (r, s) = parse_signature_components(input)?;
        Signature::new(r, s)
    }
}

/// Parse a hex field element.
///
/// Malformed input fails with [`Error::InvalidInput`]; well-formed values
/// which are not smaller than the modulus fail with `out_of_range`.
fn parse_field_element(input: &str, out_of_range: Error) -> Result<FieldElement> {
    let digits = strip_hex_prefix(input);
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return Err(Error::InvalidInput);
    }

    let digits = digits.trim_start_matches('0');
    if digits.len() > FIELD_HEX_DIGITS {
        return Err(out_of_range);
    }

    let mut padded = Zeroizing::new([b'0'; FIELD_HEX_DIGITS]);
    padded[FIELD_HEX_DIGITS - digits.len()..].copy_from_slice(digits.as_bytes());

    let mut bytes = Zeroizing::new(FieldBytes::default());
    hex::decode_to_slice(&padded[..], &mut bytes[..]).map_err(|_| Error::InvalidInput)?;

    Option::from(FieldElement::from_bytes(&bytes)).ok_or(out_of_range)
}

/// Split `0x` + `r` + `s` into its components without bounding them below
/// `2²⁵¹`.
///
/// Components which are not field elements fail with [`Error::InvalidR`] or
/// [`Error::InvalidS`].
fn parse_signature_components(input: &str) -> Result<(FieldElement, FieldElement)> {
    let digits = strip_hex_prefix(input);
    if digits.len() != 2 * FIELD_HEX_DIGITS {
        return Err(Error::InvalidInput);
    }

    let mut bytes: SignatureBytes = [0u8; Signature::BYTE_SIZE];
    hex::decode_to_slice(digits, &mut bytes).map_err(|_| Error::InvalidInput)?;

    let (r, s) = bytes.split_at(Signature::BYTE_SIZE / 2);
    let r = FieldElement::from_slice(r).ok_or(Error::InvalidR)?;
    let s = FieldElement::from_slice(s).ok_or(Error::InvalidS)?;
    Ok((r, s))
}

fn strip_hex_prefix(input: &str) -> &str {
    input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input)
}

/// Pedersen hash of two hex-encoded field elements.
pub fn pedersen_hash(a: &str, b: &str) -> Result<String> {
    let a = FieldElement::from_hex_str(a)?;
    let b = FieldElement::from_hex_str(b)?;
    Ok(pedersen::pedersen_hash(&a, &b).to_hex_string())
}

/// Pedersen hash chain over a list of hex-encoded field elements.
pub fn compute_hash_on_elements(elements: &[&str]) -> Result<String> {
    let elements = elements
        .iter()
        .map(|element| FieldElement::from_hex_str(element))
        .collect::<Result<Vec<_>>>()?;
    Ok(pedersen::compute_hash_on_elements(&elements).to_hex_string())
}

/// Stark key (public key x-coordinate) for a hex-encoded private key.
pub fn get_public_key(private_key: &str) -> Result<String> {
    let signing_key = parse_signing_key(private_key)?;
    Ok(signing_key.verifying_key().stark_key().to_hex_string())
}

/// Sign a hex-encoded message hash, returning `0x` + `r` + `s`.
///
/// The nonce is derived deterministically from the private key and the
/// message hash. Fails with [`Error::InvalidPrivateKey`] for a key outside
/// of `[1, n)` and with [`Error::InvalidMessageHash`] for a hash not below
/// `2²⁵¹`.
pub fn ecdsa_sign(private_key: &str, message_hash: &str) -> Result<String> {
    let signing_key = parse_signing_key(private_key)?;
    let message_hash = parse_field_element(message_hash, Error::InvalidMessageHash)?;
    let signature = signing_key.sign_prehash_recoverable(&message_hash)?;
    Ok(signature.signature().to_hex_string())
}

/// Sign a hex-encoded message hash with an explicit nonce.
///
/// See [`hazmat::sign_prehash_with_k`](crate::hazmat::sign_prehash_with_k).
#[cfg(feature = "hazmat")]
pub fn ecdsa_sign_with_k(private_key: &str, message_hash: &str, k: &str) -> Result<String> {
    let signing_key = parse_signing_key(private_key)?;
    let message_hash = parse_field_element(message_hash, Error::InvalidMessageHash)?;
    let k = Zeroizing::new(parse_field_element(k, Error::InvalidK)?);
    let signature = crate::hazmat::sign_prehash_with_k(&signing_key, &message_hash, &k)?;
    Ok(signature.signature().to_hex_string())
}

/// Verify a signature in the format produced by [`ecdsa_sign`] against a
/// hex-encoded stark key.
///
/// `s` may be anywhere in `[1, n)` as long as `s⁻¹ mod n` is below `2²⁵¹`;
/// see [`ecdsa::verify_components`].
pub fn ecdsa_verify(stark_key: &str, message_hash: &str, signature: &str) -> Result<bool> {
    let stark_key = parse_field_element(stark_key, Error::InvalidPublicKey)?;
    let message_hash = parse_field_element(message_hash, Error::InvalidMessageHash)?;
    let (r, s) = parse_signature_components(signature)?;
    ecdsa::verify_components(&stark_key, &message_hash, &r, &s)
}

fn parse_signing_key(private_key: &str) -> Result<SigningKey> {
    let private_key = Zeroizing::new(parse_field_element(private_key, Error::InvalidPrivateKey)?);
    SigningKey::from_field_element(&private_key)
}
