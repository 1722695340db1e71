#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! ## `serde` support
//!
//! When the `serde` feature of this crate is enabled, `Serialize` and
//! `Deserialize` are impl'd for field elements, scalars and signatures.
//!
//! Please see type-specific documentation for more information.

#[cfg(feature = "alloc")]
#[allow(unused_extern_crates)]
extern crate alloc;

#[cfg(feature = "arithmetic")]
pub mod arithmetic;

#[cfg(all(feature = "alloc", feature = "ecdsa", feature = "pedersen"))]
pub mod bridge;
#[cfg(feature = "ecdsa")]
pub mod ecdsa;
#[cfg(feature = "hazmat")]
pub mod hazmat;
#[cfg(feature = "pedersen")]
pub mod pedersen;

#[cfg(any(feature = "test-vectors", test))]
pub mod test_vectors;

mod error;

pub use crate::error::{Error, Result};
pub use elliptic_curve::{self, bigint::U256, consts::U32};

#[cfg(feature = "arithmetic")]
pub use arithmetic::{AffinePoint, ProjectivePoint, field::FieldElement, scalar::Scalar};

#[cfg(feature = "pedersen")]
pub use pedersen::{PedersenHasher, compute_hash_on_elements, pedersen_hash};

use elliptic_curve::{array::Array, bigint::Odd, consts::U33};

/// Order of the STARK curve's elliptic curve group (i.e. scalar modulus) in hexadecimal.
pub(crate) const ORDER_HEX: &str = "0800000000000010ffffffffffffffffb781126dcae7b2321e66a241adc64d2f";

/// STARK elliptic curve (a.k.a. stark-curve252), as used by Starknet.
///
/// Its equation is `y² = x³ + αx + β` over the prime field of order
/// `p = 2²⁵¹ + 17·2¹⁹² + 1`:
///
/// ```text
/// α = 1
/// β = 0x06f21413efbe40de150e596d72f7a8c5609ad26c15c915c1f4cdfcb99cee9e89
/// ```
///
/// The group of points has prime order (cofactor 1).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct Stark252;

impl elliptic_curve::Curve for Stark252 {
    /// 32-byte serialized field elements.
    type FieldBytesSize = U32;

    /// 256-bit integer type used for internally representing field elements.
    type Uint = U256;

    /// Order of the STARK curve's elliptic curve group (i.e. scalar modulus).
    const ORDER: Odd<U256> = Odd::<U256>::from_be_hex(ORDER_HEX);
}

impl elliptic_curve::PrimeCurve for Stark252 {}

impl elliptic_curve::point::PointCompression for Stark252 {
    /// Starknet identifies public keys by their x-coordinate only.
    const COMPRESS_POINTS: bool = true;
}

impl elliptic_curve::point::PointCompaction for Stark252 {
    /// Compact points are not used by Starknet.
    const COMPACT_POINTS: bool = false;
}

/// Compressed SEC1-encoded STARK curve point.
pub type CompressedPoint = Array<u8, U33>;

/// SEC1-encoded STARK curve point.
pub type Sec1Point = elliptic_curve::sec1::Sec1Point<Stark252>;

/// STARK curve field element serialized as bytes.
///
/// Byte array containing a serialized field element value (base field or
/// scalar), big endian.
pub type FieldBytes = elliptic_curve::FieldBytes<Stark252>;

/// Non-zero STARK curve scalar field element.
#[cfg(feature = "arithmetic")]
pub type NonZeroScalar = elliptic_curve::NonZeroScalar<Stark252>;

/// STARK curve public key.
#[cfg(feature = "arithmetic")]
pub type PublicKey = elliptic_curve::PublicKey<Stark252>;

/// STARK curve secret key.
pub type SecretKey = elliptic_curve::SecretKey<Stark252>;
