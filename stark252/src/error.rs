//! Error types.

use core::fmt;

/// Result type with the `stark252` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors produced by field parsing, hashing and signature operations.
///
/// None of the variants carry the offending value: inputs may be secret.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// Malformed hex input, or a value which is not a canonical field element.
    InvalidInput,

    /// Private key is zero or not smaller than the group order.
    InvalidPrivateKey,

    /// Message hash is not smaller than `2²⁵¹`.
    InvalidMessageHash,

    /// Nonce is zero, or produces an `r` or `s` outside of `[1, 2²⁵¹)`.
    InvalidK,

    /// Public key is not the x-coordinate of a curve point.
    InvalidPublicKey,

    /// Signature component `r` is out of range.
    InvalidR,

    /// Signature component `s` is out of range.
    InvalidS,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::InvalidInput => "invalid input",
            Error::InvalidPrivateKey => "invalid private key",
            Error::InvalidMessageHash => "invalid message hash",
            Error::InvalidK => "invalid k",
            Error::InvalidPublicKey => "invalid public key",
            Error::InvalidR => "invalid r",
            Error::InvalidS => "invalid s",
        })
    }
}

impl core::error::Error for Error {}

impl From<elliptic_curve::Error> for Error {
    fn from(_: elliptic_curve::Error) -> Error {
        Error::InvalidInput
    }
}

#[cfg(feature = "ecdsa")]
impl From<Error> for signature::Error {
    #[cfg(feature = "alloc")]
    fn from(err: Error) -> signature::Error {
        signature::Error::from_source(err)
    }

    #[cfg(not(feature = "alloc"))]
    fn from(_: Error) -> signature::Error {
        signature::Error::new()
    }
}
