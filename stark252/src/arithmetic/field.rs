//! Field arithmetic modulo p = 2²⁵¹ + 17·2¹⁹² + 1
//!
//! Arithmetic implementations are provided by `primefield` and `crypto-bigint`.

use crate::U256;
use core::fmt;
use elliptic_curve::{
    ff::PrimeField,
    ops::BatchInvert,
    subtle::{Choice, ConstantTimeEq, CtOption},
};

#[cfg(doc)]
use {
    core::ops::{Add, Mul, Neg, Sub},
    elliptic_curve::{ff::Field, subtle::ConditionallySelectable},
};

/// Constant representing the modulus: p = 2²⁵¹ + 17·2¹⁹² + 1
const MODULUS_HEX: &str = "0800000000000011000000000000000000000000000000000000000000000001";

primefield::monty_field_params! {
    name: FieldParams,
    modulus: MODULUS_HEX,
    uint: U256,
    byte_order: primefield::ByteOrder::BigEndian,
    multiplicative_generator: 3,
    doc: "Montgomery parameters for the STARK curve field modulus p = 2²⁵¹ + 17·2¹⁹² + 1"
}

primefield::monty_field_element! {
    name: FieldElement,
    params: FieldParams,
    uint: U256,
    doc: "Element of the STARK curve base field, used for curve coordinates, Pedersen hash inputs and digests."
}

primefield::monty_field_arithmetic! {
    name: FieldElement,
    params: FieldParams,
    uint: U256
}

impl BatchInvert for FieldElement {}

/// Prints the 64 hex digits of the canonical big endian encoding.
impl fmt::LowerHex for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_bytes() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_bytes() {
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serdect::serde::Serialize for FieldElement {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serdect::serde::Serializer,
    {
        serdect::array::serialize_hex_lower_or_bin(&self.to_bytes(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serdect::serde::Deserialize<'de> for FieldElement {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serdect::serde::Deserializer<'de>,
    {
        let mut bytes = crate::FieldBytes::default();
        serdect::array::deserialize_hex_or_bin(&mut bytes, deserializer)?;
        Option::from(Self::from_bytes(&bytes))
            .ok_or_else(|| serdect::serde::de::Error::custom("value out of range"))
    }
}
