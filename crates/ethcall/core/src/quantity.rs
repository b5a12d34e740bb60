//! Hex quantity encoding
//!
//! JSON-RPC encodes unsigned integers as `0x`-prefixed hexadecimal strings
//! without leading zeros, with `0x0` as the only representation of zero.
//! Decoding here is strict: anything else is rejected.

use std::fmt;

use alloy_primitives::U256;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::error::DecodeError;

/// Maximum number of hex digits in a 256-bit quantity
const MAX_U256_DIGITS: usize = 64;
/// Maximum number of hex digits in a 64-bit quantity
const MAX_U64_DIGITS: usize = 16;

fn digits(input: &str, max: usize) -> Result<&str, DecodeError> {
    let digits = input
        .strip_prefix("0x")
        .ok_or_else(|| DecodeError::new(format!("hex quantity {input:?} is missing 0x prefix")))?;
    if digits.is_empty() {
        return Err(DecodeError::new("hex quantity has no digits"));
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return Err(DecodeError::new(format!(
            "hex quantity {input:?} has leading zero digits"
        )));
    }
    if digits.len() > max {
        return Err(DecodeError::new(format!(
            "hex quantity {input:?} exceeds {} bits",
            max * 4
        )));
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(DecodeError::new(format!(
            "hex quantity {input:?} has invalid digits"
        )));
    }
    Ok(digits)
}

/// Parse a hex quantity into a 256-bit integer
pub fn parse_u256(input: &str) -> Result<U256, DecodeError> {
    let digits = digits(input, MAX_U256_DIGITS)?;
    U256::from_str_radix(digits, 16).map_err(|err| DecodeError::new(err.to_string()))
}

/// Parse a hex quantity into a 64-bit integer
pub fn parse_u64(input: &str) -> Result<u64, DecodeError> {
    let digits = digits(input, MAX_U64_DIGITS)?;
    u64::from_str_radix(digits, 16).map_err(|err| DecodeError::new(err.to_string()))
}

/// Encode a 64-bit integer as a hex quantity
pub fn encode_u64(value: u64) -> String {
    format!("{value:#x}")
}

/// Encode a 256-bit integer as a hex quantity
pub fn encode_u256(value: U256) -> String {
    format!("0x{value:x}")
}

/// A 64-bit integer kept in its wire form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HexU64(pub u64);

/// A 256-bit integer kept in its wire form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HexU256(pub U256);

impl From<u64> for HexU64 {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<HexU64> for u64 {
    fn from(value: HexU64) -> Self {
        value.0
    }
}

impl From<U256> for HexU256 {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl From<HexU256> for U256 {
    fn from(value: HexU256) -> Self {
        value.0
    }
}

impl fmt::Display for HexU64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_u64(self.0))
    }
}

impl fmt::Display for HexU256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_u256(self.0))
    }
}

impl Serialize for HexU64 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&encode_u64(self.0))
    }
}

impl Serialize for HexU256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&encode_u256(self.0))
    }
}

impl<'de> Deserialize<'de> for HexU64 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_u64(&raw).map(Self).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for HexU256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_u256(&raw).map(Self).map_err(de::Error::custom)
    }
}

/// `#[serde(with = "...")]` adapter for `u64` fields sent as quantities
pub mod u64_hex {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::HexU64;

    /// Serialize as a hex quantity
    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::encode_u64(*value))
    }

    /// Deserialize from a hex quantity
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        HexU64::deserialize(deserializer).map(|q| q.0)
    }
}

/// Serde adapter for `Option<u64>` fields that may be `null` on the wire
///
/// Use together with `#[serde(default)]` so a missing field is `None` too.
pub mod u64_hex_opt {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::HexU64;

    /// Serialize as a hex quantity, or `null`
    pub fn serialize<S: Serializer>(value: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => serializer.serialize_str(&super::encode_u64(*value)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize from a hex quantity or `null`
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<u64>, D::Error> {
        Option::<HexU64>::deserialize(deserializer).map(|q| q.map(|q| q.0))
    }
}
