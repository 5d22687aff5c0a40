// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 evm-abi developers

//! Primitive leaf values.

use crate::error::AbiError;
use crate::kind::PrimitiveKind;
use crate::value::WORD_BYTES;
use alloy_primitives::{Address, U256};

/// A primitive ABI value.
///
/// Signed integers are stored as 256-bit two's complement, so encoding
/// any numeric value is a plain big-endian copy of the stored word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Primitive {
    Uint { bits: u16, value: U256 },
    Int { bits: u16, value: U256 },
    Address(Address),
    Bool(bool),
    FixedBytes(Vec<u8>),
    Bytes(Vec<u8>),
    Str(String),
}

impl Primitive {
    /// Unsigned integer of the given bit width.
    ///
    /// Fails if the width is not 8..=256 in steps of 8, or the value
    /// does not fit in it.
    pub fn uint(bits: u16, value: U256) -> Result<Self, AbiError> {
        check_bits(bits)?;
        if value.bit_len() > usize::from(bits) {
            return Err(AbiError::InvalidTypeShape(format!(
                "value does not fit in uint{}",
                bits
            )));
        }
        Ok(Self::Uint { bits, value })
    }

    /// `uint256` value.
    #[must_use]
    pub fn uint256(value: U256) -> Self {
        Self::Uint { bits: 256, value }
    }

    /// Signed integer of the given bit width.
    ///
    /// Fails if the width is not 8..=256 in steps of 8, or the value
    /// falls outside the width's two's-complement range.
    pub fn int(bits: u16, value: i128) -> Result<Self, AbiError> {
        check_bits(bits)?;
        if bits < 128 {
            let bound = 1i128 << (bits - 1);
            if value < -bound || value >= bound {
                return Err(AbiError::InvalidTypeShape(format!(
                    "value does not fit in int{}",
                    bits
                )));
            }
        }
        Ok(Self::Int {
            bits,
            value: twos_complement(value),
        })
    }

    /// `int256` value.
    #[must_use]
    pub fn int256(value: i128) -> Self {
        Self::Int {
            bits: 256,
            value: twos_complement(value),
        }
    }

    /// Fixed-size byte string (`bytesN`), 1..=32 bytes.
    pub fn fixed_bytes(value: impl Into<Vec<u8>>) -> Result<Self, AbiError> {
        let value = value.into();
        if value.is_empty() || value.len() > WORD_BYTES {
            return Err(AbiError::InvalidTypeShape(format!(
                "fixed bytes length must be 1..=32, got {}",
                value.len()
            )));
        }
        Ok(Self::FixedBytes(value))
    }

    /// Variable-length byte string.
    #[must_use]
    pub fn bytes(value: impl Into<Vec<u8>>) -> Self {
        Self::Bytes(value.into())
    }

    /// UTF-8 string value.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::Str(value.into())
    }

    /// Kind of this value, including width metadata.
    #[must_use]
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Self::Uint { bits, .. } => PrimitiveKind::Uint(*bits),
            Self::Int { bits, .. } => PrimitiveKind::Int(*bits),
            Self::Address(_) => PrimitiveKind::Address,
            Self::Bool(_) => PrimitiveKind::Bool,
            Self::FixedBytes(bytes) => PrimitiveKind::FixedBytes(bytes.len() as u8),
            Self::Bytes(_) => PrimitiveKind::Bytes,
            Self::Str(_) => PrimitiveKind::String,
        }
    }

    /// Canonical ABI type name for this value.
    #[must_use]
    pub fn type_signature(&self) -> String {
        self.kind().canonical_name()
    }

    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        self.kind().is_dynamic()
    }

    /// One word for static primitives; length word plus padded content
    /// for dynamic byte strings.
    #[must_use]
    pub fn padded_byte_length(&self) -> usize {
        match self {
            Self::Bytes(bytes) => WORD_BYTES + padded_len(bytes.len()),
            Self::Str(s) => WORD_BYTES + padded_len(s.len()),
            _ => WORD_BYTES,
        }
    }
}

impl From<bool> for Primitive {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Address> for Primitive {
    fn from(value: Address) -> Self {
        Self::Address(value)
    }
}

impl From<&str> for Primitive {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Primitive {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

fn check_bits(bits: u16) -> Result<(), AbiError> {
    if bits == 0 || bits > 256 || bits % 8 != 0 {
        return Err(AbiError::InvalidTypeShape(format!(
            "integer bit width must be 8..=256 in steps of 8, got {}",
            bits
        )));
    }
    Ok(())
}

/// 256-bit two's complement of a signed value.
fn twos_complement(value: i128) -> U256 {
    if value >= 0 {
        U256::from(value as u128)
    } else {
        (!U256::from(value.unsigned_abs())).wrapping_add(U256::from(1u8))
    }
}

/// Round up to a whole number of words.
pub(crate) fn padded_len(len: usize) -> usize {
    len.div_ceil(WORD_BYTES) * WORD_BYTES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uint_width_validation() {
        assert!(Primitive::uint(32, U256::from(69u64)).is_ok());
        assert!(Primitive::uint(0, U256::from(1u64)).is_err());
        assert!(Primitive::uint(12, U256::from(1u64)).is_err());
        assert!(Primitive::uint(264, U256::from(1u64)).is_err());
    }

    #[test]
    fn test_uint_value_range() {
        assert!(Primitive::uint(8, U256::from(255u64)).is_ok());
        assert!(matches!(
            Primitive::uint(8, U256::from(300u64)),
            Err(AbiError::InvalidTypeShape(_))
        ));
        assert!(matches!(
            Primitive::uint(32, U256::from(1u64) << 32),
            Err(AbiError::InvalidTypeShape(_))
        ));
        assert!(Primitive::uint(256, U256::MAX).is_ok());
    }

    #[test]
    fn test_int_value_range() {
        assert!(Primitive::int(8, 127).is_ok());
        assert!(Primitive::int(8, -128).is_ok());
        assert!(matches!(
            Primitive::int(8, 128),
            Err(AbiError::InvalidTypeShape(_))
        ));
        assert!(matches!(
            Primitive::int(8, -129),
            Err(AbiError::InvalidTypeShape(_))
        ));
        assert!(Primitive::int(128, i128::MIN).is_ok());
        assert!(Primitive::int(256, i128::MAX).is_ok());
    }

    #[test]
    fn test_fixed_bytes_length_validation() {
        assert!(Primitive::fixed_bytes(vec![0u8; 32]).is_ok());
        assert!(Primitive::fixed_bytes(Vec::new()).is_err());
        assert!(Primitive::fixed_bytes(vec![0u8; 33]).is_err());
    }

    #[test]
    fn test_signatures() {
        assert_eq!(Primitive::uint256(U256::from(5u64)).type_signature(), "uint256");
        assert_eq!(
            Primitive::uint(32, U256::from(5u64)).expect("uint32").type_signature(),
            "uint32"
        );
        assert_eq!(Primitive::from(true).type_signature(), "bool");
        assert_eq!(
            Primitive::fixed_bytes(vec![1, 2, 3, 4])
                .expect("bytes4")
                .type_signature(),
            "bytes4"
        );
        assert_eq!(Primitive::string("hi").type_signature(), "string");
    }

    #[test]
    fn test_dynamism() {
        assert!(Primitive::bytes(vec![1]).is_dynamic());
        assert!(Primitive::string("x").is_dynamic());
        assert!(!Primitive::uint256(U256::from(1u64)).is_dynamic());
        assert!(!Primitive::from(Address::ZERO).is_dynamic());
    }

    #[test]
    fn test_padded_byte_length() {
        assert_eq!(Primitive::uint256(U256::from(1u64)).padded_byte_length(), 32);
        assert_eq!(Primitive::bytes(Vec::new()).padded_byte_length(), 32);
        assert_eq!(Primitive::bytes(vec![0u8; 4]).padded_byte_length(), 64);
        assert_eq!(Primitive::bytes(vec![0u8; 33]).padded_byte_length(), 96);
        assert_eq!(Primitive::string("dave").padded_byte_length(), 64);
    }

    #[test]
    fn test_twos_complement() {
        let minus_one = twos_complement(-1);
        assert_eq!(minus_one, U256::MAX);

        let minus_two = twos_complement(-2);
        assert_eq!(minus_two, U256::MAX - U256::from(1u8));

        assert_eq!(twos_complement(5), U256::from(5u8));
    }
}
