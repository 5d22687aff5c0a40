// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 evm-abi developers

//! Typed, immutable ABI values.
//!
//! Values are built bottom-up from primitives into structs and arrays,
//! then queried for their canonical type signature, static/dynamic
//! classification, and padded byte length. Instances are never mutated
//! after construction, so every query is a pure function and safe to
//! run concurrently.
//!
//! # Example
//!
//! ```rust
//! use evm_abi::{AbiValue, Primitive, StructValue};
//! use alloy_primitives::U256;
//!
//! let tuple = StructValue::new(vec![
//!     AbiValue::from(Primitive::uint256(U256::from(5u64))),
//!     AbiValue::from(Primitive::from(true)),
//! ])
//! .unwrap();
//!
//! assert_eq!(tuple.type_signature(), "(uint256,bool)");
//! assert!(!tuple.is_dynamic());
//! assert_eq!(tuple.padded_byte_length(), 64);
//! ```

mod array_value;
mod composite;
mod primitive;
mod struct_value;

pub use array_value::ArrayValue;
pub use composite::Composite;
pub use primitive::Primitive;
pub use struct_value::StructValue;

use crate::kind::ParamKind;

/// Width of one encoded word slot in bytes.
pub const WORD_BYTES: usize = 32;

/// Any encodable ABI value: a primitive leaf, a struct, or an array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbiValue {
    Primitive(Primitive),
    Struct(StructValue),
    Array(ArrayValue),
}

impl AbiValue {
    /// Declared kind of this value, captured from its concrete shape.
    #[must_use]
    pub fn kind(&self) -> ParamKind {
        match self {
            Self::Primitive(p) => ParamKind::Primitive(p.kind()),
            Self::Struct(s) => ParamKind::Struct(s.kind()),
            Self::Array(a) => ParamKind::Array(a.kind()),
        }
    }

    /// Canonical ABI type descriptor for this value's type.
    #[must_use]
    pub fn type_signature(&self) -> String {
        match self {
            Self::Primitive(p) => p.type_signature(),
            Self::Struct(s) => s.type_signature(),
            Self::Array(a) => a.type_signature(),
        }
    }

    /// True if the value requires variable-length encoding.
    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        match self {
            Self::Primitive(p) => p.is_dynamic(),
            Self::Struct(s) => s.is_dynamic(),
            Self::Array(a) => a.is_dynamic(),
        }
    }

    /// Bytes this value occupies in the encoded word stream, including
    /// the length word of dynamic-length sequences.
    #[must_use]
    pub fn padded_byte_length(&self) -> usize {
        match self {
            Self::Primitive(p) => p.padded_byte_length(),
            Self::Struct(s) => s.padded_byte_length(),
            Self::Array(a) => a.padded_byte_length(),
        }
    }
}

impl From<Primitive> for AbiValue {
    fn from(value: Primitive) -> Self {
        Self::Primitive(value)
    }
}

impl From<StructValue> for AbiValue {
    fn from(value: StructValue) -> Self {
        Self::Struct(value)
    }
}

impl From<ArrayValue> for AbiValue {
    fn from(value: ArrayValue) -> Self {
        Self::Array(value)
    }
}
