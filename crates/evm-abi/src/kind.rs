// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 evm-abi developers

//! Type kinds for ABI values.
//!
//! A [`ParamKind`] describes the declared type of one value position:
//! a primitive leaf, a struct (Solidity tuple), or an array. Struct
//! kinds carry their full field-kind list, so a struct signature is
//! derivable from the kind alone, without a constructed value.

use crate::error::AbiError;
use std::sync::Arc;

/// Primitive ABI type kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// Unsigned integer; bit width 8..=256 in steps of 8.
    Uint(u16),
    /// Signed two's-complement integer; bit width 8..=256 in steps of 8.
    Int(u16),
    /// 20-byte account address.
    Address,
    Bool,
    /// Fixed-size byte string of 1..=32 bytes (`bytesN`).
    FixedBytes(u8),
    /// Variable-length byte string.
    Bytes,
    /// Variable-length UTF-8 string.
    String,
}

impl PrimitiveKind {
    /// Canonical ABI name, e.g. `uint256` or `bytes32`.
    #[must_use]
    pub fn canonical_name(&self) -> String {
        match self {
            Self::Uint(bits) => format!("uint{}", bits),
            Self::Int(bits) => format!("int{}", bits),
            Self::Address => "address".to_string(),
            Self::Bool => "bool".to_string(),
            Self::FixedBytes(len) => format!("bytes{}", len),
            Self::Bytes => "bytes".to_string(),
            Self::String => "string".to_string(),
        }
    }

    /// True if values of this kind require variable-length encoding.
    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        matches!(self, Self::Bytes | Self::String)
    }
}

/// Declared kind of a value position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamKind {
    Primitive(PrimitiveKind),
    Struct(StructKind),
    Array(ArrayKind),
}

impl ParamKind {
    /// Canonical ABI type signature of this kind.
    #[must_use]
    pub fn signature(&self) -> String {
        match self {
            Self::Primitive(p) => p.canonical_name(),
            Self::Struct(s) => s.signature(),
            Self::Array(a) => a.signature(),
        }
    }

    /// True if values of this kind require variable-length encoding.
    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        match self {
            Self::Primitive(p) => p.is_dynamic(),
            Self::Struct(s) => s.is_dynamic(),
            Self::Array(a) => a.is_dynamic(),
        }
    }

    /// True for struct and array kinds, which emit their own nested
    /// sub-signature instead of a flat primitive name.
    #[must_use]
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Struct(_) | Self::Array(_))
    }

    #[must_use]
    pub fn is_struct(&self) -> bool {
        matches!(self, Self::Struct(_))
    }

    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }
}

impl From<PrimitiveKind> for ParamKind {
    fn from(kind: PrimitiveKind) -> Self {
        Self::Primitive(kind)
    }
}

impl From<StructKind> for ParamKind {
    fn from(kind: StructKind) -> Self {
        Self::Struct(kind)
    }
}

impl From<ArrayKind> for ParamKind {
    fn from(kind: ArrayKind) -> Self {
        Self::Array(kind)
    }
}

/// Field-kind list of a struct type, shareable between positions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StructKind {
    fields: Arc<Vec<ParamKind>>,
}

impl StructKind {
    /// Build from the field kinds in declaration order.
    pub fn new(fields: Vec<ParamKind>) -> Result<Self, AbiError> {
        if fields.is_empty() {
            return Err(AbiError::EmptyStruct);
        }
        Ok(Self {
            fields: Arc::new(fields),
        })
    }

    #[must_use]
    pub fn fields(&self) -> &[ParamKind] {
        &self.fields
    }

    /// Parenthesized tuple signature, e.g. `(uint256,bool)`.
    #[must_use]
    pub fn signature(&self) -> String {
        let parts: Vec<String> = self.fields.iter().map(ParamKind::signature).collect();
        format!("({})", parts.join(","))
    }

    /// Dynamic exactly when at least one field kind is dynamic.
    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        self.fields.iter().any(ParamKind::is_dynamic)
    }
}

/// Element kind plus length of an array type. `length == None` is `T[]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArrayKind {
    element: Arc<ParamKind>,
    length: Option<usize>,
}

impl ArrayKind {
    /// Fixed-length array kind (`T[k]`).
    #[must_use]
    pub fn fixed(element: ParamKind, length: usize) -> Self {
        Self {
            element: Arc::new(element),
            length: Some(length),
        }
    }

    /// Dynamic-length array kind (`T[]`).
    #[must_use]
    pub fn dynamic(element: ParamKind) -> Self {
        Self {
            element: Arc::new(element),
            length: None,
        }
    }

    #[must_use]
    pub fn element(&self) -> &ParamKind {
        &self.element
    }

    /// Declared capacity for fixed-length arrays, `None` for `T[]`.
    #[must_use]
    pub fn length(&self) -> Option<usize> {
        self.length
    }

    /// Element signature plus `[]` or `[k]` suffix.
    #[must_use]
    pub fn signature(&self) -> String {
        match self.length {
            Some(len) => format!("{}[{}]", self.element.signature(), len),
            None => format!("{}[]", self.element.signature()),
        }
    }

    /// Dynamic-length arrays are always dynamic; fixed-length arrays
    /// are dynamic iff the element kind is.
    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        self.length.is_none() || self.element.is_dynamic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_names() {
        assert_eq!(PrimitiveKind::Uint(256).canonical_name(), "uint256");
        assert_eq!(PrimitiveKind::Int(64).canonical_name(), "int64");
        assert_eq!(PrimitiveKind::FixedBytes(32).canonical_name(), "bytes32");
        assert_eq!(PrimitiveKind::Address.canonical_name(), "address");
        assert_eq!(PrimitiveKind::String.canonical_name(), "string");
    }

    #[test]
    fn test_primitive_dynamism() {
        assert!(PrimitiveKind::Bytes.is_dynamic());
        assert!(PrimitiveKind::String.is_dynamic());
        assert!(!PrimitiveKind::Uint(256).is_dynamic());
        assert!(!PrimitiveKind::FixedBytes(32).is_dynamic());
    }

    #[test]
    fn test_struct_kind_signature() {
        let kind = StructKind::new(vec![
            ParamKind::Primitive(PrimitiveKind::Uint(256)),
            ParamKind::Primitive(PrimitiveKind::Bool),
        ])
        .expect("struct kind");
        assert_eq!(kind.signature(), "(uint256,bool)");
        assert!(!kind.is_dynamic());
    }

    #[test]
    fn test_empty_struct_kind_rejected() {
        assert_eq!(StructKind::new(Vec::new()), Err(AbiError::EmptyStruct));
    }

    #[test]
    fn test_nested_array_signature() {
        let inner = ArrayKind::fixed(ParamKind::Primitive(PrimitiveKind::Uint(256)), 3);
        let outer = ArrayKind::dynamic(ParamKind::Array(inner));
        assert_eq!(outer.signature(), "uint256[3][]");
        assert!(outer.is_dynamic());
    }

    #[test]
    fn test_fixed_array_dynamism_follows_element() {
        let static_arr = ArrayKind::fixed(ParamKind::Primitive(PrimitiveKind::Uint(256)), 3);
        assert!(!static_arr.is_dynamic());

        let dynamic_arr = ArrayKind::fixed(ParamKind::Primitive(PrimitiveKind::String), 3);
        assert!(dynamic_arr.is_dynamic());
    }

    #[test]
    fn test_struct_kind_transitive_dynamism() {
        let inner = StructKind::new(vec![ParamKind::Primitive(PrimitiveKind::Bytes)])
            .expect("struct kind");
        let outer = StructKind::new(vec![
            ParamKind::Primitive(PrimitiveKind::Uint(8)),
            ParamKind::Struct(inner),
        ])
        .expect("struct kind");
        assert!(outer.is_dynamic());
        assert_eq!(outer.signature(), "(uint8,(bytes))");
    }
}
