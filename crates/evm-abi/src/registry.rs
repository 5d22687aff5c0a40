// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 evm-abi developers

//! Type-name resolution.
//!
//! Maps type-name strings (`uint256`, `bytes32`, `uint256[3][]`, or a
//! registered struct name) to their [`ParamKind`]. The only core path
//! that needs this is the zero-length dynamic array, which carries no
//! instance to infer an element kind from; callers and tooling also use
//! it to parse human-written type lists.

use crate::error::AbiError;
use crate::kind::{ArrayKind, ParamKind, PrimitiveKind, StructKind};
use std::collections::HashMap;

/// Registry resolving type-name strings to their [`ParamKind`].
///
/// `lookup` handles bare base names; `resolve` additionally parses
/// trailing `[]` / `[k]` array suffixes and recurses on the element
/// name. Struct names resolve only after explicit registration, since
/// a struct's field shape cannot be recovered from its name.
pub trait TypeRegistry {
    /// Look up a base type name with no array suffix.
    ///
    /// Returns `None` if the name is unknown.
    fn lookup(&self, name: &str) -> Option<ParamKind>;

    /// Resolve a full type name, including array suffixes.
    fn resolve(&self, name: &str) -> Result<ParamKind, AbiError> {
        if let Some(stripped) = name.strip_suffix(']') {
            let open = stripped
                .rfind('[')
                .ok_or_else(|| AbiError::UnknownType(name.to_string()))?;
            let element = self.resolve(&stripped[..open])?;
            let digits = &stripped[open + 1..];
            let kind = if digits.is_empty() {
                ArrayKind::dynamic(element)
            } else {
                ArrayKind::fixed(element, parse_capacity(digits, name)?)
            };
            return Ok(ParamKind::Array(kind));
        }
        self.lookup(name)
            .ok_or_else(|| AbiError::UnknownType(name.to_string()))
    }
}

/// Decimal capacity with no leading zeros, per the canonical grammar.
fn parse_capacity(digits: &str, full_name: &str) -> Result<usize, AbiError> {
    if digits.len() > 1 && digits.starts_with('0') {
        return Err(AbiError::UnknownType(full_name.to_string()));
    }
    digits
        .parse()
        .map_err(|_| AbiError::UnknownType(full_name.to_string()))
}

/// [`HashMap`]-backed [`TypeRegistry`] preloaded with the standard
/// primitive names: `uintN`/`intN` for N in 8..=256 step 8, `bytesN`
/// for N in 1..=32, `address`, `bool`, `bytes`, `string`, and the
/// `uint`/`int` aliases for the 256-bit widths.
#[derive(Debug)]
pub struct StandardTypeRegistry {
    types: HashMap<String, ParamKind>,
}

impl StandardTypeRegistry {
    #[must_use]
    pub fn new() -> Self {
        let mut types = HashMap::new();
        for bits in (8..=256).step_by(8) {
            types.insert(
                format!("uint{}", bits),
                ParamKind::Primitive(PrimitiveKind::Uint(bits as u16)),
            );
            types.insert(
                format!("int{}", bits),
                ParamKind::Primitive(PrimitiveKind::Int(bits as u16)),
            );
        }
        for len in 1..=32u8 {
            types.insert(
                format!("bytes{}", len),
                ParamKind::Primitive(PrimitiveKind::FixedBytes(len)),
            );
        }
        types.insert(
            "uint".to_string(),
            ParamKind::Primitive(PrimitiveKind::Uint(256)),
        );
        types.insert(
            "int".to_string(),
            ParamKind::Primitive(PrimitiveKind::Int(256)),
        );
        types.insert(
            "address".to_string(),
            ParamKind::Primitive(PrimitiveKind::Address),
        );
        types.insert("bool".to_string(), ParamKind::Primitive(PrimitiveKind::Bool));
        types.insert(
            "bytes".to_string(),
            ParamKind::Primitive(PrimitiveKind::Bytes),
        );
        types.insert(
            "string".to_string(),
            ParamKind::Primitive(PrimitiveKind::String),
        );
        Self { types }
    }

    /// Register a kind under a custom name.
    pub fn register(&mut self, name: impl Into<String>, kind: ParamKind) {
        let name = name.into();
        log::debug!("registered type {} as {}", name, kind.signature());
        self.types.insert(name, kind);
    }

    /// Register a struct shape under a name, making `Name` and `Name[]`
    /// resolvable without a constructed value.
    pub fn register_struct(
        &mut self,
        name: impl Into<String>,
        fields: Vec<ParamKind>,
    ) -> Result<StructKind, AbiError> {
        let kind = StructKind::new(fields)?;
        let name = name.into();
        log::debug!("registered struct {} as {}", name, kind.signature());
        self.types.insert(name, ParamKind::Struct(kind.clone()));
        Ok(kind)
    }

    /// Number of registered names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for StandardTypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry for StandardTypeRegistry {
    fn lookup(&self, name: &str) -> Option<ParamKind> {
        self.types.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_primitives() {
        let registry = StandardTypeRegistry::new();
        assert_eq!(
            registry.resolve("uint256"),
            Ok(ParamKind::Primitive(PrimitiveKind::Uint(256)))
        );
        assert_eq!(
            registry.resolve("bytes32"),
            Ok(ParamKind::Primitive(PrimitiveKind::FixedBytes(32)))
        );
        assert_eq!(
            registry.resolve("address"),
            Ok(ParamKind::Primitive(PrimitiveKind::Address))
        );
    }

    #[test]
    fn test_aliases_canonicalize() {
        let registry = StandardTypeRegistry::new();
        let kind = registry.resolve("uint").expect("uint alias");
        assert_eq!(kind.signature(), "uint256");
        let kind = registry.resolve("int").expect("int alias");
        assert_eq!(kind.signature(), "int256");
    }

    #[test]
    fn test_unknown_name() {
        let registry = StandardTypeRegistry::new();
        assert_eq!(
            registry.resolve("uint512"),
            Err(AbiError::UnknownType("uint512".to_string()))
        );
        assert_eq!(
            registry.resolve("bytes33"),
            Err(AbiError::UnknownType("bytes33".to_string()))
        );
    }

    #[test]
    fn test_array_suffixes() {
        let registry = StandardTypeRegistry::new();

        let kind = registry.resolve("uint256[]").expect("dynamic array");
        assert_eq!(kind.signature(), "uint256[]");
        assert!(kind.is_dynamic());

        let kind = registry.resolve("bool[3]").expect("fixed array");
        assert_eq!(kind.signature(), "bool[3]");
        assert!(!kind.is_dynamic());

        let kind = registry.resolve("uint256[3][]").expect("nested array");
        assert_eq!(kind.signature(), "uint256[3][]");
    }

    #[test]
    fn test_capacity_rejects_leading_zeros() {
        let registry = StandardTypeRegistry::new();
        assert_eq!(
            registry.resolve("uint256[03]"),
            Err(AbiError::UnknownType("uint256[03]".to_string()))
        );
    }

    #[test]
    fn test_struct_registration() {
        let mut registry = StandardTypeRegistry::new();
        registry
            .register_struct(
                "Order",
                vec![
                    ParamKind::Primitive(PrimitiveKind::Uint(256)),
                    ParamKind::Primitive(PrimitiveKind::Bool),
                ],
            )
            .expect("register struct");

        let kind = registry.resolve("Order").expect("struct name");
        assert_eq!(kind.signature(), "(uint256,bool)");

        let kind = registry.resolve("Order[]").expect("struct array");
        assert_eq!(kind.signature(), "(uint256,bool)[]");
    }

    #[test]
    fn test_empty_struct_registration_rejected() {
        let mut registry = StandardTypeRegistry::new();
        assert_eq!(
            registry.register_struct("Empty", Vec::new()),
            Err(AbiError::EmptyStruct)
        );
    }
}
