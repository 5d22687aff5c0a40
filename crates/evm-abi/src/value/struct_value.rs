// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 evm-abi developers

//! Struct (tuple) values.

use crate::error::AbiError;
use crate::kind::StructKind;
use crate::value::{AbiValue, Composite};

/// Fixed-arity heterogeneous tuple (Solidity `tuple` / struct).
///
/// The field count and per-position kinds are fixed at construction;
/// two structs are equal iff their field kinds and values match
/// pairwise in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructValue {
    inner: Composite,
    kind: StructKind,
}

impl StructValue {
    /// Build from the field values in declaration order.
    ///
    /// Fails with [`AbiError::EmptyStruct`] for an empty field list.
    pub fn new(fields: Vec<AbiValue>) -> Result<Self, AbiError> {
        let inner = Composite::new(fields);
        let kind = StructKind::new(inner.member_kinds().to_vec())?;
        Ok(Self { inner, kind })
    }

    #[must_use]
    pub fn fields(&self) -> &[AbiValue] {
        self.inner.members()
    }

    /// Struct kind carrying the field-kind list captured at
    /// construction.
    #[must_use]
    pub fn kind(&self) -> StructKind {
        self.kind.clone()
    }

    /// `"(" sig1 "," ... "," sigN ")"` with each field contributing
    /// its own nested signature (composites) or canonical primitive
    /// name.
    #[must_use]
    pub fn type_signature(&self) -> String {
        let parts: Vec<String> = self
            .fields()
            .iter()
            .map(AbiValue::type_signature)
            .collect();
        format!("({})", parts.join(","))
    }

    /// Dynamic exactly when at least one field is dynamic.
    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        self.inner.any_dynamic()
    }

    /// Sum of the fields' padded lengths.
    #[must_use]
    pub fn padded_byte_length(&self) -> usize {
        self.inner.padded_byte_length()
    }
}
