// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 evm-abi developers

//! Shared member storage for struct and array values.

use crate::kind::ParamKind;
use crate::value::AbiValue;

/// Immutable ordered member sequence, with the kind of each position
/// captured once at construction from the member's concrete shape.
///
/// Owned exclusively by its containing [`StructValue`] or
/// [`ArrayValue`]; members are never shared or mutated afterwards.
///
/// [`StructValue`]: crate::value::StructValue
/// [`ArrayValue`]: crate::value::ArrayValue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composite {
    members: Vec<AbiValue>,
    member_kinds: Vec<ParamKind>,
}

impl Composite {
    pub(crate) fn new(members: Vec<AbiValue>) -> Self {
        let member_kinds = members.iter().map(AbiValue::kind).collect();
        Self {
            members,
            member_kinds,
        }
    }

    #[must_use]
    pub fn members(&self) -> &[AbiValue] {
        &self.members
    }

    #[must_use]
    pub fn member_kinds(&self) -> &[ParamKind] {
        &self.member_kinds
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Sum of each member's padded length, assuming a fully static
    /// layout. Dynamic-aware containers add their offset/length word
    /// overhead on top.
    #[must_use]
    pub fn padded_byte_length(&self) -> usize {
        self.members.iter().map(AbiValue::padded_byte_length).sum()
    }

    pub(crate) fn any_dynamic(&self) -> bool {
        self.members.iter().any(AbiValue::is_dynamic)
    }
}
