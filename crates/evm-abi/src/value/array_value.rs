// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 evm-abi developers

//! Array values, fixed-length and dynamic-length.

use crate::error::AbiError;
use crate::kind::{ArrayKind, ParamKind};
use crate::registry::TypeRegistry;
use crate::value::{AbiValue, Composite, WORD_BYTES};

/// Homogeneous sequence value.
///
/// Fixed-length arrays (`T[k]`) carry their capacity in the type and
/// are static unless the element kind is dynamic. Dynamic-length
/// arrays (`T[]`) are always dynamic, regardless of element kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayValue {
    inner: Composite,
    element_kind: ParamKind,
    length: Option<usize>,
}

impl ArrayValue {
    /// Fixed-length array of the declared element kind; the capacity
    /// is taken from the element count.
    pub fn fixed(element_kind: ParamKind, elements: Vec<AbiValue>) -> Result<Self, AbiError> {
        if elements.is_empty() {
            return Err(AbiError::EmptyElementList);
        }
        let length = Some(elements.len());
        Self::build(element_kind, elements, length)
    }

    /// Dynamic-length array of the declared element kind.
    ///
    /// Zero-element construction must go through
    /// [`ArrayValue::empty_dynamic`] or [`ArrayValue::empty_from_name`]
    /// so the element kind is always named explicitly rather than
    /// inferred from a possibly-absent instance.
    pub fn dynamic(element_kind: ParamKind, elements: Vec<AbiValue>) -> Result<Self, AbiError> {
        if elements.is_empty() {
            return Err(AbiError::EmptyElementList);
        }
        Self::build(element_kind, elements, None)
    }

    /// Zero-length dynamic array of an explicitly given element kind.
    #[must_use]
    pub fn empty_dynamic(element_kind: ParamKind) -> Self {
        Self {
            inner: Composite::new(Vec::new()),
            element_kind,
            length: None,
        }
    }

    /// Zero-length dynamic array with the element kind resolved from a
    /// bare type-name string. Struct names must have been registered
    /// with their field shape beforehand.
    pub fn empty_from_name<R: TypeRegistry + ?Sized>(
        name: &str,
        registry: &R,
    ) -> Result<Self, AbiError> {
        Ok(Self::empty_dynamic(registry.resolve(name)?))
    }

    fn build(
        element_kind: ParamKind,
        elements: Vec<AbiValue>,
        length: Option<usize>,
    ) -> Result<Self, AbiError> {
        let inner = Composite::new(elements);
        if let Some(mismatch) = inner
            .member_kinds()
            .iter()
            .find(|kind| **kind != element_kind)
        {
            return Err(AbiError::InvalidTypeShape(format!(
                "array element of kind {} does not match declared element kind {}",
                mismatch.signature(),
                element_kind.signature()
            )));
        }
        Ok(Self {
            inner,
            element_kind,
            length,
        })
    }

    #[must_use]
    pub fn elements(&self) -> &[AbiValue] {
        self.inner.members()
    }

    #[must_use]
    pub fn element_kind(&self) -> &ParamKind {
        &self.element_kind
    }

    /// Declared capacity for fixed-length arrays, `None` for `T[]`.
    #[must_use]
    pub fn fixed_length(&self) -> Option<usize> {
        self.length
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Array kind with the declared element kind and capacity.
    #[must_use]
    pub fn kind(&self) -> ArrayKind {
        match self.length {
            Some(len) => ArrayKind::fixed(self.element_kind.clone(), len),
            None => ArrayKind::dynamic(self.element_kind.clone()),
        }
    }

    /// Element signature plus `[]` or `[k]`.
    ///
    /// A leading struct element self-describes: its full field shape
    /// cannot be recovered from a bare type name. An empty array falls
    /// back to the declared element kind, which for struct kinds
    /// carries the registered field shape.
    #[must_use]
    pub fn type_signature(&self) -> String {
        let element = match self.elements().first() {
            Some(AbiValue::Struct(first)) => first.type_signature(),
            Some(_) | None => self.element_kind.signature(),
        };
        match self.length {
            Some(len) => format!("{}[{}]", element, len),
            None => format!("{}[]", element),
        }
    }

    /// Dynamic-length arrays are always dynamic; fixed-length arrays
    /// follow the element kind.
    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        self.length.is_none() || self.element_kind.is_dynamic()
    }

    /// Member total plus one length word for dynamic-length arrays.
    #[must_use]
    pub fn padded_byte_length(&self) -> usize {
        let base = self.inner.padded_byte_length();
        if self.length.is_none() {
            base + WORD_BYTES
        } else {
            base
        }
    }
}
