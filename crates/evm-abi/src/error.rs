// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 evm-abi developers

//! Error taxonomy for value construction and type-name resolution.

use std::fmt;

/// Errors raised while building ABI values or resolving type names.
///
/// All variants are programmer-error-class failures surfaced at
/// construction or lookup time; none are transient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbiError {
    /// Array elements disagree with the declared element kind, or a
    /// primitive was built with an unrepresentable shape.
    InvalidTypeShape(String),
    /// A struct needs at least one field to have a type signature.
    EmptyStruct,
    /// List-based array construction was given zero elements; use the
    /// explicit empty-dynamic-array path instead.
    EmptyElementList,
    /// A type-name string has no registered kind.
    UnknownType(String),
}

impl fmt::Display for AbiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTypeShape(msg) => write!(f, "Invalid type shape: {}", msg),
            Self::EmptyStruct => write!(f, "Struct must have at least one field"),
            Self::EmptyElementList => {
                write!(f, "Array construction requires at least one element")
            }
            Self::UnknownType(name) => write!(f, "Unknown type name: {}", name),
        }
    }
}

impl std::error::Error for AbiError {}
