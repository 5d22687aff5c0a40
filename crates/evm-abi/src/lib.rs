// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 evm-abi developers

//! # evm-abi - Ethereum contract ABI value model and encoder
//!
//! A typed, immutable value model for Ethereum contract parameters,
//! with canonical type-signature generation, Keccak-256 function
//! selectors, and head/tail word-stream call encoding.
//!
//! ## Quick Start
//!
//! ```rust
//! use evm_abi::{encode_function_call, AbiValue, Primitive};
//! use alloy_primitives::{Address, U256};
//!
//! let inputs = vec![
//!     AbiValue::from(Primitive::from(Address::ZERO)),
//!     AbiValue::from(Primitive::uint256(U256::from(1_000u64))),
//! ];
//!
//! let call = encode_function_call("transfer", &inputs);
//! assert_eq!(&call[..4], &[0xa9, 0x05, 0x9c, 0xbb]);
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`AbiValue`] | Any encodable value: primitive, struct, or array |
//! | [`Primitive`] | Leaf values (`uintN`, `intN`, `address`, `bool`, `bytesN`, `bytes`, `string`) |
//! | [`StructValue`] | Fixed-arity heterogeneous tuple |
//! | [`ArrayValue`] | Homogeneous sequence, fixed- or dynamic-length |
//! | [`ParamKind`] | Tagged kind descriptor used for classification without an instance |
//! | [`StandardTypeRegistry`] | Name-to-kind table preloaded with the standard ABI types |
//!
//! ## Modules Overview
//!
//! - [`value`] - The value model (start here)
//! - [`kind`] - Kind descriptors and canonical signatures
//! - [`registry`] - Type-name resolution, including user struct names
//! - [`encoder`] - Head/tail word-stream encoding
//! - [`selector`] - Function signatures and four-byte selectors
//!
//! ## See Also
//!
//! - [Contract ABI Specification](https://docs.soliditylang.org/en/latest/abi-spec.html)

pub mod encoder;
pub mod error;
pub mod kind;
pub mod registry;
pub mod selector;
pub mod value;

pub use encoder::encode;
pub use error::AbiError;
pub use kind::{ArrayKind, ParamKind, PrimitiveKind, StructKind};
pub use registry::{StandardTypeRegistry, TypeRegistry};
pub use selector::{encode_function_call, function_signature, selector, Selector};
pub use value::{AbiValue, ArrayValue, Composite, Primitive, StructValue, WORD_BYTES};
