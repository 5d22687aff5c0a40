// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 evm-abi developers

//! Function signatures, selectors, and full call encoding.
//!
//! A function signature is `name(type1,...,typeN)` built from the
//! canonical type signatures of the input values; the selector is the
//! first four bytes of its Keccak-256 hash.

use crate::encoder::encode;
use crate::value::AbiValue;
use alloy_primitives::keccak256;

/// Four-byte function selector.
pub type Selector = [u8; 4];

/// Canonical function signature, `name(type1,...,typeN)`.
#[must_use]
pub fn function_signature(name: &str, inputs: &[AbiValue]) -> String {
    let types: Vec<String> = inputs.iter().map(AbiValue::type_signature).collect();
    format!("{}({})", name, types.join(","))
}

/// First four bytes of the Keccak-256 hash of the signature string.
#[must_use]
pub fn selector(signature: &str) -> Selector {
    let hash = keccak256(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

/// Selector followed by the encoded parameter block.
#[must_use]
pub fn encode_function_call(name: &str, inputs: &[AbiValue]) -> Vec<u8> {
    let signature = function_signature(name, inputs);
    log::debug!("encoding call {}", signature);
    let mut out = selector(&signature).to_vec();
    out.extend(encode(inputs));
    out
}
