// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 evm-abi developers

//! Head/tail word-stream encoding.
//!
//! Static values are encoded in place. Each dynamic value occupies one
//! offset word in the head region, with its content appended to a tail
//! region after the head; offsets are relative to the start of the
//! enclosing parameter block, so the same routine encodes top-level
//! parameter lists, tuple members, and array elements.

use crate::value::{AbiValue, Primitive, WORD_BYTES};
use alloy_primitives::U256;

/// Encode a parameter list into the ABI word stream.
#[must_use]
pub fn encode(values: &[AbiValue]) -> Vec<u8> {
    let head_len: usize = values.iter().map(head_slot_length).sum();
    let mut head = Vec::with_capacity(head_len);
    let mut tail = Vec::new();
    for value in values {
        if value.is_dynamic() {
            push_word(&mut head, head_len + tail.len());
            tail.extend(encode_value(value));
        } else {
            head.extend(encode_value(value));
        }
    }
    head.extend(tail);
    head
}

/// Bytes a value occupies in the head region: one offset word when
/// dynamic, its full padded length otherwise.
fn head_slot_length(value: &AbiValue) -> usize {
    if value.is_dynamic() {
        WORD_BYTES
    } else {
        value.padded_byte_length()
    }
}

fn encode_value(value: &AbiValue) -> Vec<u8> {
    match value {
        AbiValue::Primitive(p) => encode_primitive(p),
        AbiValue::Struct(s) => encode(s.fields()),
        AbiValue::Array(a) => {
            let mut out = Vec::new();
            if a.fixed_length().is_none() {
                push_word(&mut out, a.len());
            }
            out.extend(encode(a.elements()));
            out
        }
    }
}

fn encode_primitive(value: &Primitive) -> Vec<u8> {
    match value {
        Primitive::Uint { value, .. } | Primitive::Int { value, .. } => {
            value.to_be_bytes::<WORD_BYTES>().to_vec()
        }
        Primitive::Address(address) => {
            let mut word = vec![0u8; WORD_BYTES];
            word[12..].copy_from_slice(address.as_slice());
            word
        }
        Primitive::Bool(v) => {
            let mut word = vec![0u8; WORD_BYTES];
            word[WORD_BYTES - 1] = u8::from(*v);
            word
        }
        Primitive::FixedBytes(bytes) => right_padded(bytes),
        Primitive::Bytes(bytes) => length_prefixed(bytes),
        Primitive::Str(s) => length_prefixed(s.as_bytes()),
    }
}

/// Length word followed by the right-padded content.
fn length_prefixed(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(WORD_BYTES + bytes.len().next_multiple_of(WORD_BYTES));
    push_word(&mut out, bytes.len());
    out.extend(right_padded(bytes));
    out
}

fn right_padded(bytes: &[u8]) -> Vec<u8> {
    let mut out = bytes.to_vec();
    out.resize(bytes.len().next_multiple_of(WORD_BYTES), 0);
    out
}

fn push_word(buffer: &mut Vec<u8>, value: usize) {
    buffer.extend(U256::from(value).to_be_bytes::<WORD_BYTES>());
}
