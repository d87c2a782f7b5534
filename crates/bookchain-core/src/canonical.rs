//! Canonical CBOR encoding for deterministic hashing.
//!
//! This module implements RFC 8949 Core Deterministic Encoding:
//! - Map keys sorted by encoded byte comparison
//! - Integers use smallest valid encoding
//! - Definite lengths only
//! - No floats (timestamps are i64 milliseconds)
//!
//! Every field that feeds a block digest goes through here, so the same block
//! produces identical bytes (and thus identical hashes) on every platform.
//! Map keys are text; their order comes from the encoded bytes, never from the
//! order fields are declared in a struct.

use ciborium::value::Value;

use crate::checkout::CheckoutRecord;
use crate::error::CoreError;
use crate::types::BlockHash;

/// Map key names.
mod keys {
    pub const BOOK_ID: &str = "book_id";
    pub const USER: &str = "user";
    pub const CHECKOUT_DATE: &str = "checkout_date";
    pub const IS_GENESIS: &str = "is_genesis";

    pub const POSITION: &str = "position";
    pub const TIMESTAMP: &str = "timestamp";
    pub const PAYLOAD: &str = "payload";
    pub const PREV_HASH: &str = "prev_hash";
}

/// Encode a checkout record to canonical CBOR bytes.
///
/// Format: `{"book_id": text, "checkout_date": text, "is_genesis": bool, "user": text}`
pub fn canonical_payload_bytes(record: &CheckoutRecord) -> Result<Vec<u8>, CoreError> {
    let value = payload_to_cbor_value(record);
    encode_cbor_value_canonical(&value)
}

/// Encode the hash preimage of a block.
///
/// Format: `{"payload": bytes, "position": uint, "prev_hash": bytes, "timestamp": int}`
/// where `payload` is the output of [`canonical_payload_bytes`].
pub fn canonical_block_bytes(
    position: u64,
    timestamp: i64,
    payload: &[u8],
    prev_hash: &BlockHash,
) -> Result<Vec<u8>, CoreError> {
    let entries = vec![
        (
            Value::Text(keys::POSITION.to_string()),
            Value::Integer(position.into()),
        ),
        (
            Value::Text(keys::TIMESTAMP.to_string()),
            Value::Integer(timestamp.into()),
        ),
        (
            Value::Text(keys::PAYLOAD.to_string()),
            Value::Bytes(payload.to_vec()),
        ),
        (
            Value::Text(keys::PREV_HASH.to_string()),
            Value::Bytes(prev_hash.0.to_vec()),
        ),
    ];

    encode_cbor_value_canonical(&Value::Map(entries))
}

/// Convert a record to a CBOR Value (map with text keys).
fn payload_to_cbor_value(record: &CheckoutRecord) -> Value {
    Value::Map(vec![
        (
            Value::Text(keys::BOOK_ID.to_string()),
            Value::Text(record.book_id.clone()),
        ),
        (
            Value::Text(keys::USER.to_string()),
            Value::Text(record.user.clone()),
        ),
        (
            Value::Text(keys::CHECKOUT_DATE.to_string()),
            Value::Text(record.checkout_date.clone()),
        ),
        (
            Value::Text(keys::IS_GENESIS.to_string()),
            Value::Bool(record.is_genesis),
        ),
    ])
}

/// Encode a CBOR Value to canonical bytes.
fn encode_cbor_value_canonical(value: &Value) -> Result<Vec<u8>, CoreError> {
    let mut buf = Vec::new();
    encode_value_to(&mut buf, value)?;
    Ok(buf)
}

/// Recursively encode a CBOR value.
fn encode_value_to(buf: &mut Vec<u8>, value: &Value) -> Result<(), CoreError> {
    match value {
        Value::Integer(i) => encode_integer(buf, *i),
        Value::Bytes(b) => encode_bytes(buf, b),
        Value::Text(s) => encode_text(buf, s),
        Value::Array(arr) => encode_array(buf, arr)?,
        Value::Map(entries) => encode_map_canonical(buf, entries)?,
        Value::Bool(b) => buf.push(if *b { 0xf5 } else { 0xf4 }),
        Value::Null => buf.push(0xf6),
        Value::Float(_) => {
            return Err(CoreError::EncodingError(
                "floats not supported in canonical encoding".into(),
            ))
        }
        _ => {
            return Err(CoreError::EncodingError(
                "unsupported CBOR value type".into(),
            ))
        }
    }
    Ok(())
}

/// Encode a CBOR integer (major types 0 and 1).
fn encode_integer(buf: &mut Vec<u8>, i: ciborium::value::Integer) {
    let n: i128 = i.into();

    if n >= 0 {
        encode_uint(buf, 0, n as u64);
    } else {
        // CBOR encodes -1 as 0, -2 as 1, etc.
        let abs = (-1 - n) as u64;
        encode_uint(buf, 1, abs);
    }
}

/// Encode an unsigned integer with the given major type.
fn encode_uint(buf: &mut Vec<u8>, major: u8, n: u64) {
    let mt = major << 5;
    if n < 24 {
        buf.push(mt | (n as u8));
    } else if n <= 0xff {
        buf.push(mt | 24);
        buf.push(n as u8);
    } else if n <= 0xffff {
        buf.push(mt | 25);
        buf.extend_from_slice(&(n as u16).to_be_bytes());
    } else if n <= 0xffff_ffff {
        buf.push(mt | 26);
        buf.extend_from_slice(&(n as u32).to_be_bytes());
    } else {
        buf.push(mt | 27);
        buf.extend_from_slice(&n.to_be_bytes());
    }
}

/// Encode a byte string (major type 2).
fn encode_bytes(buf: &mut Vec<u8>, bytes: &[u8]) {
    encode_uint(buf, 2, bytes.len() as u64);
    buf.extend_from_slice(bytes);
}

/// Encode a text string (major type 3).
fn encode_text(buf: &mut Vec<u8>, s: &str) {
    encode_uint(buf, 3, s.len() as u64);
    buf.extend_from_slice(s.as_bytes());
}

/// Encode an array (major type 4).
fn encode_array(buf: &mut Vec<u8>, arr: &[Value]) -> Result<(), CoreError> {
    encode_uint(buf, 4, arr.len() as u64);
    for item in arr {
        encode_value_to(buf, item)?;
    }
    Ok(())
}

/// Encode a map canonically (major type 5).
///
/// Keys are sorted by their encoded byte comparison.
fn encode_map_canonical(buf: &mut Vec<u8>, entries: &[(Value, Value)]) -> Result<(), CoreError> {
    let mut key_value_pairs = Vec::with_capacity(entries.len());
    for (k, v) in entries {
        let mut key_buf = Vec::new();
        encode_value_to(&mut key_buf, k)?;
        key_value_pairs.push((key_buf, v));
    }

    key_value_pairs.sort_by(|a, b| a.0.cmp(&b.0));

    encode_uint(buf, 5, key_value_pairs.len() as u64);

    for (key_bytes, value) in key_value_pairs {
        buf.extend_from_slice(&key_bytes);
        encode_value_to(buf, value)?;
    }
    Ok(())
}
