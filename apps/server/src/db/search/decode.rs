//! Search reply decoding.
//!
//! `FT.SEARCH` replies are schema-less positional arrays:
//! `[total, key1, [field, value, ...], key2, [field, value, ...], ...]`.
//! All handling of that untyped shape is confined to this module, which
//! validates it element by element and converts it into a typed
//! [`DecodedResult`]. Any mismatch fails the whole decode; there is no
//! partial-success mode.

use std::collections::HashSet;

use redis::Value;

use crate::error::{Error, Result};
use crate::models::{DecodedResult, Record};

/// Decode a raw `FT.SEARCH` reply, keeping only `requested_fields` in each
/// record (an empty set keeps everything).
///
/// Document storage keys at odd reply positions are discarded: callers
/// identify records by content, not by key.
pub fn decode(raw: &Value, requested_fields: &HashSet<String>) -> Result<DecodedResult> {
    let Value::Array(items) = raw else {
        return Err(malformed("reply is not an array"));
    };

    let count = match items.first() {
        Some(Value::Int(count)) => *count,
        Some(_) => return Err(malformed("total count is not an integer")),
        None => return Err(malformed("reply is missing the total count")),
    };

    // A well-formed reply holds the count plus (key, fields) pairs, so its
    // length is always odd; an even length means a key without fields.
    if items.len() % 2 == 0 {
        return Err(malformed("dangling document key without a field array"));
    }

    let mut records = Vec::with_capacity(items.len() / 2);
    for item in items.iter().skip(2).step_by(2) {
        records.push(decode_record(item, requested_fields)?);
    }

    Ok(DecodedResult { count, records })
}

fn decode_record(item: &Value, requested_fields: &HashSet<String>) -> Result<Record> {
    let Value::Array(pairs) = item else {
        return Err(malformed("document fields are not an array"));
    };
    if pairs.len() % 2 != 0 {
        return Err(malformed("field array has a dangling key without a value"));
    }

    let mut record = Record::with_capacity(pairs.len() / 2);
    for pair in pairs.chunks_exact(2) {
        let name = string_value(&pair[0])?;
        let value = string_value(&pair[1])?;
        if requested_fields.is_empty() || requested_fields.contains(&name) {
            record.insert(name, value);
        }
    }
    Ok(record)
}

fn string_value(value: &Value) -> Result<String> {
    match value {
        Value::BulkString(bytes) => String::from_utf8(bytes.clone())
            .map_err(|_| malformed("field element is not valid UTF-8")),
        Value::SimpleString(text) => Ok(text.clone()),
        _ => Err(malformed("field element is not a string")),
    }
}

fn malformed(detail: &str) -> Error {
    Error::MalformedResponse(detail.to_string())
}
