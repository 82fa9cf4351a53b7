//! Conversions between hex nibble strings and bytes or integer lists.
//!
//! Encoders always emit lower-case digits; decoders accept either case.
//! A hex string is expected to hold an even number of digits, each pair
//! being one byte.

use log::debug;

use super::parser::{decode_pairs, push_hex};
use crate::{Error, Result};

/// Decode a hex nibble string into bytes.
///
/// Example: `"dead"` -> `[0xde, 0xad]`
pub fn bytes_from_hex(s: &str) -> Result<Vec<u8>> {
    decode_pairs(s)
}

/// Convert a byte slice to a lowercase hex string without separators.
///
/// Example: `&[0xde, 0xad]` -> `"dead"`
pub fn hex_from_bytes(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        push_hex(&mut s, b);
    }
    s
}

/// Convert a byte slice to a lowercase hex string with a single space between
/// each byte. Meant for log and diagnostic output.
///
/// Example: `&[0xde, 0xad]` -> `"de ad"`
pub fn hex_from_bytes_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, &b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        push_hex(&mut s, b);
    }
    s
}

/// Decode a hex nibble string into a list of integers in `0..=255`.
///
/// Same values as [`bytes_from_hex`], different container.
pub fn ints_from_hex(s: &str) -> Result<Vec<i32>> {
    Ok(decode_pairs(s)?.into_iter().map(i32::from).collect())
}

/// Encode a list of integers as two lower-case hex digits each.
///
/// Values outside `0..=255` are rejected rather than wrapped.
pub fn hex_from_ints(values: &[i32]) -> Result<String> {
    let mut s = String::with_capacity(values.len() * 2);
    for (index, &value) in values.iter().enumerate() {
        push_hex(&mut s, byte_value(index, value)?);
    }
    Ok(s)
}

/// Narrow `value` to a byte, failing with `InvalidValue` when out of range.
pub(crate) fn byte_value(index: usize, value: i32) -> Result<u8> {
    u8::try_from(value).map_err(|_| {
        debug!("rejecting out-of-range value {value} at index {index}");
        Error::InvalidValue { index, value }
    })
}
