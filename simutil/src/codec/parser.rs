// simutil/src/codec/parser.rs

//! Checked nibble-pair helpers shared by the hex and text codecs.

use log::debug;

use crate::constants::HEX_DIGITS;
use crate::{Error, Result};

/// Ensure `s` holds an even number of characters.
pub fn ensure_even(s: &str) -> Result<usize> {
    let len = s.chars().count();
    if len % 2 != 0 {
        debug!("rejecting hex string with odd length {len}");
        return Err(Error::odd_length(len));
    }
    Ok(len)
}

/// Value of a single hex digit found at character offset `position`.
pub fn nibble_at(position: usize, ch: char) -> Result<u8> {
    match ch.to_digit(16) {
        Some(d) => Ok(d as u8),
        None => {
            debug!("rejecting non-hex character {ch:?} at offset {position}");
            Err(Error::bad_digit(position, ch))
        }
    }
}

/// Decode every adjacent digit pair of `s` into one byte, in string order.
///
/// Upper- and lower-case digits are both accepted. Nothing is returned
/// unless the whole string is valid.
pub fn decode_pairs(s: &str) -> Result<Vec<u8>> {
    let len = ensure_even(s)?;
    let mut out = Vec::with_capacity(len / 2);
    let mut chars = s.chars().enumerate();
    while let (Some((i, hi)), Some((j, lo))) = (chars.next(), chars.next()) {
        out.push((nibble_at(i, hi)? << 4) | nibble_at(j, lo)?);
    }
    Ok(out)
}

/// Append `byte` to `out` as two lower-case hex digits.
pub fn push_hex(out: &mut String, byte: u8) {
    out.push(HEX_DIGITS[usize::from(byte >> 4)] as char);
    out.push(HEX_DIGITS[usize::from(byte & 0x0f)] as char);
}
