//! Conversions between hex nibble strings and text.
//!
//! Text here is Latin-1: each character stands for one byte, its code point
//! being the byte value.

use log::debug;

use super::hex::byte_value;
use super::parser::{decode_pairs, push_hex};
use crate::constants::FILLER_BYTE;
use crate::{Error, Result};

/// Decode a hex nibble string into text.
///
/// Filler bytes (`0xff`) are dropped, so a fixed-width record decodes to its
/// logical content: `"4142ffff"` -> `"AB"`.
pub fn text_from_hex(s: &str) -> Result<String> {
    Ok(decode_pairs(s)?
        .into_iter()
        .filter(|&b| b != FILLER_BYTE)
        .map(char::from)
        .collect())
}

/// Encode text as a hex nibble string, one byte per character.
///
/// Characters above U+00FF have no single-byte form and are rejected.
pub fn hex_from_text(s: &str) -> Result<String> {
    let mut out = String::with_capacity(s.len() * 2);
    for (index, ch) in s.chars().enumerate() {
        let b = u8::try_from(ch).map_err(|_| {
            debug!("rejecting character {ch:?} at index {index}");
            Error::InvalidCharacter { index, ch }
        })?;
        push_hex(&mut out, b);
    }
    Ok(out)
}

/// Build text from integer code points in `0..=255`.
///
/// Unlike [`text_from_hex`], `255` is kept as `'\u{ff}'`.
pub fn text_from_ints(values: &[i32]) -> Result<String> {
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| byte_value(index, value).map(char::from))
        .collect()
}
