// simutil/src/types.rs

//! Typed status words and status word patterns.

use crate::codec::hex::hex_from_bytes;
use crate::codec::parser::decode_pairs;
use crate::status::{char_array, fixed_chars, is_wildcard, masked_eq};
use crate::{Error, Result};
use derive_more::Display;
use std::str::FromStr;

/// StatusWord - Newtype Pattern (SW1 SW2, big-endian)
///
/// Displays as four lower-case hex digits.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display(fmt = "{:04x}", _0)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct StatusWord(u16);

impl StatusWord {
    /// Normal processing, no further qualification.
    pub const OK: Self = Self(0x9000);

    /// Build from SW1 and SW2.
    pub const fn new(sw1: u8, sw2: u8) -> Self {
        Self(u16::from_be_bytes([sw1, sw2]))
    }

    /// Build from `[sw1, sw2]`.
    pub const fn from_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_be_bytes(bytes))
    }

    /// Build from the big-endian `0xSW1SW2` value.
    pub const fn from_u16(value: u16) -> Self {
        Self(value)
    }

    /// The status word as `0xSW1SW2`.
    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// First status byte.
    pub fn sw1(&self) -> u8 {
        self.to_bytes()[0]
    }

    /// Second status byte.
    pub fn sw2(&self) -> u8 {
        self.to_bytes()[1]
    }

    /// `[sw1, sw2]`.
    pub fn to_bytes(&self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    /// Four lower-case hex digits, e.g. `"6a82"`.
    pub fn to_hex(&self) -> String {
        hex_from_bytes(&self.to_bytes())
    }

    /// `true` if this status word satisfies `pattern`.
    pub fn matches(&self, pattern: &SwPattern) -> bool {
        pattern.is_match(self)
    }
}

impl FromStr for StatusWord {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        fixed_chars(s)?;
        let bytes = decode_pairs(s)?;
        Ok(Self::from_bytes([bytes[0], bytes[1]]))
    }
}

impl TryFrom<&str> for StatusWord {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl TryFrom<String> for StatusWord {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<StatusWord> for String {
    fn from(sw: StatusWord) -> Self {
        sw.to_hex()
    }
}

impl From<[u8; 2]> for StatusWord {
    fn from(bytes: [u8; 2]) -> Self {
        Self::from_bytes(bytes)
    }
}

/// Status word pattern: four characters, each a hex digit or one of the
/// wildcards `?` / `x`. Kept exactly as written.
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash)]
#[display(fmt = "{}", _0)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct SwPattern(String);

impl SwPattern {
    /// Validate `pattern`: exactly four characters, each a hex digit, `?`
    /// or `x`. Upper-case digits are accepted but, as literals, never match.
    pub fn new(pattern: &str) -> Result<Self> {
        let chars = fixed_chars(pattern)?;
        if let Some(position) = chars
            .iter()
            .position(|&c| !(c.is_ascii_hexdigit() || is_wildcard(c)))
        {
            return Err(Error::InvalidHex {
                position,
                reason: format!(
                    "{:?} is neither a hex digit nor a wildcard",
                    chars[position]
                ),
            });
        }
        Ok(Self(pattern.to_string()))
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` if `sw` satisfies this pattern.
    pub fn is_match(&self, sw: &StatusWord) -> bool {
        masked_eq(&char_array(&sw.to_hex()), &char_array(&self.0))
    }
}

impl FromStr for SwPattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for SwPattern {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for SwPattern {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::new(&s)
    }
}

impl From<SwPattern> for String {
    fn from(p: SwPattern) -> Self {
        p.0
    }
}
