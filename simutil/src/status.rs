// simutil/src/status.rs

//! Status word matching against 4-character wildcard patterns.
//!
//! A pattern position holding `?` or `x` matches any digit; every other
//! position must equal the status word's digit after the status word is
//! lower-cased. Patterns are taken as written, so an upper-case literal
//! never matches.
//! `"90??"` therefore matches `9000` through `90ff`, and `"6cxx"` matches
//! any "wrong Le" response.

use log::debug;

use crate::constants::{SW_HEX_LEN, SW_WILDCARDS};
use crate::{Error, Result};

/// `true` for the single-position wildcard characters `?` and `x`.
pub fn is_wildcard(c: char) -> bool {
    SW_WILDCARDS.contains(&c)
}

/// Match a status word string such as `"9000"` against a pattern such as
/// `"90??"`.
///
/// Both inputs must be exactly four characters long. The status word's
/// digits are not validated here; use [`crate::StatusWord`] for that.
pub fn sw_match(sw: &str, pattern: &str) -> Result<bool> {
    let sw = fixed_chars(sw)?;
    let pattern = fixed_chars(pattern)?;
    Ok(masked_eq(&sw, &pattern))
}

/// Split `s` into exactly [`SW_HEX_LEN`] characters.
pub(crate) fn fixed_chars(s: &str) -> Result<[char; SW_HEX_LEN]> {
    let count = s.chars().count();
    if count != SW_HEX_LEN {
        debug!("rejecting {s:?}: {count} characters, expected {SW_HEX_LEN}");
        return Err(Error::InvalidLength {
            expected: SW_HEX_LEN,
            actual: count,
        });
    }
    Ok(char_array(s))
}

/// First [`SW_HEX_LEN`] characters of `s`, NUL-filled when shorter.
pub(crate) fn char_array(s: &str) -> [char; SW_HEX_LEN] {
    let mut out = ['\0'; SW_HEX_LEN];
    for (slot, c) in out.iter_mut().zip(s.chars()) {
        *slot = c;
    }
    out
}

/// Mask the wildcard positions of the lower-cased `sw` with the pattern's
/// own wildcard and compare the result with `pattern` exactly.
pub(crate) fn masked_eq(sw: &[char; SW_HEX_LEN], pattern: &[char; SW_HEX_LEN]) -> bool {
    sw.iter()
        .zip(pattern)
        .all(|(s, &p)| is_wildcard(p) || s.to_ascii_lowercase() == p)
}
