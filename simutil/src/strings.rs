// simutil/src/strings.rs

//! Plain string helpers: nibble swapping, right padding and sanitizing.
//!
//! All lengths are counted in characters, not UTF-8 bytes.

use crate::constants::{DEFAULT_PAD_CHAR, SANITIZE_KEEP};

/// Swap the two characters of every adjacent pair: `"1234"` -> `"2143"`.
///
/// BCD-coded fields such as ICCID and IMSI are stored this way. A trailing
/// unpaired character has no partner and is dropped.
pub fn swap_nibbles(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let (Some(hi), Some(lo)) = (chars.next(), chars.next()) {
        out.push(lo);
        out.push(hi);
    }
    out
}

/// Pad `s` on the right with `'f'` up to `total_len` characters.
pub fn right_pad(s: &str, total_len: usize) -> String {
    right_pad_with(s, total_len, DEFAULT_PAD_CHAR)
}

/// Pad `s` on the right with `fill` up to `total_len` characters.
///
/// If `s` is already `total_len` characters or longer it is returned
/// unchanged; nothing is truncated.
pub fn right_pad_with(s: &str, total_len: usize, fill: char) -> String {
    let missing = total_len.saturating_sub(s.chars().count());
    let mut out = String::with_capacity(s.len() + missing * fill.len_utf8());
    out.push_str(s);
    out.extend(std::iter::repeat_n(fill, missing));
    out
}

/// Replace every character that is not an ASCII digit, letter or punctuation
/// mark with a space, then trim spaces from both ends.
///
/// Line breaks, tabs, control and non-ASCII characters all become spaces.
pub fn sanitize(s: &str) -> String {
    let replaced: String = s
        .chars()
        .map(|c| if is_kept(c) { c } else { ' ' })
        .collect();
    replaced.trim_matches(' ').to_string()
}

fn is_kept(c: char) -> bool {
    SANITIZE_KEEP.get(c as usize).copied().unwrap_or(false)
}
