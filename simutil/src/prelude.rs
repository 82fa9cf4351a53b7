// simutil/src/prelude.rs
//! Everything a caller usually needs, in one import.

pub use crate::codec::{
    bytes_from_hex, hex_from_bytes, hex_from_bytes_spaced, hex_from_ints, hex_from_text,
    ints_from_hex, text_from_hex, text_from_ints,
};
pub use crate::status::{is_wildcard, sw_match};
pub use crate::strings::{right_pad, right_pad_with, sanitize, swap_nibbles};
pub use crate::{Error, Result, StatusWord, SwPattern};
