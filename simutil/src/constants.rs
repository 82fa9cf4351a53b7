// simutil/src/constants.rs
//! Common constants used across the crate

/// Filler byte used to pad fixed-length records on the card.
/// Decoding hex to text drops it.
pub const FILLER_BYTE: u8 = 0xFF;

/// Default fill character for [`crate::strings::right_pad`].
pub const DEFAULT_PAD_CHAR: char = 'f';

/// Number of hex digits in a status word (SW1 SW2).
pub const SW_HEX_LEN: usize = 4;

/// Single-position wildcards accepted in a status word pattern.
pub const SW_WILDCARDS: [char; 2] = ['?', 'x'];

/// Lower-case hex alphabet used by the encoders.
pub const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Lookup table of the characters `sanitize` keeps: ASCII digits, letters
/// and punctuation. Indexed by code point; anything at or above 128 is
/// never kept.
pub const SANITIZE_KEEP: [bool; 128] = build_keep_table();

const fn build_keep_table() -> [bool; 128] {
    let mut table = [false; 128];
    let mut i = 0;
    while i < 128 {
        let b = i as u8;
        table[i] = b.is_ascii_alphanumeric() || b.is_ascii_punctuation();
        i += 1;
    }
    table
}
