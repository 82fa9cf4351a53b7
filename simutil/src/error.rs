// simutil/src/error.rs

//! Error type shared by every fallible conversion.

use thiserror::Error;

/// Crate-wide error type. Every variant is a local validation failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Odd number of digits, or a character that is not a hex digit.
    #[error("invalid hex at offset {position}: {reason}")]
    InvalidHex {
        /// Character offset of the bad digit; the length for odd input.
        position: usize,
        /// What was wrong.
        reason: String,
    },

    /// An integer that does not fit in a byte.
    #[error("invalid value at index {index}: {value} is outside 0..=255")]
    InvalidValue {
        /// Position in the input list.
        index: usize,
        /// The rejected value.
        value: i32,
    },

    /// A character above U+00FF, which has no single-byte form.
    #[error("invalid character at index {index}: {ch:?} is outside 0..=255")]
    InvalidCharacter {
        /// Character offset in the input text.
        index: usize,
        /// The rejected character.
        ch: char,
    },

    /// A fixed-width input of the wrong length, counted in characters.
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Required length.
        expected: usize,
        /// Length actually given.
        actual: usize,
    },
}

impl Error {
    pub(crate) fn odd_length(len: usize) -> Self {
        Self::InvalidHex {
            position: len,
            reason: format!("odd number of digits ({len})"),
        }
    }

    pub(crate) fn bad_digit(position: usize, ch: char) -> Self {
        Self::InvalidHex {
            position,
            reason: format!("{ch:?} is not a hex digit"),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
