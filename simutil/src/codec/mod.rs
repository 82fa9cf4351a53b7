// simutil/src/codec/mod.rs
//! Conversions between hex nibble strings, bytes, integer lists and text.

pub mod hex;
pub mod parser;
pub mod text;

pub use hex::*;
pub use text::*;
