// simutil/src/lib.rs

//! simutil
//!
//! Pure conversions used when talking to SIM and other smart cards: hex
//! nibble strings to and from bytes, integer lists and Latin-1 text, a few
//! string helpers (nibble swap, right padding, sanitizing) and status word
//! matching against `?`/`x` wildcard patterns.
//!
//! Nothing here performs I/O or keeps state; every function is safe to call
//! from any thread.
//!
//! ```
//! use simutil::prelude::*;
//!
//! assert_eq!(bytes_from_hex("3f00").unwrap(), vec![0x3f, 0x00]);
//! assert_eq!(text_from_hex("4142ffff").unwrap(), "AB");
//! assert_eq!(swap_nibbles("1234"), "2143");
//! assert!(sw_match("9000", "90??").unwrap());
//! ```
#![warn(missing_docs)]

pub mod codec;
pub mod constants;
pub mod error;
pub mod prelude;
pub mod status;
pub mod strings;
pub mod types;

// `simutil::Error`, `simutil::StatusWord` and every conversion function are
// reachable from the root without naming the module they live in.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
