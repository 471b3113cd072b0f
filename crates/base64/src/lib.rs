//! Permissive base64 decoding.
//!
//! This crate decodes base64 text that may be wrapped, padded or littered
//! with characters outside the alphabet:
//! - Lenient decoding (default) that silently skips anything it cannot use
//! - A compat mode reproducing the legacy `b64decode` output byte for byte
//! - An opt-in strict mode that reports malformed input
//!
//! # Example
//!
//! ```
//! use textcodec_base64::{decode, decode_with, DecodeOptions};
//!
//! let decoded = decode("aGVsbG8g\nd29ybGQ=\n");
//! assert_eq!(decoded, b"hello world");
//!
//! let strict = decode_with("aGVsbG8g\nd29ybGQ=\n", &DecodeOptions::strict()).unwrap();
//! assert_eq!(strict, decoded);
//! ```

mod block;
mod constants;
mod create_decoder;
mod decode;
mod decode_bin;
mod options;
mod table;

pub use block::decode_block;
pub use constants::{ALPHABET, ALPHABET_BYTES, PAD};
pub use create_decoder::create_decoder;
pub use decode::{decode, decode_with, decoded_len_upper_bound};
pub use decode_bin::decode_bin;
pub use options::{DecodeMode, DecodeOptions};
pub use table::Symbol;

use thiserror::Error;

/// Error type for base64 operations.
///
/// Lenient and compat decoding never produce these; they come from strict
/// mode and from slice bounds checks.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Base64Error {
    /// A byte that is neither alphabet, padding nor ASCII whitespace.
    #[error("invalid base64 character 0x{byte:02x} at position {position}")]
    InvalidCharacter { byte: u8, position: usize },
    /// Padding followed by data, more than two `=`, or padding that does not
    /// complete a four-character group.
    #[error("misplaced base64 padding at position {position}")]
    InvalidPadding { position: usize },
    /// The input ends with a single sextet, which cannot form a byte.
    #[error("base64 input of {sextets} sextets ends in an incomplete byte")]
    InvalidLength { sextets: usize },
    /// The requested window exceeds the input slice.
    #[error("window of {length} bytes at offset {offset} exceeds input of {available} bytes")]
    OutOfBounds {
        offset: usize,
        length: usize,
        available: usize,
    },
}
