//! Hexadecimal encoding and decoding.
//!
//! Encoding maps every byte to two digits, high nibble first, in lowercase
//! or uppercase. Decoding is permissive by default: character pairs are
//! decoded arithmetically without validation and an unpaired trailing
//! character is dropped. [`DecodeMode::Strict`] validates instead.
//!
//! # Example
//!
//! ```
//! use textcodec_hex::{decode, encode};
//!
//! let encoded = encode(b"hello");
//! assert_eq!(encoded, "68656c6c6f");
//! assert_eq!(decode(&encoded), b"hello");
//! ```

mod case;
mod decode;
mod encode;
mod options;

pub use case::HexCase;
pub use decode::{decode, decode_nibble, decode_with, decoded_len};
pub use encode::{encode, encode_bin, encode_upper, encode_with_case, encoded_len};
pub use options::{DecodeMode, DecodeOptions};

use thiserror::Error;

/// Error type for hex operations.
///
/// Lenient decoding never produces these; they come from strict mode and
/// from destination size checks.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HexError {
    /// A byte outside `0-9`, `a-f` and `A-F`.
    #[error("invalid hex character 0x{byte:02x} at position {position}")]
    InvalidCharacter { byte: u8, position: usize },
    /// The input ends with an unpaired digit.
    #[error("hex input has odd length {length}")]
    OddLength { length: usize },
    /// The destination slice cannot hold the encoded output at the given offset.
    #[error("destination has room for {available} bytes, {needed} needed")]
    BufferTooSmall { needed: usize, available: usize },
}
