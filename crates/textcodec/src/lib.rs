//! textcodec - binary-to-text codecs.
//!
//! Re-exports the codec crates of this workspace:
//! - [`base64`] decodes base64 text, skipping line breaks and other noise
//! - [`hex`] encodes bytes as hexadecimal text and decodes it back
//!
//! The [`cli`] module holds the logic behind the `b64-decode`,
//! `hex-encode` and `hex-decode` binaries.
//!
//! # Example
//!
//! ```
//! use textcodec::{base64, hex};
//!
//! let bytes = base64::decode("3q2+\r\n7w==");
//! assert_eq!(hex::encode(&bytes), "deadbeef");
//! assert_eq!(hex::decode("deadbeef"), bytes);
//! ```

pub mod cli;

pub use textcodec_base64 as base64;
pub use textcodec_hex as hex;
