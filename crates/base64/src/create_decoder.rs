//! Factory function for creating configured base64 decoders.

use crate::decode::decode_with;
use crate::options::DecodeOptions;
use crate::Base64Error;

/// Creates a base64 decoder function bound to `options`.
///
/// # Returns
///
/// A function that decodes a base64 byte slice to a `Vec<u8>`.
///
/// # Example
///
/// ```
/// use textcodec_base64::{create_decoder, DecodeOptions};
///
/// let decode = create_decoder(DecodeOptions::compat());
/// assert_eq!(decode(b"aGVsbG8=").unwrap(), b"hello");
/// assert_eq!(decode(b"QUJD").unwrap(), b"AB");
/// ```
pub fn create_decoder(
    options: DecodeOptions,
) -> impl Fn(&[u8]) -> Result<Vec<u8>, Base64Error> + Clone + Send + Sync {
    move |encoded: &[u8]| decode_with(encoded, &options)
}
