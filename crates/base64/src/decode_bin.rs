//! Base64 decoding from a window of a larger byte slice.

use crate::decode::decode_lenient;
use crate::Base64Error;

/// Decodes the base64 bytes in `view[offset..offset + length]`.
///
/// Decoding is lenient, as in [`decode`](crate::decode).
///
/// # Errors
///
/// Returns [`Base64Error::OutOfBounds`] if the window does not fit in `view`.
///
/// # Example
///
/// ```
/// use textcodec_base64::decode_bin;
///
/// let encoded = b"xxxxaGVsbG8="; // "xxxx" prefix, then "hello" encoded
/// assert_eq!(decode_bin(encoded, 4, 8).unwrap(), b"hello");
/// ```
pub fn decode_bin(view: &[u8], offset: usize, length: usize) -> Result<Vec<u8>, Base64Error> {
    let window = offset
        .checked_add(length)
        .and_then(|end| view.get(offset..end))
        .ok_or(Base64Error::OutOfBounds {
            offset,
            length,
            available: view.len(),
        })?;
    Ok(decode_lenient(window))
}
