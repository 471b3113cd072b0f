//! Hexadecimal encoding.

use crate::case::HexCase;
use crate::HexError;

/// Number of hex characters needed for `len` bytes.
pub const fn encoded_len(len: usize) -> usize {
    len * 2
}

/// Encodes bytes as lowercase hexadecimal text.
///
/// # Example
///
/// ```
/// use textcodec_hex::encode;
///
/// assert_eq!(encode([0xab_u8]), "ab");
/// assert_eq!(encode(b"hi"), "6869");
/// assert_eq!(encode(b""), "");
/// ```
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    encode_with_case(bytes, HexCase::Lower)
}

/// Encodes bytes as uppercase hexadecimal text.
pub fn encode_upper(bytes: impl AsRef<[u8]>) -> String {
    encode_with_case(bytes, HexCase::Upper)
}

/// Encodes bytes as hexadecimal text, high nibble first, in the given case.
pub fn encode_with_case(bytes: impl AsRef<[u8]>, case: HexCase) -> String {
    let bytes = bytes.as_ref();
    let pairs = case.pairs();
    let mut out = String::with_capacity(encoded_len(bytes.len()));
    for &byte in bytes {
        let [hi, lo] = pairs[byte as usize];
        out.push(hi as char);
        out.push(lo as char);
    }
    out
}

/// Writes the hex digits of `src` into `dest` starting at `offset`.
///
/// Returns the number of bytes written, always `2 * src.len()`. Empty input
/// writes nothing and succeeds for any `offset`.
///
/// # Errors
///
/// Returns [`HexError::BufferTooSmall`] if `dest[offset..]` cannot hold the
/// output. Nothing is written in that case.
///
/// # Example
///
/// ```
/// use textcodec_hex::{encode_bin, HexCase};
///
/// let mut dest = [b'.'; 8];
/// let written = encode_bin(&[0xca, 0xfe], &mut dest, 2, HexCase::Upper).unwrap();
/// assert_eq!(written, 4);
/// assert_eq!(&dest, b"..CAFE..");
/// ```
pub fn encode_bin(
    src: &[u8],
    dest: &mut [u8],
    offset: usize,
    case: HexCase,
) -> Result<usize, HexError> {
    let needed = encoded_len(src.len());
    if needed == 0 {
        return Ok(0);
    }
    let available = dest.len().saturating_sub(offset);
    let window = offset
        .checked_add(needed)
        .and_then(|end| dest.get_mut(offset..end))
        .ok_or(HexError::BufferTooSmall { needed, available })?;

    let pairs = case.pairs();
    for (chunk, &byte) in window.chunks_exact_mut(2).zip(src) {
        chunk.copy_from_slice(&pairs[byte as usize]);
    }
    Ok(needed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(encode(b""), "");
        assert_eq!(encode_upper(b""), "");
    }

    #[test]
    fn test_single_byte() {
        assert_eq!(encode([0xab_u8]), "ab");
        assert_eq!(encode_upper([0xab_u8]), "AB");
        assert_eq!(encode([0x0f_u8]), "0f");
        assert_eq!(encode([0xf0_u8]), "f0");
    }

    #[test]
    fn test_all_bytes() {
        let data: Vec<u8> = (0..=255).collect();
        let encoded = encode(&data);
        assert_eq!(encoded.len(), encoded_len(data.len()));
        assert!(encoded.starts_with("000102"));
        assert!(encoded.ends_with("fdfeff"));
        for c in encoded.chars() {
            assert!(matches!(c, '0'..='9' | 'a'..='f'), "unexpected digit: {c}");
        }
    }

    #[test]
    fn test_bin_too_small() {
        let mut dest = [0u8; 5];
        assert_eq!(
            encode_bin(&[1, 2, 3], &mut dest, 0, HexCase::Lower),
            Err(HexError::BufferTooSmall {
                needed: 6,
                available: 5
            })
        );
        assert_eq!(dest, [0u8; 5]);
    }

    #[test]
    fn test_bin_offset_past_end() {
        let mut dest = [0u8; 4];
        assert_eq!(
            encode_bin(&[1], &mut dest, 10, HexCase::Lower),
            Err(HexError::BufferTooSmall {
                needed: 2,
                available: 0
            })
        );
        assert_eq!(encode_bin(&[], &mut dest, 10, HexCase::Lower), Ok(0));
    }
}
