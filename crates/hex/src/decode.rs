//! Hexadecimal decoding.

use crate::case::HexCase;
use crate::options::{DecodeMode, DecodeOptions};
use crate::HexError;

/// Number of whole bytes in `len` hex characters.
pub const fn decoded_len(len: usize) -> usize {
    len / 2
}

/// Maps one hex character to its nibble without validation.
///
/// Bytes at or above the case's letter base lose `letter_base - 10`, all
/// others lose `'0'`. Characters outside the alphabet give meaningless but
/// deterministic values, wrapping on overflow.
///
/// The comparison is unsigned. Legacy decoders that compare a signed `char`
/// agree only for ASCII input: bytes from 0x80 up are treated here as at or
/// above the letter base, where a signed comparison sees them as negative.
///
/// # Example
///
/// ```
/// use textcodec_hex::{decode_nibble, HexCase};
///
/// assert_eq!(decode_nibble(b'7', HexCase::Lower), 7);
/// assert_eq!(decode_nibble(b'c', HexCase::Lower), 12);
/// assert_eq!(decode_nibble(b'C', HexCase::Upper), 12);
/// ```
pub const fn decode_nibble(byte: u8, case: HexCase) -> u8 {
    let base = case.letter_base();
    if byte >= base {
        byte.wrapping_sub(base - 10)
    } else {
        byte.wrapping_sub(b'0')
    }
}

/// Decodes lowercase hex text without validation.
///
/// Each character pair becomes `high * 16 + low`. An unpaired trailing
/// character is dropped.
///
/// # Example
///
/// ```
/// use textcodec_hex::decode;
///
/// assert_eq!(decode("ab"), [0xab]);
/// assert_eq!(decode("abc"), [0xab]);
/// assert_eq!(decode("6869"), b"hi");
/// ```
pub fn decode(text: impl AsRef<[u8]>) -> Vec<u8> {
    decode_lenient(text.as_ref(), HexCase::Lower)
}

/// Decodes hex text using the given options.
///
/// # Errors
///
/// Only [`DecodeMode::Strict`] produces errors; see [`HexError`].
///
/// # Example
///
/// ```
/// use textcodec_hex::{decode_with, DecodeOptions, HexError};
///
/// let strict = DecodeOptions::strict();
/// assert_eq!(decode_with("CAfe", &strict).unwrap(), [0xca, 0xfe]);
/// assert_eq!(decode_with("abc", &strict), Err(HexError::OddLength { length: 3 }));
/// ```
pub fn decode_with(
    text: impl AsRef<[u8]>,
    options: &DecodeOptions,
) -> Result<Vec<u8>, HexError> {
    let text = text.as_ref();
    log::trace!(
        "decoding {} hex bytes in {:?} mode, {:?} case",
        text.len(),
        options.mode,
        options.case
    );
    match options.mode {
        DecodeMode::Lenient => Ok(decode_lenient(text, options.case)),
        DecodeMode::Strict => decode_strict(text),
    }
}

fn decode_lenient(text: &[u8], case: HexCase) -> Vec<u8> {
    let pairs = text.chunks_exact(2);
    if !pairs.remainder().is_empty() {
        log::debug!("dropping unpaired trailing hex character");
    }

    let mut out = Vec::with_capacity(decoded_len(text.len()));
    for pair in pairs {
        let high = decode_nibble(pair[0], case);
        let low = decode_nibble(pair[1], case);
        out.push(high.wrapping_mul(16).wrapping_add(low));
    }
    out
}

fn decode_strict(text: &[u8]) -> Result<Vec<u8>, HexError> {
    if text.len() % 2 != 0 {
        return Err(HexError::OddLength { length: text.len() });
    }

    let mut out = Vec::with_capacity(decoded_len(text.len()));
    for (i, pair) in text.chunks_exact(2).enumerate() {
        let high = nibble_value(pair[0], 2 * i)?;
        let low = nibble_value(pair[1], 2 * i + 1)?;
        out.push((high << 4) | low);
    }
    Ok(out)
}

fn nibble_value(byte: u8, position: usize) -> Result<u8, HexError> {
    match byte {
        b'0'..=b'9' => Ok(byte - b'0'),
        b'a'..=b'f' => Ok(byte - b'a' + 10),
        b'A'..=b'F' => Ok(byte - b'A' + 10),
        _ => Err(HexError::InvalidCharacter { byte, position }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nibbles() {
        for (i, c) in b"0123456789abcdef".iter().enumerate() {
            assert_eq!(decode_nibble(*c, HexCase::Lower), i as u8);
        }
        for (i, c) in b"0123456789ABCDEF".iter().enumerate() {
            assert_eq!(decode_nibble(*c, HexCase::Upper), i as u8);
        }
    }

    #[test]
    fn test_nibble_outside_alphabet_wraps() {
        // 'A' sits below the lowercase letter base and is read as a digit.
        assert_eq!(decode_nibble(b'A', HexCase::Lower), 17);
        assert_eq!(decode_nibble(b' ', HexCase::Lower), 240);
        assert_eq!(decode_nibble(b'a', HexCase::Upper), 42);
    }

    #[test]
    fn test_nibble_above_ascii_uses_letter_base() {
        // 0x80 - 87 and 0xff - 87, not 0x80 - 48.
        assert_eq!(decode_nibble(0x80, HexCase::Lower), 41);
        assert_eq!(decode_nibble(0xff, HexCase::Lower), 168);
        assert_eq!(decode_nibble(0x80, HexCase::Upper), 73);
    }

    #[test]
    fn test_lenient_garbage_is_deterministic() {
        // 17 * 16 + 18 and 35 * 16 + 35, modulo 256.
        assert_eq!(decode_lenient(b"AB", HexCase::Lower), [0x22]);
        assert_eq!(decode_lenient(b"zz", HexCase::Lower), [0x53]);
    }

    #[test]
    fn test_strict_positions() {
        assert_eq!(
            decode_strict(b"00g0"),
            Err(HexError::InvalidCharacter {
                byte: b'g',
                position: 2
            })
        );
        assert_eq!(
            decode_strict(b"000 "),
            Err(HexError::InvalidCharacter {
                byte: b' ',
                position: 3
            })
        );
    }

    #[test]
    fn test_decoded_len() {
        assert_eq!(decoded_len(0), 0);
        assert_eq!(decoded_len(1), 0);
        assert_eq!(decoded_len(2), 1);
        assert_eq!(decoded_len(5), 2);
    }
}
