//! Base64 decoding in lenient, compat and strict modes.

use crate::block::decode_block;
use crate::options::{DecodeMode, DecodeOptions};
use crate::table::Symbol;
use crate::Base64Error;

/// Largest number of bytes `input_len` characters can decode to.
///
/// Every four accepted characters yield three bytes and a trailing group of
/// `n` characters yields `n - 1`, so `input_len * 3 / 4` is never exceeded.
pub const fn decoded_len_upper_bound(input_len: usize) -> usize {
    input_len / 4 * 3 + input_len % 4 * 3 / 4
}

/// Decodes base64 text, skipping anything outside the alphabet.
///
/// Line breaks, whitespace and `=` padding are all discarded, so padding in
/// the middle of the input does not end decoding. A trailing group of `n`
/// characters yields `n - 1` bytes. This function never fails: input made
/// only of noise decodes to an empty buffer.
///
/// # Example
///
/// ```
/// use textcodec_base64::decode;
///
/// assert_eq!(decode("aGVs\nbG8="), b"hello");
/// assert_eq!(decode("   "), b"");
/// ```
pub fn decode(input: impl AsRef<[u8]>) -> Vec<u8> {
    decode_lenient(input.as_ref())
}

/// Decodes base64 text using the given options.
///
/// # Errors
///
/// Only [`DecodeMode::Strict`] produces errors; see [`Base64Error`].
///
/// # Example
///
/// ```
/// use textcodec_base64::{decode_with, Base64Error, DecodeOptions};
///
/// let strict = DecodeOptions::strict();
/// assert_eq!(decode_with("Zm9v\r\nYmFy", &strict).unwrap(), b"foobar");
/// assert_eq!(
///     decode_with("Zm9v!", &strict),
///     Err(Base64Error::InvalidCharacter { byte: b'!', position: 4 })
/// );
/// ```
pub fn decode_with(
    input: impl AsRef<[u8]>,
    options: &DecodeOptions,
) -> Result<Vec<u8>, Base64Error> {
    let input = input.as_ref();
    log::trace!(
        "decoding {} base64 bytes in {:?} mode",
        input.len(),
        options.mode
    );
    match options.mode {
        DecodeMode::Lenient => Ok(decode_lenient(input)),
        DecodeMode::Compat => Ok(decode_compat(input)),
        DecodeMode::Strict => decode_strict(input),
    }
}

pub(crate) fn decode_lenient(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(decoded_len_upper_bound(input.len()));
    let mut group = [0u8; 4];
    let mut len = 0;
    let mut skipped = 0usize;

    for &byte in input {
        match Symbol::of(byte) {
            Symbol::Value(sextet) => {
                group[len] = sextet;
                len += 1;
                if len == 4 {
                    out.extend_from_slice(&decode_block(group));
                    len = 0;
                }
            }
            Symbol::Padding | Symbol::Noise => skipped += 1,
        }
    }

    if len > 0 {
        group[len..].fill(0);
        out.extend_from_slice(&decode_block(group)[..len - 1]);
    }

    if skipped > 0 {
        log::debug!("skipped {skipped} non-alphabet bytes while decoding base64");
    }
    out
}

/// Replays the legacy `b64decode` scan and write pattern.
///
/// A character only counts toward its group while more input follows it; the
/// final byte of the input always lands in a zeroed, uncounted slot. Each
/// emitted byte is followed by a speculative write of the next block byte at
/// the advanced cursor, reading one past the block (as zero) on a full group.
/// The speculative byte is overwritten by the next group or cut off by the
/// final truncation.
///
/// Input ends at the first NUL byte, so the character before it is the
/// uncounted final one.
fn decode_compat(input: &[u8]) -> Vec<u8> {
    let input = match input.iter().position(|&byte| byte == 0) {
        Some(nul) => &input[..nul],
        None => input,
    };
    let mut out = Vec::with_capacity(input.len());
    let mut sextets = [0u8; 4];
    let mut cursor = 0;
    let mut pos = 0;

    while pos < input.len() {
        let mut len = 0;
        let mut i = 0;
        while i < 4 && pos < input.len() {
            let mut sextet = None;
            while pos < input.len() && sextet.is_none() {
                sextet = Symbol::of(input[pos]).sextet();
                pos += 1;
            }
            match sextet {
                Some(value) if pos < input.len() => {
                    sextets[i] = value;
                    len += 1;
                }
                _ => sextets[i] = 0,
            }
            i += 1;
        }

        if len > 0 {
            let [b0, b1, b2] = decode_block(sextets);
            let block = [b0, b1, b2, 0];
            for i in 0..len - 1 {
                put(&mut out, cursor, block[i]);
                cursor += 1;
                put(&mut out, cursor, block[i + 1]);
            }
        }
    }

    out.truncate(cursor);
    out
}

fn put(out: &mut Vec<u8>, at: usize, byte: u8) {
    match out.get_mut(at) {
        Some(slot) => *slot = byte,
        None => out.push(byte),
    }
}

fn decode_strict(input: &[u8]) -> Result<Vec<u8>, Base64Error> {
    let mut out = Vec::with_capacity(decoded_len_upper_bound(input.len()));
    let mut group = [0u8; 4];
    let mut len = 0;
    let mut sextets = 0usize;
    let mut padding = 0usize;
    let mut first_pad = None;

    for (position, &byte) in input.iter().enumerate() {
        match Symbol::of(byte) {
            Symbol::Value(sextet) => {
                if padding > 0 {
                    return Err(Base64Error::InvalidPadding { position });
                }
                group[len] = sextet;
                len += 1;
                sextets += 1;
                if len == 4 {
                    out.extend_from_slice(&decode_block(group));
                    len = 0;
                }
            }
            Symbol::Padding => {
                padding += 1;
                if padding > 2 {
                    return Err(Base64Error::InvalidPadding { position });
                }
                first_pad.get_or_insert(position);
            }
            Symbol::Noise if byte.is_ascii_whitespace() => {}
            Symbol::Noise => return Err(Base64Error::InvalidCharacter { byte, position }),
        }
    }

    if len == 1 {
        return Err(Base64Error::InvalidLength { sextets });
    }
    if let Some(position) = first_pad {
        if (sextets + padding) % 4 != 0 {
            return Err(Base64Error::InvalidPadding { position });
        }
    }

    if len > 0 {
        group[len..].fill(0);
        out.extend_from_slice(&decode_block(group)[..len - 1]);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upper_bound() {
        assert_eq!(decoded_len_upper_bound(0), 0);
        assert_eq!(decoded_len_upper_bound(1), 0);
        assert_eq!(decoded_len_upper_bound(2), 1);
        assert_eq!(decoded_len_upper_bound(3), 2);
        assert_eq!(decoded_len_upper_bound(4), 3);
        assert_eq!(decoded_len_upper_bound(8), 6);
        assert_eq!(decoded_len_upper_bound(usize::MAX), usize::MAX / 4 * 3 + 2);
    }

    #[test]
    fn test_lenient_never_exceeds_capacity() {
        for input in ["", "Q", "QQ", "QQQ", "QQQQ", "QQQQQ", "Q=Q=Q=Q=Q"] {
            let out = decode_lenient(input.as_bytes());
            assert!(out.len() <= decoded_len_upper_bound(input.len()), "{input}");
        }
    }

    #[test]
    fn test_lenient_single_sextet_emits_nothing() {
        assert_eq!(decode_lenient(b"Q"), b"");
        assert_eq!(decode_lenient(b"QUJDR"), b"ABC");
    }

    #[test]
    fn test_compat_drops_final_character() {
        assert_eq!(decode_compat(b"QUJD"), b"AB");
        assert_eq!(decode_compat(b"QUJD\n"), b"ABC");
        assert_eq!(decode_compat(b"QUJD\0QUJD\n"), b"AB");
        assert_eq!(decode_compat(b"QQ=="), b"A");
    }

    #[test]
    fn test_compat_empty_and_noise() {
        assert_eq!(decode_compat(b""), b"");
        assert_eq!(decode_compat(b"\r\n  ==\t"), b"");
    }

    #[test]
    fn test_strict_trailing_whitespace() {
        assert_eq!(decode_strict(b"Zm9v\n").unwrap(), b"foo");
        assert_eq!(decode_strict(b"Zg==\r\n").unwrap(), b"f");
    }

    #[test]
    fn test_strict_unpadded_tail() {
        assert_eq!(decode_strict(b"Zg").unwrap(), b"f");
        assert_eq!(decode_strict(b"Zm8").unwrap(), b"fo");
    }
}
