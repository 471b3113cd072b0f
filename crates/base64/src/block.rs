//! Bit packing of one four-sextet group.

/// Packs four sextets into three bytes.
///
/// Sextets are expected to be below 64; higher bits are shifted out.
///
/// # Example
///
/// ```
/// use textcodec_base64::decode_block;
///
/// // "Zm9v" -> "foo"
/// assert_eq!(decode_block([25, 38, 61, 47]), *b"foo");
/// ```
pub const fn decode_block(sextets: [u8; 4]) -> [u8; 3] {
    let [s0, s1, s2, s3] = sextets;
    [
        (s0 << 2) | (s1 >> 4),
        (s1 << 4) | (s2 >> 2),
        ((s2 << 6) & 0xc0) | s3,
    ]
}
