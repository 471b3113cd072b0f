/// Standard base64 alphabet.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Standard base64 alphabet as a byte array (used for const evaluation of the decode table).
pub const ALPHABET_BYTES: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Padding character.
pub const PAD: u8 = b'=';

/// Lowest byte covered by the decode table (`+`).
pub const TABLE_START: u8 = b'+';

/// Highest byte covered by the decode table (`z`).
pub const TABLE_END: u8 = b'z';

/// Number of entries in the decode table.
pub const TABLE_LEN: usize = (TABLE_END - TABLE_START) as usize + 1;
