//! Byte-to-sextet translation table.

use crate::constants::{ALPHABET_BYTES, PAD, TABLE_END, TABLE_LEN, TABLE_START};

/// What a single input byte means to the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// An alphabet character carrying a 6-bit value.
    Value(u8),
    /// The `=` padding marker.
    Padding,
    /// Anything outside the alphabet: whitespace, line breaks, punctuation.
    Noise,
}

/// Decode table covering `+` (43) through `z` (122), indexed by `byte - 43`.
static TABLE: [Symbol; TABLE_LEN] = {
    let mut table = [Symbol::Noise; TABLE_LEN];
    let mut i = 0;
    while i < 64 {
        table[(ALPHABET_BYTES[i] - TABLE_START) as usize] = Symbol::Value(i as u8);
        i += 1;
    }
    table[(PAD - TABLE_START) as usize] = Symbol::Padding;
    table
};

impl Symbol {
    /// Looks up the meaning of `byte`.
    ///
    /// # Example
    ///
    /// ```
    /// use textcodec_base64::Symbol;
    ///
    /// assert_eq!(Symbol::of(b'A'), Symbol::Value(0));
    /// assert_eq!(Symbol::of(b'/'), Symbol::Value(63));
    /// assert_eq!(Symbol::of(b'='), Symbol::Padding);
    /// assert_eq!(Symbol::of(b'\n'), Symbol::Noise);
    /// ```
    pub const fn of(byte: u8) -> Symbol {
        if byte < TABLE_START || byte > TABLE_END {
            return Symbol::Noise;
        }
        TABLE[(byte - TABLE_START) as usize]
    }

    /// The sextet carried by an alphabet character, if any.
    pub const fn sextet(self) -> Option<u8> {
        match self {
            Symbol::Value(sextet) => Some(sextet),
            Symbol::Padding | Symbol::Noise => None,
        }
    }
}
