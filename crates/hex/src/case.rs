//! Letter case of the hex digits 10 through 15.

/// Which letters stand for nibbles 10 through 15.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HexCase {
    /// `a` through `f`.
    #[default]
    Lower,
    /// `A` through `F`.
    Upper,
}

static LOWER_PAIRS: [[u8; 2]; 256] = pair_table(HexCase::Lower);
static UPPER_PAIRS: [[u8; 2]; 256] = pair_table(HexCase::Upper);

/// Two-character lookup table: entry `b` holds the digits of byte `b`.
const fn pair_table(case: HexCase) -> [[u8; 2]; 256] {
    let mut table = [[0u8; 2]; 256];
    let mut i = 0;
    while i < 256 {
        table[i][0] = case.digit((i >> 4) as u8);
        table[i][1] = case.digit((i & 0x0f) as u8);
        i += 1;
    }
    table
}

impl HexCase {
    /// The character that stands for nibble 10.
    pub const fn letter_base(self) -> u8 {
        match self {
            HexCase::Lower => b'a',
            HexCase::Upper => b'A',
        }
    }

    /// The digit character for a nibble. Only the low four bits are used.
    pub const fn digit(self, nibble: u8) -> u8 {
        let nibble = nibble & 0x0f;
        if nibble > 9 {
            self.letter_base() + (nibble - 10)
        } else {
            b'0' + nibble
        }
    }

    pub(crate) fn pairs(self) -> &'static [[u8; 2]; 256] {
        match self {
            HexCase::Lower => &LOWER_PAIRS,
            HexCase::Upper => &UPPER_PAIRS,
        }
    }
}
