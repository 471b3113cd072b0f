//! Decoder configuration.

use crate::case::HexCase;

/// How the decoder treats input that is not clean hex.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DecodeMode {
    /// Decode every character pair arithmetically and drop an unpaired
    /// trailing character. Never fails.
    #[default]
    Lenient,
    /// Accept only `0-9`, `a-f` and `A-F` in pairs.
    Strict,
}

/// Options accepted by [`decode_with`](crate::decode_with).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DecodeOptions {
    pub mode: DecodeMode,
    /// Letter case assumed by lenient decoding. Strict decoding accepts both.
    pub case: HexCase,
}

impl DecodeOptions {
    pub const fn new() -> Self {
        Self {
            mode: DecodeMode::Lenient,
            case: HexCase::Lower,
        }
    }

    pub const fn strict() -> Self {
        Self::new().with_mode(DecodeMode::Strict)
    }

    pub const fn with_mode(mut self, mode: DecodeMode) -> Self {
        self.mode = mode;
        self
    }

    pub const fn with_case(mut self, case: HexCase) -> Self {
        self.case = case;
        self
    }
}
