//! Decoder configuration.

/// How the decoder treats input that is not clean base64.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DecodeMode {
    /// Skip every non-alphabet byte, padding included. Never fails.
    #[default]
    Lenient,
    /// Byte-exact output of the legacy `b64decode` routine, including its
    /// habit of ignoring an alphabet character that ends the input. A NUL
    /// byte ends the input.
    Compat,
    /// Report noise, misplaced padding and dangling sextets as errors.
    /// ASCII whitespace is still skipped.
    Strict,
}

/// Options accepted by [`decode_with`](crate::decode_with) and
/// [`create_decoder`](crate::create_decoder).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DecodeOptions {
    pub mode: DecodeMode,
}

impl DecodeOptions {
    pub const fn new() -> Self {
        Self {
            mode: DecodeMode::Lenient,
        }
    }

    pub const fn strict() -> Self {
        Self::new().with_mode(DecodeMode::Strict)
    }

    pub const fn compat() -> Self {
        Self::new().with_mode(DecodeMode::Compat)
    }

    pub const fn with_mode(mut self, mode: DecodeMode) -> Self {
        self.mode = mode;
        self
    }
}
