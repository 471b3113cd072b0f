//! Command-line tools for base64 and hex conversion.
//!
//! Provides the core logic used by the binary entry points:
//! - `b64-decode`: base64 text → raw bytes
//! - `hex-encode`: raw bytes → hex text
//! - `hex-decode`: hex text → raw bytes

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use log::LevelFilter;
use simple_logger::SimpleLogger;
use textcodec_base64::{Base64Error, DecodeMode as Base64Mode, DecodeOptions as Base64Options};
use textcodec_hex::{DecodeOptions as HexOptions, HexCase, HexError};
use thiserror::Error;

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read standard input")]
    ReadStdin(#[source] io::Error),
    #[error(transparent)]
    Base64(#[from] Base64Error),
    #[error(transparent)]
    Hex(#[from] HexError),
    #[error("failed to initialise logging")]
    Logger(#[from] log::SetLoggerError),
}

// ── Shared plumbing ───────────────────────────────────────────────────────

/// Maps the number of `-v` flags to a log level. Warnings are always shown.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs a stderr logger without timestamps.
pub fn init_logging(verbosity: u8) -> Result<(), CliError> {
    SimpleLogger::new()
        .without_timestamps()
        .with_level(level_for(verbosity))
        .init()?;
    Ok(())
}

/// Reads all of `path`, or all of stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<Vec<u8>, CliError> {
    match path {
        Some(path) => {
            log::info!("reading {}", path.display());
            fs::read(path).map_err(|source| CliError::ReadFile {
                path: path.to_path_buf(),
                source,
            })
        }
        None => {
            log::info!("reading standard input");
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .map_err(CliError::ReadStdin)?;
            Ok(buf)
        }
    }
}

// ── b64-decode ────────────────────────────────────────────────────────────

/// Picks the base64 mode from the `--strict` and `--compat` flags.
/// Strict wins when both are given.
pub fn base64_mode(strict: bool, compat: bool) -> Base64Mode {
    match (strict, compat) {
        (true, _) => Base64Mode::Strict,
        (false, true) => Base64Mode::Compat,
        (false, false) => Base64Mode::Lenient,
    }
}

/// Decode base64 text to raw bytes.
pub fn b64_decode(input: &[u8], mode: Base64Mode) -> Result<Vec<u8>, CliError> {
    let options = Base64Options::new().with_mode(mode);
    let bytes = textcodec_base64::decode_with(input, &options)?;
    log::info!("decoded {} base64 bytes into {}", input.len(), bytes.len());
    Ok(bytes)
}

// ── hex-encode ────────────────────────────────────────────────────────────

/// Encode raw bytes as one line of hex text.
pub fn hex_encode(bytes: &[u8], case: HexCase) -> String {
    let mut line = textcodec_hex::encode_with_case(bytes, case);
    line.push('\n');
    line
}

// ── hex-decode ────────────────────────────────────────────────────────────

/// Decode hex text to raw bytes.
///
/// Leading and trailing ASCII whitespace is trimmed first, so a final
/// newline does not count as an unpaired digit.
pub fn hex_decode(text: &[u8], options: &HexOptions) -> Result<Vec<u8>, CliError> {
    let text = text.trim_ascii();
    let bytes = textcodec_hex::decode_with(text, options)?;
    log::info!("decoded {} hex characters into {} bytes", text.len(), bytes.len());
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(9), LevelFilter::Trace);
    }

    #[test]
    fn test_base64_mode() {
        assert_eq!(base64_mode(false, false), Base64Mode::Lenient);
        assert_eq!(base64_mode(false, true), Base64Mode::Compat);
        assert_eq!(base64_mode(true, false), Base64Mode::Strict);
        assert_eq!(base64_mode(true, true), Base64Mode::Strict);
    }
}
