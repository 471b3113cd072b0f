//! `hex-decode` decodes hex text (file or stdin) to raw bytes (stdout).
//!
//! Usage:
//!   hex-decode [--strict] [--upper] [-v...] [FILE]

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use textcodec::cli;
use textcodec::hex::{DecodeMode, DecodeOptions, HexCase};

#[derive(Parser)]
#[clap(about, version)]
/// Decode hexadecimal text to bytes
struct Opts {
    #[clap(long)]
    /// Reject non-hex characters and odd-length input
    strict: bool,

    #[clap(short, long)]
    /// Read A-F as the letter digits (ignored with --strict)
    upper: bool,

    #[clap(short, long, action = clap::ArgAction::Count)]
    /// Log more detail to stderr (repeat for more)
    verbose: u8,

    /// Input file; standard input when omitted
    file: Option<PathBuf>,
}

impl Opts {
    fn options(&self) -> DecodeOptions {
        let mode = if self.strict {
            DecodeMode::Strict
        } else {
            DecodeMode::Lenient
        };
        let case = if self.upper {
            HexCase::Upper
        } else {
            HexCase::Lower
        };
        DecodeOptions::new().with_mode(mode).with_case(case)
    }
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();
    cli::init_logging(opts.verbose)?;

    let input = cli::read_input(opts.file.as_deref())?;
    let bytes = cli::hex_decode(&input, &opts.options())?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(&bytes)?;
    stdout.flush()?;
    Ok(())
}
