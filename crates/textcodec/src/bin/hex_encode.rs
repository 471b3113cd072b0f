//! `hex-encode` encodes raw bytes (file or stdin) as hex text (stdout).
//!
//! Usage:
//!   hex-encode [--upper] [-v...] [FILE]

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use textcodec::cli;
use textcodec::hex::HexCase;

#[derive(Parser)]
#[clap(about, version)]
/// Encode bytes as hexadecimal text
struct Opts {
    #[clap(short, long)]
    /// Use A-F instead of a-f
    upper: bool,

    #[clap(short, long, action = clap::ArgAction::Count)]
    /// Log more detail to stderr (repeat for more)
    verbose: u8,

    /// Input file; standard input when omitted
    file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();
    cli::init_logging(opts.verbose)?;

    let case = if opts.upper {
        HexCase::Upper
    } else {
        HexCase::Lower
    };
    let input = cli::read_input(opts.file.as_deref())?;
    let line = cli::hex_encode(&input, case);

    let mut stdout = io::stdout().lock();
    stdout.write_all(line.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
