//! `b64-decode` decodes base64 text (file or stdin) to raw bytes (stdout).
//!
//! Usage:
//!   b64-decode [--strict | --compat] [-v...] [FILE]

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use textcodec::cli;

#[derive(Parser)]
#[clap(about, version)]
/// Decode base64 text, skipping line breaks and other noise
struct Opts {
    #[clap(long, conflicts_with = "compat")]
    /// Reject noise characters and misplaced padding
    strict: bool,

    #[clap(long)]
    /// Reproduce the legacy b64decode output byte for byte
    compat: bool,

    #[clap(short, long, action = clap::ArgAction::Count)]
    /// Log more detail to stderr (repeat for more)
    verbose: u8,

    /// Input file; standard input when omitted
    file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();
    cli::init_logging(opts.verbose)?;

    let input = cli::read_input(opts.file.as_deref())?;
    let bytes = cli::b64_decode(&input, cli::base64_mode(opts.strict, opts.compat))?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(&bytes)?;
    stdout.flush()?;
    Ok(())
}
