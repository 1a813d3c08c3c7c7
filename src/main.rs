//! `dawg-gen`: compiles a sorted word list file into a bit-packed DAWG.
//!
//! Mirrors the CLI shape of `examples/original_source/dawg_gen.py`
//! (`dawg_gen.py wordlist.txt dawg.bin`) but as a `clap`-derived binary,
//! the way the pack's `astar-pairwise-aligner` builds its
//! `src/bin/generate.rs` front end.

use clap::Parser;
use dawg::Error;
use std::{fs, path::PathBuf, process::ExitCode};

#[derive(Parser)]
#[command(author, version, about = "Compile a sorted word list into a bit-packed DAWG")]
struct Cli {
  /// Whitespace-delimited, strictly ascending A-Z word list.
  wordlist: PathBuf,

  /// Where to write the packed, little-endian u32 array.
  output: PathBuf,
}

fn run(cli: Cli) -> Result<(), Error> {
  let input = fs::read_to_string(&cli.wordlist)?;
  let compiled = dawg::compile_wordlist(&input)?;

  tracing::info!(root_index = compiled.root_index(), records = compiled.records().len(), "compiled");

  let file = fs::File::create(&cli.output)?;
  compiled.write(file)?;
  Ok(())
}

fn main() -> ExitCode {
  tracing_subscriber::fmt::init();
  let cli = Cli::parse();

  match run(cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      tracing::error!(%err, "dawg-gen failed");
      ExitCode::FAILURE
    }
  }
}
