//! Orchestrates the six build stages into one call, the way
//! `examples/original_source/dawg_gen.py`'s `main` chains
//! `read_dict` -> `build_dawg` -> `compress_dawg` -> `print_dawg` ->
//! `test_dawg` in sequence, stopping at the first stage that fails.

use crate::{dag, encode, error::Error, linearize, trie, verify, word};
use std::io::Write;

/// The output of a full compile: a bit-packed, verified DAWG.
pub struct CompiledDawg {
  records: Vec<u32>,
  root_index: usize,
}

impl CompiledDawg {
  /// Index of the array entry from which traversal should start.
  pub fn root_index(&self) -> usize {
    self.root_index
  }

  pub fn records(&self) -> &[u32] {
    &self.records
  }

  /// Writes the packed array little-endian, one `u32` per record, with
  /// no header; `root_index` is not written and must be supplied out
  /// of band to readers (spec.md §5).
  pub fn write<W: Write>(&self, sink: W) -> Result<(), Error> {
    encode::write_le(&self.records, sink)
  }
}

/// Runs every stage over `input`, a whitespace-delimited, strictly
/// ascending word list, and verifies the result before returning it.
pub fn compile_wordlist(input: &str) -> Result<CompiledDawg, Error> {
  let words = word::parse_sorted_words(input)?;
  let trie = trie::build(&words)?;
  let dag = dag::minimize(&trie);
  let plan = crate::compress::compress(&dag);
  let flat = linearize::linearize(&dag, &plan);

  verify::verify(&flat, &words)?;

  let records = encode::encode(&flat)?;
  let root_index = flat.root_index();

  tracing::info!(words = words.len(), records = records.len(), "compiled wordlist");
  Ok(CompiledDawg { records, root_index })
}
