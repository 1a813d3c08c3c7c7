//! Compiles a sorted word list into a minimized, compressed Directed
//! Acyclic Word Graph and bit-packs it into a flat array of `u32`
//! records.
//!
//! The pipeline is six stages, each its own module: [`word`] parses
//! and validates input, [`trie`] builds the raw prefix trie,
//! [`dag`] hash-conses it into a minimized DAG, [`compress`] overlaps
//! sibling lists, [`linearize`] lays the result into one flat array,
//! and [`encode`] packs that array into the wire format. [`pipeline`]
//! chains all six and verifies the output before returning it.

pub mod compress;
pub mod dag;
mod digest;
pub mod encode;
pub mod error;
pub mod letter;
pub mod linearize;
pub mod pipeline;
pub mod trie;
pub mod verify;
pub mod word;

pub use error::{Error, Result};
pub use pipeline::{compile_wordlist, CompiledDawg};
