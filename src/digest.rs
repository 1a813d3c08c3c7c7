//! A 128-bit digest for stage 2's suffix-equivalence hashing.
//!
//! Per spec.md's design notes, a non-cryptographic 128-bit hash built
//! from two independent 64-bit mixers is sufficient (this builder's
//! adversarial-input model is out of scope). Each half is `FxHasher`
//! (`rustc-hash`, the hasher the retrieval pack's `astar-pairwise-aligner`
//! reaches for in exactly this hot, non-adversarial role) seeded with
//! a distinct salt so the two halves don't just duplicate each other.

use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

const SALT_LO: u64 = 0x9E37_79B9_7F4A_7C15;
const SALT_HI: u64 = 0xC2B2_AE3D_27D4_EB4F;

/// The transient per-node digest used only during suffix minimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Digest(u64, u64);

fn mix(salt: u64, is_end: bool, val: Option<u8>, children: &[Digest]) -> u64 {
  let mut hasher = FxHasher::default();
  salt.hash(&mut hasher);
  is_end.hash(&mut hasher);
  val.hash(&mut hasher);
  for child in children {
    child.0.hash(&mut hasher);
    child.1.hash(&mut hasher);
  }
  hasher.finish()
}

/// `hash(N) = H(is_end || val || concat(hash(c) for c in children))`
/// (spec.md §4.2), computed as two independent mixes.
pub(crate) fn of(is_end: bool, val: Option<u8>, children: &[Digest]) -> Digest {
  Digest(mix(SALT_LO, is_end, val, children), mix(SALT_HI, is_end, val, children))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn identical_inputs_hash_identically() {
    let leaf = of(true, Some(b'S'), &[]);
    assert_eq!(leaf, of(true, Some(b'S'), &[]));
  }

  #[test]
  fn is_end_changes_the_digest() {
    assert_ne!(of(true, Some(b'S'), &[]), of(false, Some(b'S'), &[]));
  }

  #[test]
  fn val_changes_the_digest() {
    assert_ne!(of(true, Some(b'S'), &[]), of(true, Some(b'T'), &[]));
  }

  #[test]
  fn child_order_changes_the_digest() {
    let a = of(false, Some(b'A'), &[]);
    let b = of(false, Some(b'B'), &[]);
    assert_ne!(of(false, None, &[a, b]), of(false, None, &[b, a]));
  }
}
