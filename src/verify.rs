//! Stage 5: Verifier.
//!
//! Re-enumerates every word the flat array encodes and checks it
//! against the original input, the way
//! `examples/original_source/dawg_gen.py`'s `test_dawg` walks the
//! freshly built array back into a word list before trusting it.
//! Traversal uses an explicit stack rather than recursion, for the
//! same reason stage 2's minimizer does (spec.md §9): word length is
//! unbounded by any fixed recursion budget.

use crate::{error::Error, letter::Letter, linearize::FlatArray, word::Word};
use std::collections::HashSet;

enum Action {
  /// Visit the Node record at this offset: it is one sibling in
  /// whatever ChildList the caller is currently walking.
  Visit(usize),
  /// Pop the letter pushed by the most recent `Visit`.
  Leave,
}

/// Enumerates every word reachable from `flat`, in the array's
/// natural (ascending, depth-first) order.
fn enumerate(flat: &FlatArray) -> Vec<Word> {
  let mut words = Vec::new();
  let mut path: Vec<Letter> = Vec::new();
  let root_children = flat.record(flat.root_index()).children;
  let mut stack = vec![Action::Visit(root_children)];

  while let Some(action) = stack.pop() {
    match action {
      Action::Leave => {
        path.pop();
      }
      Action::Visit(offset) => {
        let record = flat.record(offset);
        let Some(val) = record.val else {
          // The empty-list terminator: nothing to enumerate here.
          continue;
        };
        path.push(val);
        if record.is_end {
          words.push(path.iter().copied().collect());
        }
        if !record.end_of_list {
          stack.push(Action::Visit(offset + 1));
        }
        stack.push(Action::Leave);
        stack.push(Action::Visit(record.children));
      }
    }
  }

  words
}

/// Confirms `flat` encodes exactly `expected`, neither more nor fewer
/// words, in the same order (spec.md §6).
pub fn verify(flat: &FlatArray, expected: &[Word]) -> Result<(), Error> {
  let actual = enumerate(flat);

  if actual.len() != expected.len() {
    return Err(Error::CorruptionDetected {
      detail: format!("enumerated {} words, expected {}", actual.len(), expected.len()),
    });
  }

  let actual_set: HashSet<&Word> = actual.iter().collect();
  let expected_set: HashSet<&Word> = expected.iter().collect();
  if actual_set != expected_set {
    return Err(Error::CorruptionDetected { detail: "enumerated word set does not match input".into() });
  }

  for (index, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
    if a != e {
      return Err(Error::CorruptionDetected {
        detail: format!("word {index} out of order: got `{a}`, expected `{e}`"),
      });
    }
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{compress, dag, linearize, trie};

  fn words(list: &[&str]) -> Vec<Word> {
    list.iter().map(|s| s.parse().unwrap()).collect()
  }

  fn flat_array_for(list: &[&str]) -> FlatArray {
    let words = words(list);
    let trie = trie::build(&words).unwrap();
    let dag = dag::minimize(&trie);
    let plan = compress::compress(&dag);
    linearize::linearize(&dag, &plan)
  }

  #[test]
  fn round_trips_a_small_wordlist() {
    let list = ["CAT", "CATS", "DOG", "DOGS"];
    let flat = flat_array_for(&list);
    verify(&flat, &words(&list)).unwrap();
  }

  #[test]
  fn round_trips_overlapping_sibling_lists() {
    let list = ["AB", "CD"];
    let flat = flat_array_for(&list);
    verify(&flat, &words(&list)).unwrap();
  }

  #[test]
  fn round_trips_the_empty_wordlist() {
    let flat = flat_array_for(&[]);
    verify(&flat, &[]).unwrap();
  }

  #[test]
  fn rejects_a_mismatched_expectation() {
    let flat = flat_array_for(&["CAT"]);
    let err = verify(&flat, &words(&["DOG"])).unwrap_err();
    assert!(matches!(err, Error::CorruptionDetected { .. }));
  }
}
