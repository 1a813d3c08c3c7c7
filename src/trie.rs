//! Stage 1: TrieBuilder.
//!
//! Builds a prefix trie from a sorted word list by walking the word
//! and the rightmost spine of the trie in lockstep, the way the
//! teacher's `trie::Trie::word` builds a trie recursively from a
//! single `Word`, except here the whole (sorted) sequence is folded
//! into one arena, letting each new word reuse any shared prefix
//! that's already on the rightmost path.

use crate::{error::Error, letter::Letter, word::Word};

/// Index of a node in a [`Trie`]'s arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

#[derive(Debug, Clone)]
pub(crate) struct RawNode {
  pub(crate) val: Option<Letter>,
  pub(crate) is_end: bool,
  /// Sorted ascending by `val` (invariant 2): each word is appended in
  /// lockstep with the rightmost spine, so children are created in
  /// increasing order as a side effect of the input being sorted.
  pub(crate) children: Vec<NodeId>,
}

/// The output of stage 1: an unminimized, unshared trie.
#[derive(Debug)]
pub struct Trie {
  pub(crate) nodes: Vec<RawNode>,
  pub(crate) root: NodeId,
}

impl Trie {
  pub fn node_count(&self) -> usize {
    self.nodes.len()
  }
}

/// Builds a trie from `words`, which must already be strictly
/// ascending and duplicate-free (see [`crate::word::parse_sorted_words`]).
pub fn build(words: &[Word]) -> Result<Trie, Error> {
  let mut nodes = vec![RawNode { val: None, is_end: false, children: Vec::new() }];
  let root = NodeId(0);

  let mut previous: Option<&Word> = None;
  for (index, word) in words.iter().enumerate() {
    if word.is_empty() {
      return Err(Error::InvalidInput { index, reason: "word is empty".into() });
    }
    if let Some(previous) = previous {
      if previous >= word {
        return Err(Error::InvalidInput {
          index,
          reason: format!("`{previous}` does not come strictly before `{word}`"),
        });
      }
    }

    let mut current = root;
    for letter in word.letters() {
      let rightmost_child = nodes[current.0].children.last().copied();
      current = match rightmost_child {
        Some(child) if nodes[child.0].val == Some(letter) => child,
        _ => {
          let id = NodeId(nodes.len());
          nodes.push(RawNode { val: Some(letter), is_end: false, children: Vec::new() });
          nodes[current.0].children.push(id);
          id
        }
      };
    }
    nodes[current.0].is_end = true;

    previous = Some(word);
  }

  tracing::debug!(nodes = nodes.len(), words = words.len(), "built raw trie");
  Ok(Trie { nodes, root })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn words(list: &[&str]) -> Vec<Word> {
    list.iter().map(|s| s.parse().unwrap()).collect()
  }

  mod empty {
    use super::*;

    #[test]
    fn has_only_the_root() {
      let trie = build(&[]).unwrap();
      assert_eq!(trie.node_count(), 1);
      assert!(trie.nodes[trie.root.0].children.is_empty());
    }
  }

  mod single_word {
    use super::*;

    #[test]
    fn one_node_per_letter() {
      let trie = build(&words(&["CAT"])).unwrap();
      // root + C + A + T
      assert_eq!(trie.node_count(), 4);
    }

    #[test]
    fn terminal_node_is_end() {
      let trie = build(&words(&["A"])).unwrap();
      let a = trie.nodes[trie.root.0].children[0];
      assert!(trie.nodes[a.0].is_end);
    }
  }

  mod shared_prefixes {
    use super::*;

    #[test]
    fn reuses_the_rightmost_spine() {
      // A and AB share the node for `A`.
      let trie = build(&words(&["A", "AB"])).unwrap();
      // root, A, B
      assert_eq!(trie.node_count(), 3);
    }
  }

  mod ordering {
    use super::*;

    #[test]
    fn rejects_out_of_order_words() {
      let err = build(&words(&["B", "A"])).unwrap_err();
      assert!(matches!(err, Error::InvalidInput { .. }));
    }

    #[test]
    fn rejects_duplicate_words() {
      let err = build(&words(&["CAT", "CAT"])).unwrap_err();
      assert!(matches!(err, Error::InvalidInput { .. }));
    }
  }
}
