//! Stage 2: SuffixMinimizer.
//!
//! Hash-merges equivalent subtrees of the raw trie into a DAG, the way
//! `examples/original_source/dawg_gen.py` does (`node_dict` keyed by an
//! MD5 of `(is_end, val, children-hashes)`), but arena-indexed rather
//! than identity-keyed, and with the canonicalization table itself
//! doing the hash-consing (cf. the pack's `cranelift-codegen` egraph
//! `Node` dedup, though that rewrite is GVN over SSA values rather
//! than over trie suffixes).

use crate::{
  digest::{self, Digest},
  letter::Letter,
  trie::{NodeId as TrieNodeId, Trie},
};
use rustc_hash::FxHashMap;

/// Index into a [`Dag`]'s node arena. Stable once minimization finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

/// Index of an interned, canonical sibling list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChildListId(pub(crate) usize);

#[derive(Debug, Clone)]
pub(crate) struct DagNode {
  pub(crate) val: Option<Letter>,
  pub(crate) is_end: bool,
  pub(crate) children: ChildListId,
}

/// The minimized DAG: every distinct suffix language is exactly one
/// node, and every distinct sibling list exactly one ChildList.
///
/// `child_lists[0]` is always the empty list, by construction (it is
/// the first list interned); stage 4 fixes this as the offset of the
/// terminator.
#[derive(Debug)]
pub struct Dag {
  pub(crate) nodes: Vec<DagNode>,
  pub(crate) child_lists: Vec<Vec<NodeId>>,
  pub(crate) root_children: ChildListId,
}

impl Dag {
  pub fn node_count(&self) -> usize {
    self.nodes.len()
  }

  pub fn child_list_count(&self) -> usize {
    self.child_lists.len()
  }

  pub(crate) fn child_list(&self, id: ChildListId) -> &[NodeId] {
    &self.child_lists[id.0]
  }
}

/// Merges equivalent subtrees of `trie` (spec.md §4.2).
///
/// Implemented as an iterative post-order walk with an explicit stack,
/// not recursion, since a trie's depth is bounded only by the longest
/// word and unbounded recursion can blow the stack (spec.md §9).
pub fn minimize(trie: &Trie) -> Dag {
  let mut node_table: FxHashMap<Digest, NodeId> = FxHashMap::default();
  let mut list_table: FxHashMap<Vec<NodeId>, ChildListId> = FxHashMap::default();
  let mut nodes: Vec<DagNode> = Vec::new();
  let mut child_lists: Vec<Vec<NodeId>> = Vec::new();

  let empty_list = intern_list(&mut list_table, &mut child_lists, Vec::new());
  debug_assert_eq!(empty_list, ChildListId(0));

  // Valid only once trie node `i` has been visited in post-order.
  let mut canon: Vec<Option<NodeId>> = vec![None; trie.nodes.len()];
  let mut digests: Vec<Option<Digest>> = vec![None; trie.nodes.len()];

  let mut stack: Vec<(TrieNodeId, usize)> = vec![(trie.root, 0)];
  while let Some(&(node, cursor)) = stack.last() {
    let raw = &trie.nodes[node.0];
    if cursor < raw.children.len() {
      let child = raw.children[cursor];
      stack.last_mut().unwrap().1 += 1;
      stack.push((child, 0));
      continue;
    }

    let child_digests: Vec<Digest> =
      raw.children.iter().map(|c| digests[c.0].expect("children visited before parent")).collect();
    let digest = digest::of(raw.is_end, raw.val.map(Letter::to_ascii), &child_digests);
    digests[node.0] = Some(digest);

    let canon_id = *node_table.entry(digest).or_insert_with(|| {
      let canon_children: Vec<NodeId> =
        raw.children.iter().map(|c| canon[c.0].expect("children visited before parent")).collect();
      let list_id = intern_list(&mut list_table, &mut child_lists, canon_children);
      let id = NodeId(nodes.len());
      nodes.push(DagNode { val: raw.val, is_end: raw.is_end, children: list_id });
      id
    });
    canon[node.0] = Some(canon_id);
    stack.pop();
  }

  let root_children = nodes[canon[trie.root.0].expect("root visited").0].children;
  tracing::debug!(
    nodes = nodes.len(),
    child_lists = child_lists.len(),
    trie_nodes = trie.nodes.len(),
    "minimized suffixes"
  );
  Dag { nodes, child_lists, root_children }
}

fn intern_list(
  table: &mut FxHashMap<Vec<NodeId>, ChildListId>,
  lists: &mut Vec<Vec<NodeId>>,
  key: Vec<NodeId>,
) -> ChildListId {
  if let Some(&id) = table.get(&key) {
    return id;
  }
  let id = ChildListId(lists.len());
  lists.push(key.clone());
  table.insert(key, id);
  id
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{trie, word::Word};

  fn dag_for(words: &[&str]) -> Dag {
    let words: Vec<Word> = words.iter().map(|s| s.parse().unwrap()).collect();
    let trie = trie::build(&words).unwrap();
    minimize(&trie)
  }

  #[test]
  fn empty_list_is_reserved_at_zero() {
    let dag = dag_for(&[]);
    assert_eq!(dag.child_list_count(), 1);
    assert!(dag.child_list(ChildListId(0)).is_empty());
  }

  #[test]
  fn shares_identical_suffixes() {
    // the `S` after CAT and after DOG root identical suffix languages
    // (both are a single is_end node with no children) and must
    // collapse to the same canonical node.
    let dag = dag_for(&["CAT", "CATS", "DOG", "DOGS"]);
    let s_nodes: Vec<_> = dag.nodes.iter().filter(|n| n.val == Letter::try_from_char('S').ok()).collect();
    assert_eq!(s_nodes.len(), 1);
  }

  #[test]
  fn distinct_suffixes_stay_distinct() {
    let dag = dag_for(&["AB", "AC"]);
    // root -> A -> {B, C}; B and C are distinct leaves.
    assert!(dag.node_count() >= 3);
  }
}
