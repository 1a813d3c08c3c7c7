//! Stage 3: SiblingCompressor.
//!
//! Overlaps a ChildList `S` onto a host `H` when `S`'s members occupy
//! a contiguous, letter-sorted suffix of `H` (spec.md §4.3), following
//! the reference heuristic in `examples/original_source/dawg_gen.py`
//! (`inverse_dict` / `compress_dict`) but checking the suffix shape
//! explicitly rather than a bare subset test, since a subset that
//! isn't a suffix cannot actually be overlapped in the flat array.

use crate::dag::{ChildListId, Dag, NodeId};
use rustc_hash::FxHashMap;

/// One surviving compression group: a host list plus every smaller
/// list absorbed into it, `chain[0]` the host (largest), the rest
/// strictly decreasing in size.
#[derive(Debug)]
pub(crate) struct Group {
  pub(crate) chain: Vec<ChildListId>,
}

/// The result of stage 3: which ChildLists survive as hosts, and the
/// absorption chain of each.
pub struct CompressionPlan {
  pub(crate) groups: Vec<Group>,
}

/// `l` can be overlapped onto `host` iff `l`'s nodes are exactly the
/// last `l.len()` elements of `host` once both are sorted by `val`
/// (both already are, by invariant 2, since they are literal interned
/// ChildLists). This both proves `l` is a strict subset of `host` and
/// that the subset is a legal, contiguous, letter-ordered suffix.
fn is_suffix_compatible(host: &[NodeId], l: &[NodeId]) -> bool {
  l.len() < host.len() && &host[host.len() - l.len()..] == l
}

/// Overlaps strict-subset sibling lists onto larger hosts (spec.md §4.3).
pub fn compress(dag: &Dag) -> CompressionPlan {
  let lists = &dag.child_lists;
  // ChildListId(0) is the empty list; it never hosts and is never
  // absorbed (stage 4 fixes its offset to the terminator directly).
  let nonempty: Vec<ChildListId> = (1..lists.len()).map(ChildListId).collect();

  let mut inverse: FxHashMap<NodeId, Vec<ChildListId>> = FxHashMap::default();
  for &id in &nonempty {
    for &node in &lists[id.0] {
      inverse.entry(node).or_default().push(id);
    }
  }
  for bucket in inverse.values_mut() {
    bucket.sort_by_key(|&id| (lists[id.0].len(), id.0));
  }

  // `chains[id]` is `Some([id])` while `id` is still an active host;
  // it grows as lists are absorbed into it, and becomes `None` once
  // `id` itself gets absorbed into something bigger.
  let mut chains: Vec<Option<Vec<ChildListId>>> = vec![None; lists.len()];
  for &id in &nonempty {
    chains[id.0] = Some(vec![id]);
  }

  // Descending length, ascending id as a deterministic tie-break
  // (spec.md §9's open question on iteration order, resolved here).
  let mut order = nonempty.clone();
  order.sort_by_key(|&id| (std::cmp::Reverse(lists[id.0].len()), id.0));

  for l in order {
    let bucket = lists[l.0]
      .iter()
      .map(|node| &inverse[node])
      .min_by_key(|bucket| bucket.len())
      .cloned()
      .unwrap_or_default();

    for host in bucket {
      if host == l {
        continue;
      }
      let Some(chain) = &chains[host.0] else { continue };
      let top = *chain.last().unwrap();
      if is_suffix_compatible(&lists[top.0], &lists[l.0]) {
        chains[host.0].as_mut().unwrap().push(l);
        chains[l.0] = None;
        break;
      }
    }
  }

  let groups: Vec<Group> = chains.into_iter().flatten().map(|chain| Group { chain }).collect();
  tracing::debug!(
    groups = groups.len(),
    lists = nonempty.len(),
    "compressed sibling lists"
  );
  CompressionPlan { groups }
}

impl CompressionPlan {
  pub fn group_count(&self) -> usize {
    self.groups.len()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{dag, trie, word::Word};

  fn dag_for(words: &[&str]) -> Dag {
    let words: Vec<Word> = words.iter().map(|s| s.parse().unwrap()).collect();
    let trie = trie::build(&words).unwrap();
    dag::minimize(&trie)
  }

  #[test]
  fn every_nonempty_list_lands_in_exactly_one_group() {
    let dag = dag_for(&["CAT", "CATS", "DOG", "DOGS"]);
    let plan = compress(&dag);
    let total: usize = plan.groups.iter().map(|g| g.chain.len()).sum();
    assert_eq!(total, dag.child_list_count() - 1);
  }

  #[test]
  fn unrelated_sibling_lists_do_not_merge() {
    // A and B are each other's only sibling, in one ChildList of
    // length 2; nothing can overlap onto a singleton chain here.
    let dag = dag_for(&["A", "B"]);
    let plan = compress(&dag);
    assert!(plan.groups.iter().all(|g| g.chain.len() == 1));
  }
}
