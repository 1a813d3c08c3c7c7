//! Stage 4: Linearizer.
//!
//! Lays each compression group's host list out as one contiguous block
//! of Node records and lets every absorbed list in the group's chain
//! reuse the host's trailing slots, the way
//! `examples/original_source/dawg_gen.py`'s `print_dawg` walks
//! `compress_dict` to assign `dat_pos`. Two passes: first every
//! ChildList is assigned its final offset, then records are written,
//! since a node's own record can reference a children block laid out
//! later in the array.

use crate::{
  compress::CompressionPlan,
  dag::{ChildListId, Dag},
  letter::Letter,
};
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy)]
pub(crate) struct Record {
  pub(crate) val: Option<Letter>,
  pub(crate) is_end: bool,
  pub(crate) end_of_list: bool,
  pub(crate) children: usize,
}

/// The linearized array: one record per distinct Node slot, plus the
/// reserved terminator at offset 0 and a synthetic root record at the
/// end that anchors traversal.
#[derive(Debug)]
pub struct FlatArray {
  pub(crate) records: Vec<Record>,
  pub(crate) root_index: usize,
}

impl FlatArray {
  pub fn len(&self) -> usize {
    self.records.len()
  }

  pub fn is_empty(&self) -> bool {
    self.records.is_empty()
  }

  /// Index of the synthetic root record; its `children` field is the
  /// real entry point for word enumeration.
  pub fn root_index(&self) -> usize {
    self.root_index
  }

  pub(crate) fn record(&self, offset: usize) -> &Record {
    &self.records[offset]
  }
}

/// Places every ChildList from `plan` into one flat array of records
/// (spec.md §4.4).
pub fn linearize(dag: &Dag, plan: &CompressionPlan) -> FlatArray {
  let mut groups: Vec<&crate::compress::Group> = plan.groups.iter().collect();
  groups.sort_by_key(|g| g.chain[0].0);

  // Phase 1: offset of ChildList 0 (empty) is fixed at the terminator;
  // every other list's offset is its host block's start plus the
  // length difference that makes its suffix land in the tail.
  let mut offsets: FxHashMap<ChildListId, usize> = FxHashMap::default();
  offsets.insert(ChildListId(0), 0);

  let mut cursor = 1;
  for group in &groups {
    let host = group.chain[0];
    let host_len = dag.child_list(host).len();
    for &member in &group.chain {
      let member_len = dag.child_list(member).len();
      offsets.insert(member, cursor + host_len - member_len);
    }
    cursor += host_len;
  }

  // Phase 2: write the terminator, then every host block, then the
  // synthetic root record.
  let mut records = Vec::with_capacity(cursor + 1);
  records.push(Record { val: None, is_end: false, end_of_list: false, children: 0 });

  for group in &groups {
    let host = group.chain[0];
    let list = dag.child_list(host);
    let last = list.len() - 1;
    for (i, &node_id) in list.iter().enumerate() {
      let node = &dag.nodes[node_id.0];
      records.push(Record {
        val: node.val,
        is_end: node.is_end,
        end_of_list: i == last,
        children: *offsets.get(&node.children).expect("every ChildList was assigned an offset"),
      });
    }
  }

  let root_index = records.len();
  records.push(Record {
    val: None,
    is_end: false,
    end_of_list: true,
    children: *offsets.get(&dag.root_children).expect("root children list was assigned an offset"),
  });

  tracing::debug!(records = records.len(), groups = groups.len(), "linearized flat array");
  FlatArray { records, root_index }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{compress, dag, trie, word::Word};

  fn flat_array_for(words: &[&str]) -> FlatArray {
    let words: Vec<Word> = words.iter().map(|s| s.parse().unwrap()).collect();
    let trie = trie::build(&words).unwrap();
    let dag = dag::minimize(&trie);
    let plan = compress::compress(&dag);
    linearize(&dag, &plan)
  }

  #[test]
  fn terminator_occupies_offset_zero() {
    let flat = flat_array_for(&["A"]);
    let terminator = flat.record(0);
    assert!(!terminator.end_of_list);
    assert!(terminator.val.is_none());
  }

  #[test]
  fn root_record_is_last_and_terminal() {
    let flat = flat_array_for(&["CAT", "DOG"]);
    assert_eq!(flat.root_index(), flat.len() - 1);
    assert!(flat.record(flat.root_index()).end_of_list);
  }

  #[test]
  fn every_child_list_in_a_group_is_addressable() {
    // AB and AC: the A node's own children list has 2 members (B, C),
    // each a leaf whose children list is the empty list at offset 0.
    let flat = flat_array_for(&["AB", "AC"]);
    let root_children_offset = flat.record(flat.root_index()).children;
    let a = flat.record(root_children_offset);
    assert_eq!(a.val, Letter::try_from_char('A').ok());
    let b_or_c = flat.record(a.children);
    assert_eq!(b_or_c.children, 0);
  }
}
