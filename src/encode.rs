//! Stage 6: Encoder.
//!
//! Packs each [`crate::linearize::FlatArray`] record into one `u32`,
//! the bit layout spec.md §4.6 gives: bit 0 `is_end`, bit 1
//! `end_of_list`, bits 2-9 `val` as a raw ASCII byte, bits 10-31 a
//! 22-bit `children` offset. 22 bits caps the array at 2^22 records,
//! the same ceiling `examples/original_source/dawg_gen.py` enforces
//! (`assert len(dawg_list) < 2**22`) before it packs into a `struct.pack`
//! `<I` the CLI then writes out.

use crate::{error::Error, letter::Letter, linearize::FlatArray};
use std::io::Write;

/// One past the largest offset a 22-bit `children` field can address.
pub const MAX_RECORDS: usize = 1 << 22;

const IS_END_BIT: u32 = 1 << 0;
const END_OF_LIST_BIT: u32 = 1 << 1;
const VAL_SHIFT: u32 = 2;
const VAL_MASK: u32 = 0xFF;
const CHILDREN_SHIFT: u32 = 10;
const CHILDREN_MASK: u32 = 0x3F_FFFF;

/// Bit-packs `flat` into one `u32` per record.
pub fn encode(flat: &FlatArray) -> Result<Vec<u32>, Error> {
  if flat.len() > MAX_RECORDS {
    return Err(Error::CapacityExceeded { len: flat.len() });
  }

  let mut out = Vec::with_capacity(flat.len());
  for offset in 0..flat.len() {
    let record = flat.record(offset);
    if record.children >= MAX_RECORDS {
      return Err(Error::CapacityExceeded { len: record.children + 1 });
    }

    let mut word = 0u32;
    if record.is_end {
      word |= IS_END_BIT;
    }
    if record.end_of_list {
      word |= END_OF_LIST_BIT;
    }
    let val = record.val.map(Letter::to_ascii).unwrap_or(0) as u32;
    word |= (val & VAL_MASK) << VAL_SHIFT;
    word |= (record.children as u32 & CHILDREN_MASK) << CHILDREN_SHIFT;
    out.push(word);
  }

  tracing::debug!(records = out.len(), "encoded flat array");
  Ok(out)
}

/// Writes `records` little-endian, one `u32` each, with no header.
pub fn write_le<W: Write>(records: &[u32], mut sink: W) -> Result<(), Error> {
  for record in records {
    sink.write_all(&record.to_le_bytes())?;
  }
  Ok(())
}
