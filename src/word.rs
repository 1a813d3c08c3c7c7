//! Validated uppercase words, and the whitespace-delimited word-list
//! tokenizer that sits in front of the trie builder.
//!
//! This is the one place the library touches the "word-list file I/O"
//! collaborator named out of scope in the spec: it turns a `&str`
//! already read from somewhere into a checked, strictly-ascending
//! sequence of `Word`s. It does not open files.

pub(crate) mod parse;

use crate::{error::Error, letter::Letter};
use std::fmt;

/// A single validated word: a non-empty sequence of `A`-`Z` letters.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Word(Vec<Letter>);

impl Word {
  pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
    self.0.iter().copied()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

impl FromIterator<Letter> for Word {
  fn from_iter<T: IntoIterator<Item = Letter>>(iter: T) -> Self {
    Self(iter.into_iter().collect())
  }
}

impl fmt::Display for Word {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for letter in self.letters() {
      write!(f, "{letter}")?;
    }
    Ok(())
  }
}

/// Splits `input` on whitespace, parses each token as a [`Word`], and
/// checks that the sequence is strictly ascending with no duplicates.
///
/// This is the only sorting-adjacent work the crate does: it *checks*
/// order, per spec.md's Non-goals ("the builder does not sort input"),
/// it does not fix a misordered list.
pub fn parse_sorted_words(input: &str) -> Result<Vec<Word>, Error> {
  let mut words = Vec::new();
  let mut previous: Option<&Word> = None;

  for (index, token) in input.split_whitespace().enumerate() {
    let word: Word = token.parse().map_err(|_| Error::InvalidInput {
      index,
      reason: format!("`{token}` contains a non-A-Z character"),
    })?;

    if word.is_empty() {
      return Err(Error::InvalidInput { index, reason: "word is empty".into() });
    }

    words.push(word);
    let word = words.last().unwrap();
    if let Some(previous) = previous {
      if previous >= word {
        return Err(Error::InvalidInput {
          index,
          reason: format!("`{previous}` does not come strictly before `{word}`"),
        });
      }
    }
    previous = Some(word);
  }

  Ok(words)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn accepts_strictly_sorted_input() {
    let words = parse_sorted_words("CAT CATS DOG DOGS").unwrap();
    assert_eq!(words.iter().map(Word::to_string).collect::<Vec<_>>(), vec!["CAT", "CATS", "DOG", "DOGS"]);
  }

  #[test]
  fn rejects_duplicates() {
    let err = parse_sorted_words("CAT CAT").unwrap_err();
    assert!(matches!(err, Error::InvalidInput { .. }));
  }

  #[test]
  fn rejects_out_of_order_input() {
    let err = parse_sorted_words("DOG CAT").unwrap_err();
    assert!(matches!(err, Error::InvalidInput { .. }));
  }

  #[test]
  fn rejects_lowercase() {
    let err = parse_sorted_words("cat").unwrap_err();
    assert!(matches!(err, Error::InvalidInput { .. }));
  }

  #[test]
  fn accepts_newline_delimited_words() {
    let words = parse_sorted_words("A\nAB\nB").unwrap();
    assert_eq!(words.len(), 3);
  }
}
