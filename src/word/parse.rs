use super::Word;
use crate::letter::parse::parse_letter;
use nom::{combinator::{all_consuming, map}, error::Error, multi::many1, Finish, IResult};
use std::str::FromStr;

pub(crate) fn parse_word(input: &str) -> IResult<&str, Word> {
  all_consuming(map(many1(parse_letter), |letters| letters.into_iter().collect()))(input)
}

impl FromStr for Word {
  type Err = Error<String>;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match parse_word(s).finish() {
      Ok((_, word)) => Ok(word),
      Err(Error { input, code }) => Err(Error {
        input: input.to_string(),
        code,
      }),
    }
  }
}
