use super::Letter;
use nom::{character::complete::satisfy, error::Error, Finish, IResult};
use std::str::FromStr;

pub(crate) fn parse_letter(input: &str) -> IResult<&str, Letter> {
  let (input, c) = satisfy(|c: char| c.is_ascii_uppercase())(input)?;
  Ok((input, Letter::try_from_char(c).expect("satisfy checked uppercase")))
}

impl FromStr for Letter {
  type Err = Error<String>;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match parse_letter(s).finish() {
      Ok((_, letter)) => Ok(letter),
      Err(Error { input, code }) => Err(Error { input: input.to_string(), code }),
    }
  }
}
