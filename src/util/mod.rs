
//! Various utility functions.

pub mod radix;

use itertools::Itertools;

use std::fmt::{self, Formatter, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
  Negative,
  Positive,
}

impl Sign {
  /// Reads an optional leading sign character from `text`, returning
  /// the sign and the remainder of the string. Text without a sign
  /// character is treated as positive.
  pub fn split_leading(text: &str) -> (Sign, &str) {
    if let Some(rest) = text.strip_prefix('-') {
      (Sign::Negative, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
      (Sign::Positive, rest)
    } else {
      (Sign::Positive, text)
    }
  }
}

impl Display for Sign {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Self::Negative => write!(f, "-"),
      Self::Positive => write!(f, "+"),
    }
  }
}

/// Joins regular expression fragments into a single non-capturing
/// alternation. Unlike a plain `join`, each fragment is wrapped in
/// its own group, so fragments containing top-level `|` stay intact.
///
/// The fragments are NOT escaped.
pub fn regex_alternation<'a, I>(fragments: I) -> String
where I : IntoIterator<Item = &'a str> {
  let body = fragments.into_iter().map(|s| format!("(?:{s})")).join("|");
  format!("(?:{body})")
}

/// Removes every character in `chars` from `text`.
pub fn strip_chars(text: &str, chars: &[char]) -> String {
  if chars.is_empty() {
    text.to_owned()
  } else {
    text.chars().filter(|c| !chars.contains(c)).collect()
  }
}
