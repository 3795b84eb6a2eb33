
use serde::{Serialize, Deserialize};

use std::fmt::{self, Display, Formatter};

/// Thin wrapper around `usize` that represents a byte position in a
/// line of source text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SourceOffset(pub usize);

/// A span of source offsets. Spans should be considered half-open
/// intervals, with `start` being included and `end` being excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
  pub start: SourceOffset,
  pub end: SourceOffset,
}

impl Span {
  pub fn new(start: impl Into<SourceOffset>, end: impl Into<SourceOffset>) -> Self {
    Self { start: start.into(), end: end.into() }
  }

  /// Whether a cursor at `offset` touches this span. Both endpoints
  /// count, so a cursor placed just after the last character of a
  /// word still selects that word.
  pub fn touches(&self, offset: SourceOffset) -> bool {
    self.start <= offset && offset <= self.end
  }

  /// The text covered by this span, or `None` if the span is out of
  /// bounds or does not fall on character boundaries.
  pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
    text.get(self.start.0..self.end.0)
  }
}

impl From<usize> for SourceOffset {
  fn from(i: usize) -> Self {
    SourceOffset(i)
  }
}

impl From<SourceOffset> for usize {
  fn from(i: SourceOffset) -> Self {
    i.0
  }
}

impl From<regex::Match<'_>> for Span {
  fn from(m: regex::Match<'_>) -> Self {
    Span::new(m.start(), m.end())
  }
}

impl Display for SourceOffset {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl Display for Span {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}-{}", self.start, self.end)
  }
}
