
//! Conversions as requested by an editor: batch base conversion of
//! several selections, and per-literal summaries for hover display.
//!
//! Nothing here renders markup; a [`Summary`] is plain data for the
//! presentation layer to lay out however it likes.

use crate::error::Error;
use crate::literal::{Literal, LiteralBase, LiteralType};
use crate::parser::Parser;

use serde::Serialize;

/// One line of a [`Summary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
  /// Short notation label, such as `HEX` or `SCI`.
  pub label: &'static str,
  /// The literal rendered in this row's notation, without prefix.
  pub text: String,
  /// True if this row's notation is the one the literal was
  /// written in. Presenters typically emphasize this row.
  pub is_source: bool,
}

/// Every supported rendering of a literal: the four bases for an
/// integer, or decimal and scientific notation for a float.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
  pub literal_type: LiteralType,
  pub rows: Vec<SummaryRow>,
}

const SCIENTIFIC_LABEL: &str = "SCI";

pub fn summarize(parser: &Parser, literal: &Literal) -> Summary {
  let rows = match literal.literal_type() {
    LiteralType::Integer => {
      LiteralBase::ALL.into_iter().filter_map(|base| {
        let text = parser.format(literal, base, false).ok()?;
        Some(SummaryRow { label: base.label(), text, is_source: base == literal.base() })
      }).collect::<Vec<_>>()
    }
    LiteralType::Float => {
      let mut rows = Vec::with_capacity(2);
      if let Ok(text) = parser.format(literal, LiteralBase::Decimal, false) {
        rows.push(SummaryRow { label: LiteralBase::Decimal.label(), text, is_source: !literal.is_scientific() });
      }
      rows.push(SummaryRow {
        label: SCIENTIFIC_LABEL,
        text: parser.format_scientific(literal),
        is_source: literal.is_scientific(),
      });
      rows
    }
  };
  Summary { literal_type: literal.literal_type(), rows }
}

/// Parses and summarizes `text`. Returns `None` for text which is
/// not a literal, in which case a hover should simply not appear.
pub fn summarize_text(parser: &Parser, text: &str) -> Option<Summary> {
  let literal = parser.parse(text).ok()?;
  Some(summarize(parser, &literal))
}

/// Converts each input independently to `base`, with prefix. The
/// result has one entry per input, in order.
pub fn try_convert_all<I, S>(parser: &Parser, inputs: I, base: LiteralBase) -> Vec<Result<String, Error>>
where I: IntoIterator<Item = S>,
      S: AsRef<str> {
  inputs.into_iter().map(|input| parser.convert(input.as_ref(), base)).collect()
}

/// Like [`try_convert_all`], but any input which cannot be converted
/// (text that is not a literal, or a float) is returned unchanged, so
/// the result can be substituted back into a document wholesale.
pub fn convert_all<I, S>(parser: &Parser, inputs: I, base: LiteralBase) -> Vec<String>
where I: IntoIterator<Item = S>,
      S: AsRef<str> {
  inputs.into_iter().map(|input| {
    let input = input.as_ref();
    parser.convert(input, base).unwrap_or_else(|err| {
      log::debug!("Leaving {input:?} unchanged: {err}");
      input.to_owned()
    })
  }).collect()
}

impl Summary {
  /// The row for the literal's own notation.
  pub fn source_row(&self) -> Option<&SummaryRow> {
    self.rows.iter().find(|row| row.is_source)
  }
}
