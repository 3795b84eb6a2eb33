
//! The default literal grammar, registered under the wildcard key.
//!
//! Integers may be written in binary (`0b`), octal (`0o`), decimal,
//! or hexadecimal (`0x`); floats are decimal with an optional
//! fraction and exponent. Underscores (and, in decimal, commas) may
//! separate digit groups.

use super::{Parser, WILDCARD};
use crate::literal::Classifier;
use crate::settings::ParserSettings;
use crate::util::regex_alternation;

use once_cell::sync::Lazy;
use regex::Regex;

pub const DEFAULT_GRAMMAR_NAME: &str = "default";

const BINARY_WORD: &str = r"\b0[bB][01](?:_?[01])*\b";
const OCTAL_WORD: &str = r"\b0[oO][0-7](?:_?[0-7])*\b";
const HEXADECIMAL_WORD: &str = r"\b0[xX][0-9a-fA-F](?:_?[0-9a-fA-F])*\b";
const DECIMAL_WORD: &str = r"\b[0-9]+(?:[_,]?[0-9]+)*(?:\.[0-9]+(?:[_,]?[0-9]+)*)?(?:[eE][-+]?[0-9]+)?\b";

/// A sign may only start a word if it is not glued to a preceding
/// word character, so that `x-5` selects `5` and not `-5`.
const LEADING_SIGN: &str = r"(?:\B[+-])?";

static UNSIGNED_BOUNDARY: Lazy<Regex> = Lazy::new(|| {
  Regex::new(&boundary_pattern(false)).unwrap()
});

static SIGNED_BOUNDARY: Lazy<Regex> = Lazy::new(|| {
  Regex::new(&boundary_pattern(true)).unwrap()
});

fn boundary_pattern(allow_sign: bool) -> String {
  let words = regex_alternation([BINARY_WORD, OCTAL_WORD, HEXADECIMAL_WORD, DECIMAL_WORD]);
  if allow_sign {
    format!("{LEADING_SIGN}{words}")
  } else {
    words
  }
}

impl Parser {
  /// The default grammar. It declares only the wildcard key, so it
  /// serves every context no other parser claims.
  pub fn default_grammar(settings: &ParserSettings) -> Self {
    let boundary = if settings.classifier.allow_sign { &SIGNED_BOUNDARY } else { &UNSIGNED_BOUNDARY };
    Parser::new(DEFAULT_GRAMMAR_NAME, Classifier::new(settings.classifier.clone()), Regex::clone(boundary))
      .with_languages([WILDCARD])
      .with_format_settings(settings.format.clone())
  }
}
