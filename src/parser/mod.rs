
//! Literal grammars, bundled as [`Parser`] records.
//!
//! A parser is plain data: the keys (language identifiers) it serves,
//! a [`Classifier`] which validates candidate text, a boundary
//! pattern which locates candidate text within a line, and format
//! settings. New grammars are added by constructing a new record and
//! registering it in a [`ParserRegistry`](registry::ParserRegistry).

pub mod default;
pub mod registry;
pub mod source;

pub use registry::{ParserRegistry, RegistryError};
pub use source::{SourceOffset, Span};

use crate::error::Error;
use crate::literal::{Classifier, Literal, LiteralBase, UnrecognizedLiteral, UnsupportedConversion};
use crate::settings::FormatSettings;

use regex::Regex;

/// The grammar key which matches any context.
pub const WILDCARD: &str = "*";

#[derive(Debug, Clone)]
pub struct Parser {
  name: String,
  languages: Vec<String>,
  classifier: Classifier,
  boundary: Regex,
  format: FormatSettings,
}

impl Parser {
  /// Constructs a parser which serves no languages yet. `boundary`
  /// should match a superset of the text `classifier` accepts; it is
  /// only used to find candidates, never to validate them.
  pub fn new(name: impl Into<String>, classifier: Classifier, boundary: Regex) -> Self {
    Self {
      name: name.into(),
      languages: Vec::new(),
      classifier,
      boundary,
      format: FormatSettings::default(),
    }
  }

  pub fn with_languages<I, S>(mut self, languages: I) -> Self
  where I: IntoIterator<Item = S>,
        S: Into<String> {
    self.languages.extend(languages.into_iter().map(Into::into));
    self
  }

  pub fn with_format_settings(mut self, format: FormatSettings) -> Self {
    self.format = format;
    self
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  /// The grammar keys this parser declares, in declaration order.
  pub fn languages(&self) -> &[String] {
    &self.languages
  }

  pub fn is_wildcard(&self) -> bool {
    self.languages.iter().any(|lang| lang == WILDCARD)
  }

  pub fn classifier(&self) -> &Classifier {
    &self.classifier
  }

  pub fn format_settings(&self) -> &FormatSettings {
    &self.format
  }

  /// The pattern an editor should use to find literal-shaped words.
  pub fn boundary_regex(&self) -> &Regex {
    &self.boundary
  }

  pub fn parse(&self, text: &str) -> Result<Literal, UnrecognizedLiteral> {
    self.classifier.classify(text)
  }

  pub fn format(&self, literal: &Literal, base: LiteralBase, prefixed: bool) -> Result<String, UnsupportedConversion> {
    literal.to_string_base(base, prefixed)
  }

  pub fn format_scientific(&self, literal: &Literal) -> String {
    literal.to_scientific(self.format.scientific_precision)
  }

  /// Parses `text` and renders it, prefixed, in `base`.
  pub fn convert(&self, text: &str, base: LiteralBase) -> Result<String, Error> {
    let literal = self.parse(text)?;
    Ok(self.format(&literal, base, true)?)
  }

  /// Spans of all literal-shaped words in `line`, left to right.
  /// These are candidates only; pass the text to [`Parser::parse`]
  /// to validate it.
  pub fn candidates<'a>(&'a self, line: &'a str) -> impl Iterator<Item = Span> + 'a {
    self.boundary.find_iter(line).map(Span::from)
  }

  /// The candidate span touching the cursor at `offset`, if any.
  pub fn find_at(&self, line: &str, offset: SourceOffset) -> Option<Span> {
    self.candidates(line)
      .take_while(|span| span.start <= offset)
      .find(|span| span.touches(offset))
  }

  /// Finds the candidate at `offset` and classifies it.
  pub fn literal_at(&self, line: &str, offset: SourceOffset) -> Option<(Span, Literal)> {
    let span = self.find_at(line, offset)?;
    let literal = self.parse(span.slice(line)?).ok()?;
    Some((span, literal))
  }
}
