
//! Lookup table from grammar keys to parsers.

use super::{Parser, WILDCARD};
use crate::settings::ParserSettings;

use regex::Regex;
use thiserror::Error;

use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// An immutable index from grammar keys (such as language
/// identifiers) to [`Parser`]s. Lookup falls back to the parser
/// declaring the wildcard key, which every registry is guaranteed to
/// have, so lookup never fails.
///
/// A registry is built once and then shared read-only; it is `Send`
/// and `Sync`.
#[derive(Debug, Clone)]
pub struct ParserRegistry {
  parsers: Vec<Parser>,
  index: HashMap<String, usize>,
  wildcard: usize,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum RegistryError {
  #[error("Parser registry cannot be empty")]
  Empty,
  #[error("No registered parser declares the wildcard key '*'")]
  NoWildcard,
}

impl ParserRegistry {
  /// Builds a registry from `parsers`. Each key is bound to the first
  /// parser that declares it; later declarations of the same key are
  /// ignored. The same rule applies to the wildcard key.
  pub fn new(parsers: Vec<Parser>) -> Result<Self, RegistryError> {
    if parsers.is_empty() {
      return Err(RegistryError::Empty);
    }

    let mut index = HashMap::new();
    let mut wildcard = None;
    for (i, parser) in parsers.iter().enumerate() {
      for key in parser.languages() {
        if key == WILDCARD {
          if wildcard.is_none() {
            wildcard = Some(i);
          } else {
            log::debug!("Parser '{}' declares the wildcard key, which is already taken", parser.name());
          }
          continue;
        }
        match index.entry(key.clone()) {
          Entry::Vacant(entry) => {
            entry.insert(i);
          }
          Entry::Occupied(entry) => {
            let owner: &Parser = &parsers[*entry.get()];
            log::debug!("Parser '{}' declares key '{key}', which is already bound to '{}'", parser.name(), owner.name());
          }
        }
      }
    }

    let wildcard = wildcard.ok_or(RegistryError::NoWildcard)?;
    log::debug!(
      "Built parser registry with {} parsers, {} keys, fallback '{}'",
      parsers.len(),
      index.len(),
      parsers[wildcard].name(),
    );
    Ok(Self { parsers, index, wildcard })
  }

  /// A registry holding only the default grammar.
  pub fn with_default_grammar(settings: &ParserSettings) -> Self {
    let parser = Parser::default_grammar(settings);
    let index = HashMap::new();
    Self { parsers: vec![parser], index, wildcard: 0 }
  }

  /// The parser registered for `key`, or the wildcard parser if no
  /// parser declares `key` exactly.
  pub fn get(&self, key: &str) -> &Parser {
    let i = self.index.get(key).copied().unwrap_or(self.wildcard);
    &self.parsers[i]
  }

  /// Whether some parser declares exactly `key`. The wildcard key
  /// itself always counts as declared.
  pub fn contains_key(&self, key: &str) -> bool {
    key == WILDCARD || self.index.contains_key(key)
  }

  pub fn wildcard(&self) -> &Parser {
    &self.parsers[self.wildcard]
  }

  /// The boundary pattern of the parser for `key`.
  pub fn locate_pattern(&self, key: &str) -> &Regex {
    self.get(key).boundary_regex()
  }

  /// All parsers, in registration order.
  pub fn parsers(&self) -> &[Parser] {
    &self.parsers
  }
}

impl Default for ParserRegistry {
  fn default() -> Self {
    Self::with_default_grammar(&ParserSettings::default())
  }
}
