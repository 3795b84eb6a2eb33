
//! User-configurable settings for literal grammars.

use serde::{Serialize, Deserialize};
use thiserror::Error;

/// Settings which control how a [`Classifier`](crate::literal::classifier::Classifier)
/// reads candidate text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierSettings {
  /// If true, a single leading `+` or `-` is accepted as part of the
  /// literal. This also changes which text the boundary pattern
  /// selects around a literal, so it is off by default.
  pub allow_sign: bool,
  /// Grouping separators removed from the candidate before any rule
  /// is tried.
  pub separators: Vec<char>,
}

/// Settings which control how literals are rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatSettings {
  /// Number of fractional mantissa digits in scientific notation. If
  /// `None`, the shortest mantissa which reproduces the value is
  /// used.
  pub scientific_precision: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserSettings {
  pub classifier: ClassifierSettings,
  pub format: FormatSettings,
}

#[derive(Debug, Error)]
#[error("Invalid parser settings: {0}")]
pub struct SettingsError(#[from] serde_json::Error);

impl ClassifierSettings {
  pub fn signed() -> Self {
    Self { allow_sign: true, ..Self::default() }
  }
}

impl ParserSettings {
  /// Reads settings from a JSON document. Missing fields take their
  /// default values.
  pub fn from_json(text: &str) -> Result<Self, SettingsError> {
    Ok(serde_json::from_str(text)?)
  }
}

impl Default for ClassifierSettings {
  fn default() -> Self {
    ClassifierSettings {
      allow_sign: false,
      separators: vec![',', '_'],
    }
  }
}
