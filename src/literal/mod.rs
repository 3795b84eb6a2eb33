
//! Classified numeric literals.

pub mod classifier;
pub mod format;

pub use classifier::{Classifier, Rule, RuleKind, RuleError, UnrecognizedLiteral};
pub use format::UnsupportedConversion;

use crate::util::radix::Radix;

use num::BigInt;
use serde::{Serialize, Deserialize};

use std::fmt::{self, Display, Formatter};

/// Whether a literal denotes an exact integer or an inexact
/// floating-point value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiteralType {
  Integer,
  Float,
}

/// The notations an integer literal can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiteralBase {
  Binary,
  Octal,
  Decimal,
  Hexadecimal,
}

/// The numeric payload of a literal. Integers are exact at any
/// magnitude; floats carry the usual IEEE 754 approximation.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
  Integer(BigInt),
  Float(f64),
}

/// A numeric literal which has been recognized by a
/// [`Classifier`]. Literals are immutable; every conversion produces
/// a new string and leaves the literal untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
  raw_text: String,
  base: LiteralBase,
  value: LiteralValue,
  is_scientific: bool,
}

impl LiteralBase {
  /// All bases, in ascending order of radix.
  pub const ALL: [LiteralBase; 4] = [
    LiteralBase::Binary,
    LiteralBase::Octal,
    LiteralBase::Decimal,
    LiteralBase::Hexadecimal,
  ];

  pub fn radix(self) -> Radix {
    match self {
      LiteralBase::Binary => Radix::BINARY,
      LiteralBase::Octal => Radix::OCTAL,
      LiteralBase::Decimal => Radix::DECIMAL,
      LiteralBase::Hexadecimal => Radix::HEXADECIMAL,
    }
  }

  /// The canonical prefix which marks a literal as being written in
  /// this base. Decimal literals have no prefix.
  pub fn prefix(self) -> &'static str {
    match self {
      LiteralBase::Binary => "0b",
      LiteralBase::Octal => "0o",
      LiteralBase::Decimal => "",
      LiteralBase::Hexadecimal => "0x",
    }
  }

  /// Short uppercase label, as used in summary tables.
  pub fn label(self) -> &'static str {
    match self {
      LiteralBase::Binary => "BIN",
      LiteralBase::Octal => "OCT",
      LiteralBase::Decimal => "DEC",
      LiteralBase::Hexadecimal => "HEX",
    }
  }
}

impl Literal {
  /// Constructs an integer literal. `raw_text` is informational only
  /// and is not checked against `value`.
  pub fn integer(raw_text: impl Into<String>, base: LiteralBase, value: BigInt) -> Self {
    Self {
      raw_text: raw_text.into(),
      base,
      value: LiteralValue::Integer(value),
      is_scientific: false,
    }
  }

  /// Constructs a floating-point literal. Floats are always decimal.
  pub fn float(raw_text: impl Into<String>, value: f64, is_scientific: bool) -> Self {
    Self {
      raw_text: raw_text.into(),
      base: LiteralBase::Decimal,
      value: LiteralValue::Float(value),
      is_scientific,
    }
  }

  pub fn literal_type(&self) -> LiteralType {
    match &self.value {
      LiteralValue::Integer(_) => LiteralType::Integer,
      LiteralValue::Float(_) => LiteralType::Float,
    }
  }

  pub fn base(&self) -> LiteralBase {
    self.base
  }

  pub fn raw_text(&self) -> &str {
    &self.raw_text
  }

  pub fn value(&self) -> &LiteralValue {
    &self.value
  }

  /// True iff this is a float literal whose source text had an
  /// exponent marker. Integer literals never report scientific
  /// notation, regardless of their base.
  pub fn is_scientific(&self) -> bool {
    self.is_scientific
  }

  pub fn as_integer(&self) -> Option<&BigInt> {
    match &self.value {
      LiteralValue::Integer(n) => Some(n),
      LiteralValue::Float(_) => None,
    }
  }

  pub fn as_float(&self) -> Option<f64> {
    match &self.value {
      LiteralValue::Integer(_) => None,
      LiteralValue::Float(f) => Some(*f),
    }
  }
}

impl Display for LiteralBase {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.label())
  }
}

/// Displays the literal in its own base, with its prefix.
impl Display for Literal {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match &self.value {
      LiteralValue::Integer(n) => format::write_integer(f, n, self.base, true),
      LiteralValue::Float(x) => format::write_float(f, *x),
    }
  }
}
