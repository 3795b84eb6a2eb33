
//! Ordered recognizer rules which decide whether a candidate string
//! is a numeric literal, and of which kind.
//!
//! A [`Classifier`] holds an ordered list of rules. Each rule is a
//! total-match pattern paired with the kind of literal it produces.
//! Rules are tried front to back and the first match wins, so more
//! specific forms must come before more general ones. The default
//! order is
//!
//! 1. `0b`-prefixed binary integers
//! 2. `0o`-prefixed octal integers
//! 3. decimal integers
//! 4. `0x`-prefixed hexadecimal integers
//! 5. decimal floats, with optional fraction and exponent
//!
//! Decimal integers are tried before decimal floats because every
//! integer is also a valid float under rule 5.

use super::{Literal, LiteralBase};
use crate::settings::ClassifierSettings;
use crate::util::{Sign, strip_chars};
use crate::util::radix::{Digits, FromDigits};

use num::BigInt;
use once_cell::sync::Lazy;
use regex::{Regex, Captures};
use thiserror::Error;

use std::str::FromStr;

/// Name of the capture group which holds an integer rule's digit
/// payload.
pub const DIGITS_GROUP: &str = "digits";
const SIGN_GROUP: &str = "sign";

/// The kind of literal a rule produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
  /// An integer whose `digits` capture is read in the given base.
  Integer(LiteralBase),
  /// A decimal floating-point value, parsed from the whole match.
  Float,
}

/// An uncompiled recognizer rule. The pattern describes the literal
/// body only; anchoring and the optional sign are added when the rule
/// is compiled into a [`Classifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
  kind: RuleKind,
  pattern: String,
}

#[derive(Debug, Clone)]
struct CompiledRule {
  kind: RuleKind,
  regex: Regex,
}

#[derive(Debug, Clone)]
pub struct Classifier {
  rules: Vec<CompiledRule>,
  settings: ClassifierSettings,
}

/// The candidate text matched none of the classifier's rules.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("'{text}' does not conform to the literal syntax")]
pub struct UnrecognizedLiteral {
  pub text: String,
}

/// A rule table could not be compiled.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum RuleError {
  #[error("Invalid rule pattern {pattern:?}: {source}")]
  InvalidPattern { pattern: String, #[source] source: regex::Error },
  #[error("Integer rule pattern {pattern:?} has no `digits` capture group")]
  MissingDigitsGroup { pattern: String },
}

static UNSIGNED_DEFAULT_RULES: Lazy<Vec<CompiledRule>> = Lazy::new(|| {
  compile_rules(&Rule::default_rules(), false).expect("built-in literal rules should compile")
});

static SIGNED_DEFAULT_RULES: Lazy<Vec<CompiledRule>> = Lazy::new(|| {
  compile_rules(&Rule::default_rules(), true).expect("built-in literal rules should compile")
});

impl Rule {
  /// An integer rule. `pattern` must contain a capture group named
  /// `digits` holding the digit payload, without any prefix.
  pub fn integer(base: LiteralBase, pattern: impl Into<String>) -> Self {
    Self { kind: RuleKind::Integer(base), pattern: pattern.into() }
  }

  /// A decimal float rule. The whole match must be accepted by
  /// [`f64::from_str`].
  pub fn float(pattern: impl Into<String>) -> Self {
    Self { kind: RuleKind::Float, pattern: pattern.into() }
  }

  pub fn kind(&self) -> RuleKind {
    self.kind
  }

  pub fn pattern(&self) -> &str {
    &self.pattern
  }

  /// The canonical rule order. See the module documentation.
  pub fn default_rules() -> Vec<Rule> {
    vec![
      Rule::integer(LiteralBase::Binary, r"0[bB](?P<digits>[01]+)"),
      Rule::integer(LiteralBase::Octal, r"0[oO](?P<digits>[0-7]+)"),
      Rule::integer(LiteralBase::Decimal, r"(?P<digits>[0-9]+)"),
      Rule::integer(LiteralBase::Hexadecimal, r"0[xX](?P<digits>[0-9a-fA-F]+)"),
      Rule::float(r"[0-9]+(?:\.[0-9]+)?(?:[eE][-+]?[0-9]+)?"),
    ]
  }

  fn compile(&self, allow_sign: bool) -> Result<CompiledRule, RuleError> {
    let sign = if allow_sign { format!("(?P<{SIGN_GROUP}>[+-])?") } else { String::new() };
    let full_pattern = format!("^{sign}(?:{})$", self.pattern);
    let regex = Regex::new(&full_pattern).map_err(|source| {
      RuleError::InvalidPattern { pattern: self.pattern.clone(), source }
    })?;
    if matches!(self.kind, RuleKind::Integer(_)) && !regex.capture_names().any(|name| name == Some(DIGITS_GROUP)) {
      return Err(RuleError::MissingDigitsGroup { pattern: self.pattern.clone() });
    }
    Ok(CompiledRule { kind: self.kind, regex })
  }
}

fn compile_rules(rules: &[Rule], allow_sign: bool) -> Result<Vec<CompiledRule>, RuleError> {
  rules.iter().map(|rule| rule.compile(allow_sign)).collect()
}

impl CompiledRule {
  /// Builds a literal from a successful match. Returns `None` if the
  /// match does not carry a usable payload, which can only happen for
  /// hand-written rules whose pattern is looser than their kind.
  fn construct(&self, raw_text: &str, normalized: &str, caps: &Captures<'_>) -> Option<Literal> {
    match self.kind {
      RuleKind::Integer(base) => {
        let sign = caps.name(SIGN_GROUP).map_or(Sign::Positive, |m| Sign::split_leading(m.as_str()).0);
        let digits = Digits::parse(caps.name(DIGITS_GROUP)?.as_str(), base.radix()).ok()?;
        let value = BigInt::from_digits(&digits.with_sign(sign), base.radix());
        Some(Literal::integer(raw_text, base, value))
      }
      RuleKind::Float => {
        let value = f64::from_str(normalized).ok()?;
        let is_scientific = normalized.contains(['e', 'E']);
        Some(Literal::float(raw_text, value, is_scientific))
      }
    }
  }
}

impl Classifier {
  /// A classifier for the default literal grammar.
  pub fn new(settings: ClassifierSettings) -> Self {
    let rules = if settings.allow_sign { &SIGNED_DEFAULT_RULES } else { &UNSIGNED_DEFAULT_RULES };
    Self { rules: rules.to_vec(), settings }
  }

  /// A classifier for a custom grammar. `rules` are tried in the
  /// order given.
  pub fn with_rules(rules: &[Rule], settings: ClassifierSettings) -> Result<Self, RuleError> {
    let rules = compile_rules(rules, settings.allow_sign)?;
    Ok(Self { rules, settings })
  }

  pub fn settings(&self) -> &ClassifierSettings {
    &self.settings
  }

  /// The kinds of this classifier's rules, in evaluation order.
  pub fn rule_kinds(&self) -> impl Iterator<Item = RuleKind> + '_ {
    self.rules.iter().map(|rule| rule.kind)
  }

  /// Removes grouping separators from the candidate text.
  pub fn normalize(&self, text: &str) -> String {
    strip_chars(text, &self.settings.separators)
  }

  /// Classifies `text` as a literal. The first rule which matches the
  /// whole (normalized) text decides the literal's type and base.
  pub fn classify(&self, text: &str) -> Result<Literal, UnrecognizedLiteral> {
    let normalized = self.normalize(text);
    let unrecognized = || UnrecognizedLiteral { text: text.to_owned() };
    for rule in &self.rules {
      if let Some(caps) = rule.regex.captures(&normalized) {
        log::trace!("{text:?} matched {:?} rule", rule.kind);
        return rule.construct(text, &normalized, &caps).ok_or_else(unrecognized);
      }
    }
    log::trace!("{text:?} matched no literal rule");
    Err(unrecognized())
  }
}

impl Default for Classifier {
  fn default() -> Self {
    Self::new(ClassifierSettings::default())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::literal::{LiteralType, LiteralValue};

  use approx::assert_abs_diff_eq;

  fn int_value(lit: &Literal) -> BigInt {
    lit.as_integer().cloned().expect("expected integer literal")
  }

  #[test]
  fn test_default_rule_order() {
    let classifier = Classifier::default();
    assert_eq!(
      classifier.rule_kinds().collect::<Vec<_>>(),
      vec![
        RuleKind::Integer(LiteralBase::Binary),
        RuleKind::Integer(LiteralBase::Octal),
        RuleKind::Integer(LiteralBase::Decimal),
        RuleKind::Integer(LiteralBase::Hexadecimal),
        RuleKind::Float,
      ],
    );
  }

  #[test]
  fn test_classify_binary() {
    let lit = Classifier::default().classify("0b1010").unwrap();
    assert_eq!(lit.literal_type(), LiteralType::Integer);
    assert_eq!(lit.base(), LiteralBase::Binary);
    assert_eq!(int_value(&lit), BigInt::from(10));
    assert!(!lit.is_scientific());
  }

  #[test]
  fn test_classify_octal() {
    let lit = Classifier::default().classify("0o777").unwrap();
    assert_eq!(lit.base(), LiteralBase::Octal);
    assert_eq!(int_value(&lit), BigInt::from(511));
  }

  #[test]
  fn test_classify_decimal() {
    let lit = Classifier::default().classify("255").unwrap();
    assert_eq!(lit.literal_type(), LiteralType::Integer);
    assert_eq!(lit.base(), LiteralBase::Decimal);
    assert_eq!(int_value(&lit), BigInt::from(255));
  }

  #[test]
  fn test_classify_hexadecimal() {
    let lit = Classifier::default().classify("0xFF").unwrap();
    assert_eq!(lit.base(), LiteralBase::Hexadecimal);
    assert_eq!(int_value(&lit), BigInt::from(255));

    let lit = Classifier::default().classify("0Xdead").unwrap();
    assert_eq!(lit.base(), LiteralBase::Hexadecimal);
    assert_eq!(int_value(&lit), BigInt::from(0xdead));
  }

  #[test]
  fn test_classify_uppercase_prefixes() {
    assert_eq!(Classifier::default().classify("0B11").unwrap().base(), LiteralBase::Binary);
    assert_eq!(Classifier::default().classify("0O11").unwrap().base(), LiteralBase::Octal);
  }

  #[test]
  fn test_classify_beyond_u64() {
    let lit = Classifier::default().classify("0xFFFFFFFFFFFFFFFF").unwrap();
    assert_eq!(int_value(&lit), BigInt::from(u64::MAX));

    let lit = Classifier::default().classify("0x1FFFFFFFFFFFFFFFF").unwrap();
    assert_eq!(int_value(&lit), BigInt::from(u64::MAX) * 2 + 1);

    let lit = Classifier::default().classify("123456789012345678901234567890").unwrap();
    assert_eq!(int_value(&lit), BigInt::from_str("123456789012345678901234567890").unwrap());
  }

  #[test]
  fn test_classify_float() {
    let lit = Classifier::default().classify("3.14").unwrap();
    assert_eq!(lit.literal_type(), LiteralType::Float);
    assert_eq!(lit.base(), LiteralBase::Decimal);
    assert_abs_diff_eq!(lit.as_float().unwrap(), 3.14);
    assert!(!lit.is_scientific());
  }

  #[test]
  fn test_classify_scientific_float() {
    let lit = Classifier::default().classify("6.022e23").unwrap();
    assert_eq!(lit.literal_type(), LiteralType::Float);
    assert!(lit.is_scientific());
    assert_abs_diff_eq!(lit.as_float().unwrap(), 6.022e23, epsilon = 1e8);

    let lit = Classifier::default().classify("1E-3").unwrap();
    assert!(lit.is_scientific());
    assert_abs_diff_eq!(lit.as_float().unwrap(), 0.001);

    // An exponent on an integer mantissa still makes a float.
    let lit = Classifier::default().classify("5e+2").unwrap();
    assert_eq!(lit.value(), &LiteralValue::Float(500.0));
  }

  #[test]
  fn test_classify_strips_separators() {
    let lit = Classifier::default().classify("1_000_000").unwrap();
    assert_eq!(int_value(&lit), BigInt::from(1_000_000));
    assert_eq!(lit.raw_text(), "1_000_000");

    let lit = Classifier::default().classify("1,234.5").unwrap();
    assert_abs_diff_eq!(lit.as_float().unwrap(), 1234.5);

    let lit = Classifier::default().classify("0b1010_1010").unwrap();
    assert_eq!(int_value(&lit), BigInt::from(0xAA));
  }

  #[test]
  fn test_classify_without_separators_configured() {
    let settings = ClassifierSettings { separators: vec![], ..ClassifierSettings::default() };
    let classifier = Classifier::new(settings);
    assert!(classifier.classify("1_000").is_err());
    assert!(classifier.classify("1000").is_ok());
  }

  #[test]
  fn test_classify_invalid_hex_digit() {
    assert_eq!(
      Classifier::default().classify("0xG1"),
      Err(UnrecognizedLiteral { text: String::from("0xG1") }),
    );
  }

  #[test]
  fn test_classify_unrecognized() {
    let classifier = Classifier::default();
    for text in ["", "abc", "0b102", "0o8", "1.", ".5", "1e", "1.2.3", "0x", " 1", "1 ", "١٢"] {
      assert!(classifier.classify(text).is_err(), "{text:?} should not classify");
    }
  }

  #[test]
  fn test_unsigned_grammar_rejects_sign() {
    let classifier = Classifier::default();
    assert!(classifier.classify("-5").is_err());
    assert!(classifier.classify("+5").is_err());
    assert!(classifier.classify("-1.5").is_err());
  }

  #[test]
  fn test_signed_grammar_accepts_sign() {
    let classifier = Classifier::new(ClassifierSettings::signed());

    let lit = classifier.classify("-5").unwrap();
    assert_eq!(lit.base(), LiteralBase::Decimal);
    assert_eq!(int_value(&lit), BigInt::from(-5));

    let lit = classifier.classify("+0x10").unwrap();
    assert_eq!(lit.base(), LiteralBase::Hexadecimal);
    assert_eq!(int_value(&lit), BigInt::from(16));

    let lit = classifier.classify("-0b11").unwrap();
    assert_eq!(int_value(&lit), BigInt::from(-3));

    let lit = classifier.classify("-2.5e-1").unwrap();
    assert_abs_diff_eq!(lit.as_float().unwrap(), -0.25);

    assert!(classifier.classify("--5").is_err());
    assert!(classifier.classify("5-").is_err());
  }

  #[test]
  fn test_reclassify_formatted_decimal() {
    let classifier = Classifier::default();
    for text in ["0b1010", "0o17", "0x1F", "42"] {
      let lit = classifier.classify(text).unwrap();
      let decimal = lit.to_string_base(LiteralBase::Decimal, false).unwrap();
      let again = classifier.classify(&decimal).unwrap();
      assert_eq!(again.literal_type(), LiteralType::Integer);
      assert_eq!(again.base(), LiteralBase::Decimal);
      assert_eq!(again.as_integer(), lit.as_integer());
    }
  }

  #[test]
  fn test_prefixed_output_reclassifies_in_each_base() {
    let classifier = Classifier::default();
    let values = [
      BigInt::from(0),
      BigInt::from(1),
      BigInt::from(u64::MAX),
      BigInt::from(u128::MAX),
      BigInt::from_str("987654321987654321987654321987654321").unwrap(),
    ];
    for value in values {
      let lit = Literal::integer("", LiteralBase::Decimal, value.clone());
      for base in LiteralBase::ALL {
        let text = lit.to_string_base(base, true).unwrap();
        assert!(text.starts_with(base.prefix()));
        let again = classifier.classify(&text).unwrap();
        assert_eq!(again.base(), base, "{text} should classify as {base}");
        assert_eq!(int_value(&again), value);
      }
    }
  }

  #[test]
  fn test_format_round_trips_digit_payload() {
    let classifier = Classifier::default();
    for (text, payload) in [("0b1101", "1101"), ("0o755", "755"), ("9001", "9001"), ("0xbeef", "BEEF")] {
      let lit = classifier.classify(text).unwrap();
      assert_eq!(lit.to_string_base(lit.base(), false).unwrap(), payload);
    }
  }

  #[test]
  fn test_custom_rules() {
    // C-style octal, with a bare leading zero.
    let rules = vec![
      Rule::integer(LiteralBase::Hexadecimal, r"0[xX](?P<digits>[0-9a-fA-F]+)"),
      Rule::integer(LiteralBase::Octal, r"0(?P<digits>[0-7]+)"),
      Rule::integer(LiteralBase::Decimal, r"(?P<digits>[0-9]+)"),
    ];
    let classifier = Classifier::with_rules(&rules, ClassifierSettings::default()).unwrap();

    let lit = classifier.classify("017").unwrap();
    assert_eq!(lit.base(), LiteralBase::Octal);
    assert_eq!(int_value(&lit), BigInt::from(15));

    let lit = classifier.classify("17").unwrap();
    assert_eq!(lit.base(), LiteralBase::Decimal);

    assert!(classifier.classify("1.5").is_err());
  }

  #[test]
  fn test_custom_rules_first_match_wins() {
    // The decimal rule shadows the octal rule entirely.
    let rules = vec![
      Rule::integer(LiteralBase::Decimal, r"(?P<digits>[0-9]+)"),
      Rule::integer(LiteralBase::Octal, r"0(?P<digits>[0-7]+)"),
    ];
    let classifier = Classifier::with_rules(&rules, ClassifierSettings::default()).unwrap();
    let lit = classifier.classify("017").unwrap();
    assert_eq!(lit.base(), LiteralBase::Decimal);
    assert_eq!(int_value(&lit), BigInt::from(17));
  }

  #[test]
  fn test_custom_rule_with_loose_pattern() {
    // The pattern admits digits the base cannot represent; such a
    // match is reported as unrecognized rather than misparsed.
    let rules = vec![Rule::integer(LiteralBase::Binary, r"0b(?P<digits>[0-9]+)")];
    let classifier = Classifier::with_rules(&rules, ClassifierSettings::default()).unwrap();
    assert!(classifier.classify("0b12").is_err());
    assert_eq!(int_value(&classifier.classify("0b11").unwrap()), BigInt::from(3));
  }

  #[test]
  fn test_invalid_rules() {
    let rules = vec![Rule::integer(LiteralBase::Decimal, r"(?P<digits>[0-9]+")];
    assert!(matches!(
      Classifier::with_rules(&rules, ClassifierSettings::default()),
      Err(RuleError::InvalidPattern { .. }),
    ));

    let rules = vec![Rule::integer(LiteralBase::Decimal, r"[0-9]+")];
    assert!(matches!(
      Classifier::with_rules(&rules, ClassifierSettings::default()),
      Err(RuleError::MissingDigitsGroup { .. }),
    ));

    // Float rules have no payload group requirement.
    let rules = vec![Rule::float(r"[0-9]+\.[0-9]+")];
    assert!(Classifier::with_rules(&rules, ClassifierSettings::default()).is_ok());
  }
}
