
//! Rendering of literals in a requested base or notation.
//!
//! Integer literals may be rendered in any [`LiteralBase`]. Float
//! literals only support decimal output (plain or scientific); asking
//! for a float in any other base is reported as
//! [`UnsupportedConversion`] rather than producing a binary expansion
//! of an inexact value.

use super::{Literal, LiteralBase, LiteralType, LiteralValue};
use crate::util::radix::ToDigits;

use num::BigInt;
use thiserror::Error;

use std::fmt::{self, Write};

/// Magnitudes at or above this bound are displayed in exponential
/// form by default.
const EXPONENTIAL_UPPER: f64 = 1e21;
/// Nonzero magnitudes below this bound are displayed in exponential
/// form by default.
const EXPONENTIAL_LOWER: f64 = 1e-6;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Cannot display a {literal_type:?} literal in base {base}")]
pub struct UnsupportedConversion {
  pub literal_type: LiteralType,
  pub base: LiteralBase,
}

impl Literal {
  /// Renders the literal in `base`. Alphabetic digits are uppercase.
  /// If `prefixed` is true, the canonical prefix for `base` is
  /// written after the sign (if any) and before the digits.
  ///
  /// Floats support only [`LiteralBase::Decimal`].
  pub fn to_string_base(&self, base: LiteralBase, prefixed: bool) -> Result<String, UnsupportedConversion> {
    let mut out = String::new();
    let res = match &self.value {
      LiteralValue::Integer(n) => write_integer(&mut out, n, base, prefixed),
      LiteralValue::Float(x) => {
        if base != LiteralBase::Decimal {
          return Err(UnsupportedConversion { literal_type: LiteralType::Float, base });
        }
        write_float(&mut out, *x)
      }
    };
    // Writing into a String cannot fail.
    debug_assert!(res.is_ok());
    Ok(out)
  }

  /// Renders the literal in scientific notation. Integers have no
  /// distinct scientific form and render as their decimal digits.
  pub fn to_scientific(&self, precision: Option<usize>) -> String {
    let mut out = String::new();
    let res = match &self.value {
      LiteralValue::Integer(n) => write_integer(&mut out, n, LiteralBase::Decimal, false),
      LiteralValue::Float(x) => write_exponential(&mut out, *x, precision),
    };
    // Writing into a String cannot fail.
    debug_assert!(res.is_ok());
    out
  }
}

pub(super) fn write_integer(out: &mut impl Write, n: &BigInt, base: LiteralBase, prefixed: bool) -> fmt::Result {
  let digits = n.to_digits(base.radix());
  if digits.is_negative() {
    out.write_char('-')?;
  }
  if prefixed {
    out.write_str(base.prefix())?;
  }
  digits.fmt_magnitude(out)
}

/// Default display for a float: shortest round-trip decimal, falling
/// back to exponential form for very large or very small magnitudes.
pub(super) fn write_float(out: &mut impl Write, x: f64) -> fmt::Result {
  if let Some(s) = non_finite_name(x) {
    return out.write_str(s);
  }
  let magnitude = x.abs();
  if magnitude != 0.0 && !(EXPONENTIAL_LOWER..EXPONENTIAL_UPPER).contains(&magnitude) {
    write_exponential(out, x, None)
  } else if x == 0.0 {
    // Collapse negative zero.
    out.write_char('0')
  } else {
    write!(out, "{x}")
  }
}

/// Writes `x` as `<mantissa>e<sign><exponent>`. The exponent sign is
/// always present.
pub(super) fn write_exponential(out: &mut impl Write, x: f64, precision: Option<usize>) -> fmt::Result {
  if let Some(s) = non_finite_name(x) {
    return out.write_str(s);
  }
  // Collapse negative zero.
  let x = if x == 0.0 { 0.0 } else { x };
  let text = match precision {
    None => format!("{x:e}"),
    Some(p) => format!("{:.*e}", p, x),
  };
  let (mantissa, exponent) = text.split_once('e').unwrap_or((&text, "0"));
  out.write_str(mantissa)?;
  out.write_char('e')?;
  if !exponent.starts_with('-') {
    out.write_char('+')?;
  }
  out.write_str(exponent)
}

fn non_finite_name(x: f64) -> Option<&'static str> {
  if x.is_nan() {
    Some("NaN")
  } else if x == f64::INFINITY {
    Some("Infinity")
  } else if x == f64::NEG_INFINITY {
    Some("-Infinity")
  } else {
    None
  }
}
