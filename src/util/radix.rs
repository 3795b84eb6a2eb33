//! Utilities for working with integers of different radixes.

use super::Sign;

use num::{BigInt, Zero};
use num::bigint::{Sign as BigSign};
use thiserror::Error;

use std::fmt::{self, Display, Formatter};

/// A numerical radix. Supported radixes are from 2 up to 36 inclusive
/// and will use decimal digits first, followed by the uppercase Latin
/// alphabet A-Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Radix {
  value: u8,
}

/// The digits of an integer, most significant digit first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digits {
  /// The sign of the number. Unsigned zeroes should be represented as
  /// having a positive sign.
  pub sign: Sign,
  /// The digit values, each strictly less than the radix they were
  /// produced for. An empty vector denotes zero.
  pub whole: Vec<u8>,
}

/// Error type for [`Digits::parse`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseDigitsError {
  #[error("Empty digit string")]
  Empty,
  #[error("Invalid digit '{digit}' in radix {radix}")]
  InvalidDigit { digit: char, radix: u8 },
}

/// An implementor of this trait is an integer-like type that can be
/// converted into its digits.
pub trait ToDigits {
  fn to_digits(&self, radix: Radix) -> Digits;
}

/// An implementor of this trait can convert back from a digit-based
/// representation to a number of the given type.
pub trait FromDigits: Sized {
  fn from_digits(digits: &Digits, radix: Radix) -> Self;
}

pub fn digit_into_char(digit: u8) -> char {
  if digit < 10 {
    (b'0' + digit) as char
  } else if digit < 36 {
    (b'A' + digit - 10) as char
  } else {
    panic!("Invalid digit {} in radix", digit)
  }
}

/// Reads a single digit character in the given radix. Letters are
/// accepted in either case.
pub fn char_into_digit(ch: char, radix: Radix) -> Option<u8> {
  let value = ch.to_digit(36)?;
  // to_digit(36) is at most 35, so the cast is lossless.
  let value = value as u8;
  (value < radix.value).then_some(value)
}

impl Radix {
  pub const BINARY: Radix = Radix { value: 2 };
  pub const OCTAL: Radix = Radix { value: 8 };
  pub const DECIMAL: Radix = Radix { value: 10 };
  pub const HEXADECIMAL: Radix = Radix { value: 16 };
}

impl Digits {
  pub fn new(sign: Sign, whole: Vec<u8>) -> Self {
    Self { sign, whole }
  }

  /// Parses an unsigned digit string in the given radix. The string
  /// must consist solely of digits; prefixes, signs, and separators
  /// must already have been removed by the caller.
  pub fn parse(text: &str, radix: Radix) -> Result<Self, ParseDigitsError> {
    if text.is_empty() {
      return Err(ParseDigitsError::Empty);
    }
    let whole = text.chars()
      .map(|ch| char_into_digit(ch, radix).ok_or(ParseDigitsError::InvalidDigit { digit: ch, radix: radix.value }))
      .collect::<Result<Vec<_>, _>>()?;
    Ok(Digits::new(Sign::Positive, whole))
  }

  pub fn with_sign(mut self, sign: Sign) -> Self {
    self.sign = sign;
    self
  }

  pub fn is_negative(&self) -> bool {
    self.sign == Sign::Negative
  }

  /// Writes the digits only, without any sign character.
  pub fn fmt_magnitude(&self, f: &mut impl fmt::Write) -> fmt::Result {
    if self.whole.is_empty() {
      return f.write_char('0');
    }
    for digit in self.whole.iter() {
      f.write_char(digit_into_char(*digit))?;
    }
    Ok(())
  }
}

impl Display for Digits {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    if self.sign == Sign::Negative || f.sign_plus() {
      write!(f, "{}", self.sign)?;
    }
    self.fmt_magnitude(f)
  }
}

impl From<Radix> for u8 {
  fn from(radix: Radix) -> Self {
    radix.value
  }
}

impl From<Radix> for u32 {
  fn from(radix: Radix) -> Self {
    u32::from(radix.value)
  }
}

impl ToDigits for BigInt {
  fn to_digits(&self, radix: Radix) -> Digits {
    let (sign, mut whole) = self.to_radix_be(u32::from(radix));
    let sign = if sign == BigSign::Minus { Sign::Negative } else { Sign::Positive };
    if whole.iter().all(|d| *d == 0) {
      whole.clear();
    }
    Digits { sign, whole }
  }
}

impl FromDigits for BigInt {
  fn from_digits(digits: &Digits, radix: Radix) -> Self {
    let mut n = BigInt::zero();
    for digit in digits.whole.iter() {
      n *= radix.value;
      n += *digit;
    }
    if digits.sign == Sign::Negative { -n } else { n }
  }
}
