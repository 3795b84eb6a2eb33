
use crate::literal::{UnrecognizedLiteral, UnsupportedConversion, RuleError};
use crate::parser::RegistryError;
use crate::settings::SettingsError;

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
  #[error("{0}")]
  UnrecognizedLiteral(#[from] UnrecognizedLiteral),
  #[error("{0}")]
  UnsupportedConversion(#[from] UnsupportedConversion),
  #[error("{0}")]
  RegistryError(#[from] RegistryError),
  #[error("{0}")]
  RuleError(#[from] RuleError),
  #[error("{0}")]
  SettingsError(#[from] SettingsError),
}

impl Error {
  /// True for errors which only mean "this text is not something we
  /// can convert". Callers should recover from these locally; the
  /// others indicate a misconfigured grammar or registry.
  pub fn is_recoverable(&self) -> bool {
    matches!(self, Error::UnrecognizedLiteral(_) | Error::UnsupportedConversion(_))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::literal::{LiteralBase, LiteralType};

  #[test]
  fn test_recoverable_errors() {
    let err = Error::from(UnrecognizedLiteral { text: String::from("abc") });
    assert!(err.is_recoverable());
    assert_eq!(err.to_string(), "'abc' does not conform to the literal syntax");

    let err = Error::from(UnsupportedConversion { literal_type: LiteralType::Float, base: LiteralBase::Hexadecimal });
    assert!(err.is_recoverable());
    assert_eq!(err.to_string(), "Cannot display a Float literal in base HEX");
  }

  #[test]
  fn test_fatal_errors() {
    assert!(!Error::from(RegistryError::NoWildcard).is_recoverable());
    assert!(!Error::from(RegistryError::Empty).is_recoverable());
  }
}
