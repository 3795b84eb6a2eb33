
//! Recognition and base conversion of numeric literals.
//!
//! Text is classified by a [`Parser`](parser::Parser), chosen from a
//! [`ParserRegistry`](parser::ParserRegistry) by a grammar key such as
//! a language identifier. The resulting [`Literal`](literal::Literal)
//! can then be rendered in any base (integers) or in decimal or
//! scientific notation (floats).

pub mod convert;
pub mod error;
pub mod literal;
pub mod parser;
pub mod settings;
pub mod util;

pub use error::Error;
