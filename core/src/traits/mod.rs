//! Core traits for the javast unparsing layer.
//!
//! This module defines the two halves of unparsing: nodes that know how to
//! emit themselves as tokens, and sinks that decide how tokens are laid out.
//!
//! # Trait Hierarchy
//!
//! ```text
//! ToTokens (node side)
//!     └── write(&mut impl Printer) -> Result<usize, Error>
//!
//! Printer (sink side)
//!     ├── RawPrinter      tokens verbatim
//!     ├── SpacedPrinter   tokens joined by one space
//!     └── Formatter       whitespace, newlines, indentation
//! ```
//!
//! # Usage Patterns
//!
//! ```ignore
//! use javast_core::{Printer, ToTokens, Error};
//!
//! impl ToTokens for Parenthesized {
//!     fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
//!         let mut n = p.word("(")?;
//!         n += p.write(&self.expression)?;
//!         n += p.word(")")?;
//!         Ok(n)
//!     }
//! }
//! ```

mod printer;
mod to_tokens;

pub use printer::Printer;
pub use to_tokens::ToTokens;
