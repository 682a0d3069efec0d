//! Java syntax trees that write themselves back out as source.
//!
//! Build a tree from the types in [`ast`], then hand any node to a
//! [`Printer`]: [`SpacedPrinter`] for space-joined tokens, [`Formatter`] for
//! indented source, or [`RawPrinter`] for the bare token text.
//!
//! ```ignore
//! use javast::ast::*;
//! use javast::token::{Modifier, TypeKind};
//! use javast::ToTokens;
//!
//! let method = Method {
//!     modifiers: Modifiers::flags([Modifier::Public]),
//!     return_type: Some(Type::primitive(TypeKind::Void)),
//!     ..Method::new("foo")
//! };
//! assert_eq!(method.to_spaced()?, "public void foo ( )");
//! ```
#![deny(
    unsafe_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::panic))]

pub mod ast;
pub mod token;
mod unparse;
pub mod walk;

pub use javast_core::*;
