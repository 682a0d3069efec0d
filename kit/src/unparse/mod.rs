//! Token layout of every node.
//!
//! Each [`ToTokens`](javast_core::ToTokens) impl writes its own keywords and
//! punctuation and asks its children to write themselves, in source order.
//! Nothing here inserts whitespace or parentheses: spacing is the printer's
//! job and precedence is the tree producer's.

mod decl;
mod expr;
mod stmt;
mod ty;
mod unit;

use javast_core::{Error, StructuralError};

use crate::ast::Kind;

/// `ToTokens` for an enum whose variants each hold one writable node.
macro_rules! family_tokens {
    ($family:ty { $( $variant:ident ),* $(,)? }) => {
        impl ::javast_core::ToTokens for $family {
            fn write<P: ::javast_core::Printer>(
                &self,
                p: &mut P,
            ) -> Result<usize, ::javast_core::Error> {
                match self {
                    $( Self::$variant(node) => ::javast_core::ToTokens::write(node, p), )*
                }
            }
        }
    };
}

pub(crate) use family_tokens;

/// Records why serialization stopped and converts to [`Error`].
fn structural(kind: Kind, err: StructuralError) -> Error {
    tracing::debug!(?kind, error = %err, "structural error, aborting serialization");
    err.into()
}
