//! Core error types for javast.
//!
//! Serialization can fail in exactly two ways: the output sink refuses a
//! write, or the tree handed to the serializer breaks one of its structural
//! invariants. Both abort the current serialization call immediately.

use thiserror::Error;

/// Error returned by [`Printer`](crate::Printer) and
/// [`ToTokens`](crate::ToTokens) implementations.
#[derive(Error, Debug)]
pub enum Error {
    /// The underlying sink reported an I/O failure.
    ///
    /// The error is propagated verbatim. Retrying is the caller's business.
    #[error("sink write failed: {0}")]
    Sink(#[from] std::io::Error),

    /// The tree violated a structural invariant.
    #[error(transparent)]
    Structural(#[from] StructuralError),
}

/// An invariant violation in the tree being serialized.
///
/// These are caller bugs (a malformed tree), never recoverable conditions,
/// and are never replaced with a best-effort token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    /// A keyword table lookup was given a kind it has no spelling for.
    #[error("unexpected {table} kind: {kind}")]
    UnexpectedKind {
        /// Which table was consulted (e.g. `"primitive type"`).
        table: &'static str,
        /// Debug rendering of the offending kind.
        kind: String,
    },

    /// A placeholder for malformed input was asked to serialize itself.
    #[error("erroneous node cannot be unparsed")]
    Erroneous,
}

impl Error {
    /// Shorthand for [`StructuralError::UnexpectedKind`].
    pub fn unexpected_kind(table: &'static str, kind: impl std::fmt::Debug) -> Self {
        Self::Structural(StructuralError::UnexpectedKind {
            table,
            kind: format!("{kind:?}"),
        })
    }

    /// Returns `true` for [`Error::Structural`].
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::Structural(_))
    }

    /// Returns `true` for [`Error::Sink`].
    pub fn is_sink(&self) -> bool {
        matches!(self, Self::Sink(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_kind_display() {
        let err = Error::unexpected_kind("primitive type", "Declared");
        assert!(err.is_structural());
        assert_eq!(
            err.to_string(),
            "unexpected primitive type kind: \"Declared\""
        );
    }

    #[test]
    fn test_sink_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: Error = io.into();
        assert!(err.is_sink());
        assert_eq!(err.to_string(), "sink write failed: closed");
    }

    #[test]
    fn test_erroneous_display() {
        let err: Error = StructuralError::Erroneous.into();
        assert_eq!(err.to_string(), "erroneous node cannot be unparsed");
    }
}
