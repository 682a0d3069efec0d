//! Formatter configuration.
//!
//! This module provides [`FormatterOptions`] for controlling the layout the
//! [`Formatter`](crate::Formatter) produces.
//!
//! # Example
//!
//! ```ignore
//! use javast_core::config::FormatterOptions;
//!
//! // Four-space indentation, 80 column target
//! let options = FormatterOptions::default();
//!
//! // Tabs instead
//! let options = FormatterOptions::new().with_indentation("\t");
//! ```

/// Default indentation unit: four spaces.
pub const INDENTATION: &str = "    ";

/// Default target line length.
///
/// Reserved for column-aware wrapping; the formatter does not wrap today.
pub const LINE_LENGTH: usize = 80;

/// Layout options for the token-stream formatter.
///
/// # Default Values
///
/// | Setting | Default |
/// |---------|---------|
/// | `indentation` | four spaces |
/// | `line_length` | 80 |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatterOptions {
    /// One level of indentation. Pushed after every `{`, popped at every `}`.
    pub indentation: &'static str,

    /// Target line length. Not enforced: the formatter never wraps lines.
    pub line_length: usize,
}

impl Default for FormatterOptions {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FormatterOptions {
    /// Default options, usable in const contexts.
    pub const DEFAULT: Self = Self {
        indentation: INDENTATION,
        line_length: LINE_LENGTH,
    };

    #[inline]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Sets the indentation unit.
    #[inline]
    pub const fn with_indentation(mut self, unit: &'static str) -> Self {
        self.indentation = unit;
        self
    }

    /// Sets the reserved target line length.
    #[inline]
    pub const fn with_line_length(mut self, columns: usize) -> Self {
        self.line_length = columns;
        self
    }
}
