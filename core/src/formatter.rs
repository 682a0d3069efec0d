//! Token-stream formatter.
//!
//! [`Formatter`] sits between a [`ToTokens`](crate::ToTokens) tree and the
//! real sink. It decides what goes between two tokens by looking only at the
//! previous token and the current indentation:
//!
//! | Previous | New | Action |
//! |----------|-----|--------|
//! | `.` or `<` | any | write, no separator |
//! | `;` | `}` | dedent, newline, indent, write |
//! | `;` | other | newline, indent, write |
//! | `{` | `}` | dedent, newline, indent, write |
//! | `{` | other | newline, indent, write |
//! | other | `.` or `>` | write, no separator |
//! | other | `}` | dedent, newline, indent, write |
//! | other | other | one space (none at the start), write |
//!
//! Each `{` pushes one indentation unit as it is written and each `}` pops
//! one, so the depth always equals the number of unclosed braces.
//!
//! # Limitations
//!
//! - There is no column-aware wrapping. [`FormatterOptions::line_length`] is
//!   reserved for it.
//! - The formatter sees text only, so a generic `>` and a greater-than `>`
//!   are laid out identically, as are a generic `<` and a less-than `<`.
//! - `;` always ends a line, including the two inside a `for` header.

use std::io::Write;

use crate::{Error, FormatterOptions, Printer, Sink};

/// Mutable state of a [`Formatter`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatterState {
    /// Current indentation string, one unit per unclosed `{`.
    pub indentation: String,
    /// The token written by the previous call, empty before the first.
    pub last_token: String,
}

/// Pretty-printing [`Printer`] driven by the previous token.
///
/// Not thread-safe by construction: it is used through `&mut` and owns its
/// state. Create one per output stream.
///
/// # Example
///
/// ```ignore
/// use javast_core::{Formatter, Printer};
///
/// let mut f = Formatter::new(Vec::new());
/// for t in ["class", "A", "{", "int", "x", ";", "}"] {
///     f.word(t)?;
/// }
/// assert_eq!(f.into_inner(), b"class A {\n    int x ;\n}");
/// ```
#[derive(Debug)]
pub struct Formatter<W> {
    sink: Sink<W>,
    options: FormatterOptions,
    state: FormatterState,
    depth: usize,
}

impl<W: Write> Formatter<W> {
    /// Creates a formatter with [`FormatterOptions::DEFAULT`].
    pub fn new(inner: W) -> Self {
        Self::with_options(inner, FormatterOptions::DEFAULT)
    }

    pub fn with_options(inner: W, options: FormatterOptions) -> Self {
        Self {
            sink: Sink::new(inner),
            options,
            state: FormatterState::default(),
            depth: 0,
        }
    }

    #[inline]
    pub fn options(&self) -> &FormatterOptions {
        &self.options
    }

    #[inline]
    pub fn state(&self) -> &FormatterState {
        &self.state
    }

    /// Number of indentation units currently applied.
    #[inline]
    pub fn indent_depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn get_ref(&self) -> &W {
        self.sink.get_ref()
    }

    #[inline]
    pub fn into_inner(self) -> W {
        self.sink.into_inner()
    }

    fn indent(&mut self) {
        self.state.indentation.push_str(self.options.indentation);
        self.depth += 1;
        tracing::trace!(depth = self.depth, "indent");
    }

    /// Pops one indentation unit. Saturates at zero.
    fn dedent(&mut self) {
        if self.depth == 0 {
            return;
        }
        let len = self
            .state
            .indentation
            .len()
            .saturating_sub(self.options.indentation.len());
        self.state.indentation.truncate(len);
        self.depth -= 1;
        tracing::trace!(depth = self.depth, "dedent");
    }

    fn newline(&mut self) -> Result<usize, Error> {
        let mut n = self.sink.emit("\n")?;
        n += self.sink.emit(&self.state.indentation)?;
        Ok(n)
    }

    fn layout(&mut self, token: &str) -> Result<usize, Error> {
        match self.state.last_token.as_str() {
            "." | "<" => Ok(0),
            ";" | "{" => {
                if token == "}" {
                    self.dedent();
                }
                self.newline()
            }
            last => match token {
                "." | ">" => Ok(0),
                "}" => {
                    self.dedent();
                    self.newline()
                }
                _ if last.is_empty() => Ok(0),
                _ => self.sink.emit(" "),
            },
        }
    }
}

impl<W: Write> Printer for Formatter<W> {
    fn word(&mut self, token: &str) -> Result<usize, Error> {
        let mut n = self.layout(token)?;
        n += self.sink.emit(token)?;
        if token == "{" {
            self.indent();
        }
        self.state.last_token.clear();
        self.state.last_token.push_str(token);
        Ok(n)
    }

    fn bytes_written(&self) -> usize {
        self.sink.written()
    }
}
