use super::to_tokens::ToTokens;
use crate::Error;

/// Trait for consuming a stream of lexical tokens.
///
/// `Printer` is the sink side of unparsing. [`ToTokens`] implementations call
/// [`word`](Printer::word) once per lexical token (identifier, keyword or
/// punctuation) and never write whitespace themselves; what goes between
/// tokens is the printer's decision.
///
/// # Required Methods
///
/// - `word(token)`: Emit one token, returning the bytes it cost
/// - `bytes_written()`: Running total of bytes written to the sink
///
/// # Provided Methods
///
/// - `token(t)`: Emit anything that spells itself via `AsRef<str>`
/// - `write(value)`: Write a `ToTokens` value
/// - `write_separated(items, sep)`: Items with `n - 1` separators
/// - `write_enclosed(open, items, sep, close)`: Same, wrapped; nothing when empty
/// - `write_clause(lead, items, sep)`: Same, introduced by a keyword; nothing when empty
///
/// # Implementations
///
/// - [`RawPrinter`](crate::RawPrinter): tokens concatenated verbatim
/// - [`SpacedPrinter`](crate::SpacedPrinter): tokens joined by single spaces
/// - [`Formatter`](crate::Formatter): whitespace, newlines and indentation
///
/// # Example
///
/// ```ignore
/// use javast_core::{Printer, SpacedPrinter};
///
/// let mut printer = SpacedPrinter::new(Vec::new());
/// printer.word("return")?;
/// printer.word("x")?;
/// printer.word(";")?;
/// assert_eq!(printer.into_inner(), b"return x ;");
/// ```
pub trait Printer: Sized {
    /// Emit a single lexical token.
    ///
    /// Returns the number of bytes written to the underlying sink for this
    /// call, separators included.
    fn word(&mut self, token: &str) -> Result<usize, Error>;

    /// Total bytes written to the underlying sink so far.
    ///
    /// Still accurate after a failed write, so callers can report partial
    /// progress.
    fn bytes_written(&self) -> usize;

    /// Emit a token that knows its own spelling.
    fn token<T: AsRef<str>>(&mut self, token: T) -> Result<usize, Error> {
        self.word(token.as_ref())
    }

    /// Write a value implementing `ToTokens`.
    fn write<T: ToTokens + ?Sized>(&mut self, value: &T) -> Result<usize, Error> {
        value.write(self)
    }

    /// Write items with a separator token between each pair.
    ///
    /// No leading or trailing separator is emitted.
    fn write_separated<'a, T, I, S>(&mut self, items: I, sep: S) -> Result<usize, Error>
    where
        T: ToTokens + 'a,
        I: IntoIterator<Item = &'a T>,
        S: AsRef<str>,
    {
        let mut n = 0;
        for (idx, item) in items.into_iter().enumerate() {
            if idx > 0 {
                n += self.word(sep.as_ref())?;
            }
            n += item.write(self)?;
        }
        Ok(n)
    }

    /// Write `open items… close`, or nothing at all for an empty list.
    ///
    /// Used for purely list-introducing brackets such as `<…>`.
    fn write_enclosed<T, O, S, C>(
        &mut self,
        open: O,
        items: &[T],
        sep: S,
        close: C,
    ) -> Result<usize, Error>
    where
        T: ToTokens,
        O: AsRef<str>,
        S: AsRef<str>,
        C: AsRef<str>,
    {
        if items.is_empty() {
            return Ok(0);
        }
        let mut n = self.word(open.as_ref())?;
        n += self.write_separated(items, sep)?;
        n += self.word(close.as_ref())?;
        Ok(n)
    }

    /// Write `lead items…`, or nothing at all for an empty list.
    ///
    /// Used for clauses such as `throws a , b` or `implements A , B`.
    fn write_clause<T, L, S>(&mut self, lead: L, items: &[T], sep: S) -> Result<usize, Error>
    where
        T: ToTokens,
        L: AsRef<str>,
        S: AsRef<str>,
    {
        if items.is_empty() {
            return Ok(0);
        }
        let mut n = self.word(lead.as_ref())?;
        n += self.write_separated(items, sep)?;
        Ok(n)
    }
}
