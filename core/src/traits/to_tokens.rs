use super::printer::Printer;
use crate::{Error, Formatter, SpacedPrinter};

/// Trait for converting tree nodes back to tokens.
///
/// `ToTokens` is the unparsing protocol: a node writes its own keywords and
/// punctuation to the printer and recursively asks its children to do the
/// same, in declaration order.
///
/// # Required Methods
///
/// - `write(&self, printer)`: Write this value, returning the bytes written
///
/// # Provided Methods
///
/// - `to_source()`: Formatted source via [`Formatter`]
/// - `to_spaced()`: Space-joined tokens via [`SpacedPrinter`]
///
/// # Errors
///
/// The first error from the printer or from a child aborts the write and is
/// returned unchanged. Bytes already written stay written; the printer's
/// [`bytes_written`](Printer::bytes_written) reports them.
///
/// # Example
///
/// ```ignore
/// use javast_core::{Printer, ToTokens, Error};
///
/// struct Return(Option<Expr>);
///
/// impl ToTokens for Return {
///     fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
///         let mut n = p.word("return")?;
///         n += p.write(&self.0)?;
///         n += p.word(";")?;
///         Ok(n)
///     }
/// }
/// ```
///
/// # Blanket Implementations
///
/// - `Option<T>`: Writes nothing for `None`, delegates for `Some`
/// - `Box<T>`: Delegates to inner value
/// - `Vec<T>`: Writes each element in sequence, no separators
/// - `&T`: Delegates to referenced value
pub trait ToTokens {
    /// Write this value to the printer.
    fn write<P: Printer>(&self, printer: &mut P) -> Result<usize, Error>;

    /// Render as formatted source text.
    fn to_source(&self) -> Result<String, Error> {
        let mut printer = Formatter::new(Vec::new());
        self.write(&mut printer)?;
        Ok(String::from_utf8_lossy(&printer.into_inner()).into_owned())
    }

    /// Render as tokens joined by single spaces.
    fn to_spaced(&self) -> Result<String, Error> {
        let mut printer = SpacedPrinter::new(Vec::new());
        self.write(&mut printer)?;
        Ok(String::from_utf8_lossy(&printer.into_inner()).into_owned())
    }
}

impl<T: ToTokens> ToTokens for Option<T> {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        match self {
            Some(v) => v.write(p),
            None => Ok(0),
        }
    }
}

impl<T: ToTokens + ?Sized> ToTokens for Box<T> {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        self.as_ref().write(p)
    }
}

impl<T: ToTokens> ToTokens for Vec<T> {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        let mut n = 0;
        for item in self {
            n += item.write(p)?;
        }
        Ok(n)
    }
}

impl<T: ToTokens + ?Sized> ToTokens for &T {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        (*self).write(p)
    }
}

impl ToTokens for str {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        p.word(self)
    }
}

impl ToTokens for String {
    fn write<P: Printer>(&self, p: &mut P) -> Result<usize, Error> {
        p.word(self)
    }
}
