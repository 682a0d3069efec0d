//! Plain printers over any [`std::io::Write`].

use std::io::{self, Write};

use crate::{Error, Printer};

/// A byte-counting wrapper around an output sink.
///
/// Shared by every printer in this crate so that partial progress is known
/// even when the sink fails halfway through a tree.
#[derive(Debug, Default)]
pub struct Sink<W> {
    inner: W,
    written: usize,
}

impl<W: Write> Sink<W> {
    #[inline]
    pub fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }

    /// Write all of `text`.
    ///
    /// Every chunk the sink accepts is counted, even when a later chunk of
    /// the same token fails.
    pub fn emit(&mut self, text: &str) -> Result<usize, Error> {
        let mut rest = text.as_bytes();
        while !rest.is_empty() {
            match self.inner.write(rest) {
                Ok(0) => return Err(io::Error::from(io::ErrorKind::WriteZero).into()),
                Ok(n) => {
                    self.written += n;
                    rest = &rest[n..];
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(text.len())
    }

    #[inline]
    pub fn written(&self) -> usize {
        self.written
    }

    #[inline]
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    #[inline]
    pub fn into_inner(self) -> W {
        self.inner
    }
}

/// Writes every token verbatim, with nothing in between.
///
/// Useful when a downstream tool re-lexes the output, or when the tokens are
/// collected one by one.
#[derive(Debug, Default)]
pub struct RawPrinter<W> {
    sink: Sink<W>,
}

impl<W: Write> RawPrinter<W> {
    #[inline]
    pub fn new(inner: W) -> Self {
        Self {
            sink: Sink::new(inner),
        }
    }

    #[inline]
    pub fn get_ref(&self) -> &W {
        self.sink.get_ref()
    }

    #[inline]
    pub fn into_inner(self) -> W {
        self.sink.into_inner()
    }
}

impl<W: Write> Printer for RawPrinter<W> {
    fn word(&mut self, token: &str) -> Result<usize, Error> {
        self.sink.emit(token)
    }

    fn bytes_written(&self) -> usize {
        self.sink.written()
    }
}

/// Joins tokens with a single space.
///
/// This is the unformatted, space-joined rendering: one space between every
/// pair of tokens, none before the first.
#[derive(Debug, Default)]
pub struct SpacedPrinter<W> {
    sink: Sink<W>,
    started: bool,
}

impl<W: Write> SpacedPrinter<W> {
    #[inline]
    pub fn new(inner: W) -> Self {
        Self {
            sink: Sink::new(inner),
            started: false,
        }
    }

    #[inline]
    pub fn get_ref(&self) -> &W {
        self.sink.get_ref()
    }

    #[inline]
    pub fn into_inner(self) -> W {
        self.sink.into_inner()
    }
}

impl<W: Write> Printer for SpacedPrinter<W> {
    fn word(&mut self, token: &str) -> Result<usize, Error> {
        let mut n = 0;
        if self.started {
            n += self.sink.emit(" ")?;
        }
        n += self.sink.emit(token)?;
        self.started = true;
        Ok(n)
    }

    fn bytes_written(&self) -> usize {
        self.sink.written()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Accepts `budget` bytes, then fails every write.
    struct Limited {
        buf: Vec<u8>,
        budget: usize,
    }

    impl Write for Limited {
        fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
            if self.buf.len() + data.len() > self.budget {
                return Err(std::io::Error::other("sink full"));
            }
            self.buf.extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    /// Takes as much of each write as fits in `budget`, then fails.
    struct Partial {
        buf: Vec<u8>,
        budget: usize,
    }

    impl Write for Partial {
        fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
            let room = self.budget - self.buf.len();
            if room == 0 {
                return Err(std::io::Error::other("sink full"));
            }
            let n = room.min(data.len());
            self.buf.extend_from_slice(&data[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_partial_token_is_counted() {
        let mut sink = Sink::new(Partial {
            buf: Vec::new(),
            budget: 4,
        });
        assert!(sink.emit("return").unwrap_err().is_sink());
        assert_eq!(sink.written(), 4);
        assert_eq!(sink.get_ref().buf, b"retu");
    }

    #[test]
    fn test_partial_token_in_spaced_printer() {
        let mut p = SpacedPrinter::new(Partial {
            buf: Vec::new(),
            budget: 9,
        });
        p.word("return").unwrap();
        assert!(p.word("value").is_err());
        assert_eq!(p.bytes_written(), 9);
        assert_eq!(p.into_inner().buf, b"return va");
    }

    #[test]
    fn test_raw_printer_concatenates() {
        let mut p = RawPrinter::new(Vec::new());
        p.word("a").unwrap();
        p.word(".").unwrap();
        p.word("b").unwrap();
        assert_eq!(p.bytes_written(), 3);
        assert_eq!(p.into_inner(), b"a.b");
    }

    #[test]
    fn test_spaced_printer_joins() {
        let mut p = SpacedPrinter::new(Vec::new());
        assert_eq!(p.word("return").unwrap(), 6);
        assert_eq!(p.word("x").unwrap(), 2);
        p.word(";").unwrap();
        assert_eq!(p.into_inner(), b"return x ;");
    }

    #[test]
    fn test_separated_has_no_trailing_separator() {
        let mut p = SpacedPrinter::new(Vec::new());
        let items = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        p.write_separated(&items, ",").unwrap();
        assert_eq!(p.into_inner(), b"a , b , c");
    }

    #[test]
    fn test_enclosed_empty_writes_nothing() {
        let mut p = SpacedPrinter::new(Vec::new());
        let items: Vec<String> = Vec::new();
        assert_eq!(p.write_enclosed("<", &items, ",", ">").unwrap(), 0);
        assert_eq!(p.write_clause("throws", &items, ",").unwrap(), 0);
        assert_eq!(p.bytes_written(), 0);
    }

    #[test]
    fn test_sink_failure_keeps_partial_count() {
        let mut p = RawPrinter::new(Limited {
            buf: Vec::new(),
            budget: 4,
        });
        p.word("ab").unwrap();
        p.word("cd").unwrap();
        let err = p.word("ef").unwrap_err();
        assert!(err.is_sink());
        assert_eq!(p.bytes_written(), 4);
        assert_eq!(p.get_ref().buf, b"abcd");
    }
}
