//! Output sinks for the print-style queries.

use std::fmt::Display;
use std::io::{self, Write};

/// Destination for labels emitted by a query.
pub trait LabelSink<T: ?Sized> {
    /// Receives one label. An error stops the running query.
    fn emit(&mut self, label: &T) -> io::Result<()>;
}

impl<T: Clone> LabelSink<T> for Vec<T> {
    fn emit(&mut self, label: &T) -> io::Result<()> {
        self.push(label.clone());
        Ok(())
    }
}

impl<T: ?Sized, S: LabelSink<T> + ?Sized> LabelSink<T> for &mut S {
    fn emit(&mut self, label: &T) -> io::Result<()> {
        (**self).emit(label)
    }
}

/// Writes each label on its own line.
///
/// # Example
///
/// ```rust
/// use graphwalk_core::query::{LabelSink, LineSink};
///
/// let mut sink = LineSink::new(Vec::new());
/// sink.emit("cat").unwrap();
/// sink.emit("dog").unwrap();
/// assert_eq!(sink.lines(), 2);
/// assert_eq!(sink.into_inner(), b"cat\ndog\n");
/// ```
#[derive(Debug)]
pub struct LineSink<W> {
    writer: W,
    lines: usize,
}

impl<W: Write> LineSink<W> {
    /// Wraps a writer.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer, lines: 0 }
    }

    /// Returns the number of lines written so far.
    #[must_use]
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Unwraps the writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl LineSink<io::Stdout> {
    /// Sink printing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<T, W> LabelSink<T> for LineSink<W>
where
    T: Display + ?Sized,
    W: Write,
{
    fn emit(&mut self, label: &T) -> io::Result<()> {
        writeln!(self.writer, "{label}")?;
        self.lines += 1;
        Ok(())
    }
}
