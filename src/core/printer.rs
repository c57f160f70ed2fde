use crate::utils::error::Result;
use std::fmt::Display;
use std::io::Write;

/// Writes one value per line to any writer.
pub struct LinePrinter<W: Write> {
    writer: W,
}

impl<W: Write> LinePrinter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn print_line<T: Display + ?Sized>(&mut self, value: &T) -> Result<()> {
        writeln!(self.writer, "{}", value)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
