use std::fmt::Display;
use std::io::{self, Stdout, Write};

use tracing::trace;

use crate::core::Result;

/// Line-oriented message sink.
///
/// Every message is written followed by a newline and mirrored to `tracing`
/// at trace level.
pub struct Logger<W: Write> {
    writer: W,
    lines: usize,
}

impl Logger<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Logger<Vec<u8>> {
    /// In-memory logger, mostly useful for capturing output in tests.
    pub fn buffer() -> Self {
        Self::new(Vec::new())
    }

    /// Captured lines so far. Invalid UTF-8 is replaced.
    pub fn captured(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.writer)
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl<W: Write> Logger<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, lines: 0 }
    }

    pub fn emit(&mut self, message: impl Display) -> Result<()> {
        let line = message.to_string();
        trace!(line = %line, "emit");
        writeln!(self.writer, "{}", line)?;
        self.lines += 1;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Number of messages emitted.
    pub fn lines(&self) -> usize {
        self.lines
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
