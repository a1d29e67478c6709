//! Plain-text output, one line per row.

use std::io::Write;

use super::{AsciiOutput, OutputError};
use crate::pipeline::CharGrid;

/// Writes grids as plain text to any writer (stdout in the binary).
#[derive(Debug)]
pub struct ConsoleOutput<W: Write> {
    writer: W,
}

impl<W: Write> ConsoleOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl ConsoleOutput<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> AsciiOutput for ConsoleOutput<W> {
    fn out(&mut self, grid: &CharGrid) -> Result<(), OutputError> {
        let mut line = String::with_capacity(grid.cols() * 4 + 1);
        for row in grid.lines() {
            line.clear();
            line.extend(row.iter());
            line.push('\n');
            self.writer.write_all(line.as_bytes())?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
