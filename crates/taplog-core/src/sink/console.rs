//! Console sink

use std::io::{self, Write};

use crate::error::LogResult;

/// Writes formatted lines to standard output, one write per call
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    /// Create a new console sink
    pub fn new() -> Self {
        Self
    }

    /// Write one formatted line (trailing newline included) to stdout
    pub fn write_line(&self, line: &str) -> LogResult<()> {
        let mut out = io::stdout().lock();
        out.write_all(line.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
