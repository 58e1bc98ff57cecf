//! Indentation-aware line sink.
//!
//! The printer knows nothing about tables; it writes whatever lines it is handed,
//! prefixed by its current indent. Rendering and printing stay independent so the
//! same table can be nested at any depth of surrounding output.

use crate::error::Result;
use std::io::Write;

pub const DEFAULT_INDENT_WIDTH: usize = 2;

pub struct Printer<W: Write> {
    out: W,
    level: usize,
    unit: String,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W) -> Self {
        Self::with_indent_width(out, DEFAULT_INDENT_WIDTH)
    }

    pub fn with_indent_width(out: W, width: usize) -> Self {
        Self {
            out,
            level: 0,
            unit: " ".repeat(width),
        }
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn indent(&mut self) -> &mut Self {
        self.level += 1;
        self
    }

    /// Drops one indent level; stays at zero when already there.
    pub fn outdent(&mut self) -> &mut Self {
        self.level = self.level.saturating_sub(1);
        self
    }

    /// Runs `f` one level deeper, then restores the entry level whatever `f` did to
    /// it, even on error.
    pub fn indented<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let saved = self.level;
        self.level += 1;
        let result = f(self);
        self.level = saved;
        result
    }

    /// Writes `text` at the current indent. Embedded line breaks start new, equally
    /// indented lines; empty lines carry no indent.
    pub fn line(&mut self, text: &str) -> Result<()> {
        for part in text.split('\n') {
            if part.is_empty() {
                writeln!(self.out)?;
            } else {
                writeln!(self.out, "{}{}", self.unit.repeat(self.level), part)?;
            }
        }
        Ok(())
    }

    pub fn blank(&mut self) -> Result<()> {
        writeln!(self.out)?;
        Ok(())
    }

    pub fn lines<I, S>(&mut self, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.line(line.as_ref())?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
