//! Position-tracking writer with a sticky error.

use std::fmt;
use std::io::{self, Write};

use crate::cursor::Cursor;

/// Wraps an [`io::Write`] and keeps track of the line/column at the end of
/// everything written so far.
///
/// Only the first write failure is kept. After it, every write is skipped
/// (no bytes, no position change), so callers can issue a whole sequence of
/// writes and check [`CursorWriter::error`] once at the end.
#[derive(Debug)]
pub struct CursorWriter<W> {
    inner: W,
    error: Option<io::Error>,
    line: usize,
    col: usize,
}

impl<W: Write> CursorWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            error: None,
            line: 0,
            col: 0,
        }
    }

    /// Position at the end of what has been written so far.
    pub fn cursor(&self) -> Cursor {
        Cursor::new(self.line, self.col)
    }

    pub fn line(&self) -> usize {
        self.line
    }

    /// Where a position lands once the text it was recorded against is
    /// written starting at the current position.
    pub fn cursor_plus_delta(&self, delta: Cursor) -> Cursor {
        self.cursor().plus_delta(delta)
    }

    /// First error that happened while writing, if any.
    pub fn error(&self) -> Option<&io::Error> {
        self.error.as_ref()
    }

    pub fn has_failed(&self) -> bool {
        self.error.is_some()
    }

    /// Write `text`, unless an earlier write already failed.
    pub fn write(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.try_write(text) {
            self.error = Some(err);
        }
    }

    /// Formatted write, so `write!(w, ...)` works on a `CursorWriter`.
    pub fn write_fmt(&mut self, args: fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }
        match args.as_str() {
            Some(text) => self.write(text),
            None => self.write(&args.to_string()),
        }
    }

    /// Give back the wrapped writer, or the first error that happened.
    pub fn into_result(self) -> io::Result<W> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.inner),
        }
    }

    fn try_write(&mut self, text: &str) -> io::Result<()> {
        self.inner.write_all(text.as_bytes())?;
        self.advance(text);
        Ok(())
    }

    fn advance(&mut self, text: &str) {
        match text.rfind('\n') {
            Some(last) => {
                self.line += text.bytes().filter(|&b| b == b'\n').count();
                self.col = text.len() - last - 1;
            }
            None => self.col += text.len(),
        }
    }
}
