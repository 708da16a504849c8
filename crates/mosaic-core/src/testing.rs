//! Test sinks that fail on demand.

use std::io::{self, Write};

use crate::sink::Sink;

/// Accepts `budget` bytes, then fails every write. Optionally fails on close.
#[derive(Debug, Default)]
pub(crate) struct FailAfter {
    written: Vec<u8>,
    budget: usize,
    calls: usize,
    close_fails: bool,
    closed: bool,
}

impl FailAfter {
    pub(crate) fn new(budget: usize) -> Self {
        Self {
            budget,
            ..Default::default()
        }
    }

    pub(crate) fn failing_close(mut self) -> Self {
        self.close_fails = true;
        self
    }

    pub(crate) fn written(&self) -> &[u8] {
        &self.written
    }

    pub(crate) fn write_calls(&self) -> usize {
        self.calls
    }

    pub(crate) fn closed(&self) -> bool {
        self.closed
    }
}

impl Write for FailAfter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.calls += 1;
        let room = self.budget - self.written.len();
        if room == 0 && !buf.is_empty() {
            return Err(io::Error::other("disk full"));
        }
        let n = room.min(buf.len());
        self.written.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Sink for &mut FailAfter {
    fn close(self) -> io::Result<()> {
        self.closed = true;
        if self.close_fails {
            return Err(io::Error::other("close failed"));
        }
        Ok(())
    }
}
