//! Output sinks: an explicit close, and the error precedence around it.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::error::{Error, Phase, Result};
use crate::writer::CursorWriter;

/// A write destination that must be closed explicitly, so close failures can
/// be reported instead of being lost on drop.
pub trait Sink: Write {
    fn close(self) -> io::Result<()>;
}

impl Sink for File {
    /// Syncs to disk so deferred write failures surface here, then drops.
    fn close(self) -> io::Result<()> {
        self.sync_all()
    }
}

impl Sink for Vec<u8> {
    fn close(self) -> io::Result<()> {
        Ok(())
    }
}

impl Sink for &mut Vec<u8> {
    fn close(self) -> io::Result<()> {
        Ok(())
    }
}

/// Close `sink` after `rendered` was produced on it.
///
/// The sink is always closed. A render error wins over a close error, so the
/// root cause is what gets reported.
pub fn close_after<S: Sink, T>(sink: S, rendered: Result<T>) -> Result<T> {
    let closed = sink.close();
    let value = rendered?;
    closed.map_err(|source| Error::Close { source })?;
    Ok(value)
}

/// Create (or truncate) the file at `path`.
pub fn create_file(path: &Path) -> Result<File> {
    File::create(path).map_err(|source| Error::Create {
        path: path.to_path_buf(),
        source,
    })
}

/// Write each line followed by `\n` to a freshly created file at `path`.
///
/// The first failing line is reported; the remaining lines are still consumed
/// but not written.
pub fn write_lines_to_file<I, L>(path: &Path, lines: I) -> Result<()>
where
    I: IntoIterator<Item = L>,
    L: AsRef<str>,
{
    let mut file = create_file(path)?;
    let written = write_lines(&mut file, lines);
    close_after(file, written)
}

fn write_lines<W, I, L>(out: W, lines: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = L>,
    L: AsRef<str>,
{
    let mut w = CursorWriter::new(out);
    let mut failed_at = None;
    for (index, line) in lines.into_iter().enumerate() {
        w.write(line.as_ref());
        w.write("\n");
        if failed_at.is_none() && w.has_failed() {
            failed_at = Some(index);
        }
    }
    w.into_result().map(|_| ()).map_err(|source| Error::Write {
        phase: Phase::Line(failed_at.unwrap_or_default()),
        cursor: None,
        source,
    })
}
