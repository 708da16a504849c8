//! Error types for mosaic-core.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::cursor::Cursor;

/// Result type for mosaic-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Composition step during which a write failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Preamble,
    Imports,
    Types,
    Constants,
    Variables,
    Functions,
    EntryPoint,
    /// A cell input line, by index.
    Line(usize),
    WrapperClose,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Preamble => f.write_str("preamble"),
            Phase::Imports => f.write_str("imports"),
            Phase::Types => f.write_str("types"),
            Phase::Constants => f.write_str("constants"),
            Phase::Variables => f.write_str("variables"),
            Phase::Functions => f.write_str("functions"),
            Phase::EntryPoint => f.write_str("entry point"),
            Phase::Line(index) => write!(f, "line {}", index),
            Phase::WrapperClose => f.write_str("wrapper close"),
        }
    }
}

/// Errors that can occur in mosaic-core.
#[derive(Debug, Error)]
pub enum Error {
    /// The output file could not be created; nothing was written.
    #[error("failed to create {path:?}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// First write failure on the output, tagged with the step that hit it.
    ///
    /// `cursor` is where the cursor would have landed had the write gone
    /// through, when that could still be worked out.
    #[error("write failed in {phase}: {source}")]
    Write {
        phase: Phase,
        cursor: Option<Cursor>,
        #[source]
        source: std::io::Error,
    },

    /// Closing the output failed after everything was written.
    #[error("failed to close output: {source}")]
    Close {
        #[source]
        source: std::io::Error,
    },

    /// Parsing the cell contents failed upstream.
    #[error("failed to parse cell contents")]
    ParseFailed,

    /// A cursor was requested but no output position was produced for it.
    #[error("cursor position not rendered in composed file")]
    CursorLost,

    /// A constant block was built without entries.
    #[error("constant block has no entries")]
    EmptyConstBlock,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Turn "a cursor was requested and none came out" into [`Error::CursorLost`].
///
/// Not requesting a cursor is fine and yields `Ok(None)`.
pub fn ensure_mapped(requested: bool, mapped: Option<Cursor>) -> Result<Option<Cursor>> {
    if requested && mapped.is_none() {
        return Err(Error::CursorLost);
    }
    Ok(mapped)
}
