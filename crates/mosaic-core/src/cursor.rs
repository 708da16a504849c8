//! Positions in cell input and in the composed file.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A zero-based `(line, col)` position.
///
/// Columns count bytes, the same unit the rendered text is measured in.
/// "No position" is expressed as `Option::<Cursor>::None` throughout the crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cursor {
    pub line: usize,
    pub col: usize,
}

impl Cursor {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }

    /// Compose `self` (a position at the start of some text) with a delta
    /// recorded relative to the start of that text.
    ///
    /// A delta on a later line carries an absolute column; a delta on the
    /// same line is added to the current column.
    pub fn plus_delta(self, delta: Cursor) -> Cursor {
        if delta.line > 0 {
            Cursor {
                line: self.line + delta.line,
                col: delta.col,
            }
        } else {
            Cursor {
                line: self.line,
                col: self.col + delta.col,
            }
        }
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Error returned when parsing a `LINE:COL` string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid cursor {0:?}: expected LINE:COL")]
pub struct ParseCursorError(String);

impl FromStr for Cursor {
    type Err = ParseCursorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCursorError(s.to_string());
        let (line, col) = s.split_once(':').ok_or_else(err)?;
        Ok(Cursor {
            line: line.trim().parse().map_err(|_| err())?,
            col: col.trim().parse().map_err(|_| err())?,
        })
    }
}
