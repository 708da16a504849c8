//! Composition of a complete source file from cell content.
//!
//! Two paths produce the file the cell is compiled from:
//! - [`Composer::write_declarations`] renders a parsed [`Declarations`] model
//!   (imports, types, constants, variables, functions) plus an optional entry
//!   point.
//! - [`Composer::write_lines`] copies a cell's raw lines, synthesizing an
//!   entry point when a directive line (`%%`) asks for one.
//!
//! Both return where the cell cursor landed in the file, if anywhere.
//!
//! # Output
//!
//! ```text
//! package main        preamble
//! import ( ... )      imports, sorted
//! type ...            types, sorted
//! const ...           constant blocks, in declaration order inside a block
//! var ( ... )         variables, sorted
//! func ...            functions, sorted
//! func main() {...}   entry point, if any
//! ```
//!
//! [`Declarations`]: crate::decls::Declarations

mod config;
mod declarations;
mod lines;

use std::io::Write;
use std::path::Path;

use rustc_hash::FxHashSet;

use crate::cursor::Cursor;
use crate::decls::{Declarations, Function};
use crate::error::{Error, Phase, Result};
use crate::sink::{close_after, create_file, Sink};
use crate::writer::CursorWriter;

pub use config::ComposerConfig;

/// Writes complete source files from cell content.
#[derive(Debug, Clone, Default)]
pub struct Composer {
    config: ComposerConfig,
}

impl Composer {
    pub fn new(config: ComposerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ComposerConfig {
        &self.config
    }

    /// Indices of the lines that are not source code.
    pub fn excluded_lines<L: AsRef<str>>(&self, lines: &[L]) -> FxHashSet<usize> {
        lines
            .iter()
            .enumerate()
            .filter(|(_, line)| self.config.is_excluded(line.as_ref()))
            .map(|(index, _)| index)
            .collect()
    }

    /// [`Composer::write_declarations`] into `sink`, which is closed afterwards.
    pub fn declarations_into<S: Sink>(
        &self,
        mut sink: S,
        decls: &Declarations,
        entry_point: Option<&Function>,
    ) -> Result<Option<Cursor>> {
        let rendered = self.write_declarations(&mut sink, decls, entry_point);
        close_after(sink, rendered)
    }

    /// [`Composer::write_declarations`] into a new file at `path`.
    pub fn declarations_to_file(
        &self,
        path: &Path,
        decls: &Declarations,
        entry_point: Option<&Function>,
    ) -> Result<Option<Cursor>> {
        let file = create_file(path)?;
        let cursor = self.declarations_into(file, decls, entry_point)?;
        tracing::debug!("Wrote declarations to {}", path.display());
        Ok(cursor)
    }

    /// [`Composer::write_lines`] into `sink`, which is closed afterwards.
    pub fn lines_into<S: Sink, L: AsRef<str>>(
        &self,
        mut sink: S,
        lines: &[L],
        skip: &FxHashSet<usize>,
        cursor_in_cell: Option<Cursor>,
    ) -> Result<Option<Cursor>> {
        let rendered = self.write_lines(&mut sink, lines, skip, cursor_in_cell);
        close_after(sink, rendered)
    }

    /// [`Composer::write_lines`] into a new file at `path`.
    pub fn lines_to_file<L: AsRef<str>>(
        &self,
        path: &Path,
        lines: &[L],
        skip: &FxHashSet<usize>,
        cursor_in_cell: Option<Cursor>,
    ) -> Result<Option<Cursor>> {
        let file = create_file(path)?;
        let cursor = self.lines_into(file, lines, skip, cursor_in_cell)?;
        tracing::debug!("Wrote {} cell lines to {}", lines.len(), path.display());
        Ok(cursor)
    }

    fn write_preamble<W: Write>(&self, w: &mut CursorWriter<W>) {
        writeln!(w, "package {}\n", self.config.package);
    }
}

/// Remembers the phase during which the writer first failed.
///
/// Phases keep running after a failure (the writer ignores them), so this
/// is what ties the error back to where it happened. The cursor mapped so
/// far travels with the error.
#[derive(Debug, Default)]
struct FirstFailure(Option<Phase>);

impl FirstFailure {
    fn check<W: Write>(&mut self, w: &CursorWriter<W>, phase: Phase) {
        if self.0.is_none() && w.has_failed() {
            self.0 = Some(phase);
        }
    }

    fn finish<W: Write>(
        self,
        w: CursorWriter<W>,
        cursor: Option<Cursor>,
    ) -> Result<Option<Cursor>> {
        match w.into_result() {
            Ok(_) => Ok(cursor),
            Err(source) => Err(Error::Write {
                phase: self.0.unwrap_or(Phase::Preamble),
                cursor,
                source,
            }),
        }
    }
}
