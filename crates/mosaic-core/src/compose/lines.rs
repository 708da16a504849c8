use std::io::Write;

use rustc_hash::FxHashSet;

use crate::cursor::Cursor;
use crate::error::{Phase, Result};
use crate::writer::CursorWriter;

use super::{Composer, FirstFailure};

impl Composer {
    /// Write a complete file from the raw lines of a single cell.
    ///
    /// Lines in `skip` are left out. A directive line (`%%` by default) opens
    /// the entry-point function: every following line is indented into it and
    /// the function is closed after the last line. Directives are recognized
    /// before `skip` is consulted, since directive lines are usually skipped
    /// too.
    ///
    /// `cursor_in_cell` is mapped when its line is written; if that line is
    /// skipped or is the directive, the result is `None`.
    pub fn write_lines<W: Write, L: AsRef<str>>(
        &self,
        out: W,
        lines: &[L],
        skip: &FxHashSet<usize>,
        cursor_in_cell: Option<Cursor>,
    ) -> Result<Option<Cursor>> {
        let mut w = CursorWriter::new(out);
        let mut failure = FirstFailure::default();
        let mut cursor = None;

        self.write_preamble(&mut w);
        failure.check(&w, Phase::Preamble);

        let mut wrapper_open = false;
        for (index, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            if self.config.is_directive(line) {
                if !wrapper_open {
                    tracing::trace!(
                        "Directive on line {} opens {}()",
                        index,
                        self.config.entry_point
                    );
                    self.open_wrapper(&mut w);
                    wrapper_open = true;
                }
                failure.check(&w, Phase::Line(index));
                continue;
            }
            if skip.contains(&index) {
                continue;
            }

            if wrapper_open && !line.is_empty() {
                w.write(&self.config.indent);
            }
            if let Some(at) = cursor_in_cell.filter(|at| at.line == index) {
                cursor = Some(w.cursor_plus_delta(Cursor::new(0, at.col)));
            }
            w.write(line);
            w.write("\n");
            failure.check(&w, Phase::Line(index));
        }

        if wrapper_open {
            w.write("\n}\n");
            failure.check(&w, Phase::WrapperClose);
        }

        tracing::debug!(
            "Composed {} lines from {} cell lines, cursor: {:?}",
            w.line(),
            lines.len(),
            cursor
        );
        failure.finish(w, cursor)
    }

    fn open_wrapper<W: Write>(&self, w: &mut CursorWriter<W>) {
        writeln!(w, "func {}() {{", self.config.entry_point);
        for statement in &self.config.wrapper_prologue {
            writeln!(w, "{}{}", self.config.indent, statement);
        }
    }
}
