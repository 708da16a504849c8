use std::io::Write;

use crate::cursor::Cursor;
use crate::decls::Declarations;
use crate::writer::CursorWriter;

use super::{render_binding, sorted};

impl Declarations {
    /// Writes `var ( ... )` with one line per variable.
    pub fn render_variables<W: Write>(&self, w: &mut CursorWriter<W>) -> Option<Cursor> {
        let mut cursor = None;
        if self.variables.is_empty() {
            return cursor;
        }

        w.write("var (\n");
        for (_, variable) in sorted(&self.variables) {
            w.write("\t");
            render_binding(w, variable, &mut cursor);
            w.write("\n");
        }
        w.write(")\n\n");
        cursor
    }
}
