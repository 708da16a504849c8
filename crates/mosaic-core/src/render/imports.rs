use std::io::Write;

use crate::cursor::Cursor;
use crate::decls::{Declarations, ImportField};
use crate::writer::CursorWriter;

use super::{non_empty, quote, sorted};

impl Declarations {
    /// Writes `import ( ... )` with one line per import.
    pub fn render_imports<W: Write>(&self, w: &mut CursorWriter<W>) -> Option<Cursor> {
        let mut cursor = None;
        if self.imports.is_empty() {
            return cursor;
        }

        w.write("import (\n");
        for (_, import) in sorted(&self.imports) {
            let mark = import.cursor.as_ref();
            w.write("\t");
            if let Some(alias) = non_empty(&import.alias) {
                if let Some(delta) = mark.and_then(|m| m.delta_in(ImportField::Alias)) {
                    cursor = Some(w.cursor_plus_delta(delta));
                }
                write!(w, "{} ", alias);
            }
            if let Some(delta) = mark.and_then(|m| m.delta_in(ImportField::Path)) {
                cursor = Some(w.cursor_plus_delta(delta));
            }
            writeln!(w, "{}", quote(&import.path));
        }
        w.write(")\n\n");
        cursor
    }
}
