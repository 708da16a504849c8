use std::io::Write;

use crate::cursor::Cursor;
use crate::decls::Declarations;
use crate::writer::CursorWriter;

use super::sorted;

impl Declarations {
    /// Writes every function definition followed by a blank line.
    ///
    /// Init hooks are written as stored: their text already declares `init`.
    pub fn render_functions<W: Write>(&self, w: &mut CursorWriter<W>) -> Option<Cursor> {
        let mut cursor = None;
        for (_, function) in sorted(&self.functions) {
            if let Some(delta) = function.cursor {
                cursor = Some(w.cursor_plus_delta(delta));
            }
            writeln!(w, "{}\n", function.definition);
        }
        cursor
    }
}
