use std::io::Write;

use crate::cursor::Cursor;
use crate::decls::Declarations;
use crate::writer::CursorWriter;

use super::{render_binding, sorted};

impl Declarations {
    /// Writes constants block by block.
    ///
    /// Blocks are ordered by the name of their first constant. Inside a block
    /// declaration order is kept, since later entries may depend on earlier
    /// ones (`iota`). A block of one is written as a plain `const` line.
    pub fn render_constants<W: Write>(&self, w: &mut CursorWriter<W>) -> Option<Cursor> {
        let mut cursor = None;
        let mut blocks: Vec<_> = sorted(&self.constants)
            .into_iter()
            .map(|(_, block)| block)
            .collect();
        // Map keys come from the caller and may disagree with the head entry;
        // ties keep map key order.
        blocks.sort_by(|a, b| a.key().cmp(b.key()));
        for block in blocks {
            if let [constant] = block.entries() {
                w.write("const ");
                render_binding(w, constant, &mut cursor);
                w.write("\n\n");
                continue;
            }

            w.write("const (\n");
            for constant in block.entries() {
                w.write("\t");
                render_binding(w, constant, &mut cursor);
                w.write("\n");
            }
            w.write(")\n\n");
        }
        cursor
    }
}
