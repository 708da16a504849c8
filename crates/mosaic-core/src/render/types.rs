use std::io::Write;

use crate::cursor::Cursor;
use crate::decls::{Declarations, TypeField};
use crate::writer::CursorWriter;

use super::sorted;

impl Declarations {
    /// Writes one `type KEY DEFINITION` line per type, then a blank line.
    pub fn render_types<W: Write>(&self, w: &mut CursorWriter<W>) -> Option<Cursor> {
        let mut cursor = None;
        if self.types.is_empty() {
            return cursor;
        }

        for (key, decl) in sorted(&self.types) {
            let mark = decl.cursor.as_ref();
            w.write("type ");
            if let Some(delta) = mark.and_then(|m| m.delta_in(TypeField::Key)) {
                cursor = Some(w.cursor_plus_delta(delta));
            }
            write!(w, "{} ", key);
            if let Some(delta) = mark.and_then(|m| m.delta_in(TypeField::Definition)) {
                cursor = Some(w.cursor_plus_delta(delta));
            }
            writeln!(w, "{}", decl.definition);
        }
        w.write("\n");
        cursor
    }
}

#[cfg(test)]
mod tests {
    use crate::cursor::Cursor;
    use crate::decls::{Declarations, TypeDecl, TypeField};
    use crate::writer::CursorWriter;

    fn render(decls: &Declarations) -> (String, Option<Cursor>) {
        let mut out = Vec::new();
        let mut w = CursorWriter::new(&mut out);
        let cursor = decls.render_types(&mut w);
        assert!(w.into_result().is_ok());
        (String::from_utf8(out).unwrap(), cursor)
    }

    #[test]
    fn test_types_sorted_with_trailing_blank_line() {
        let mut decls = Declarations::new();
        decls.add_type("Point", TypeDecl::new("struct { X, Y int }"));
        decls.add_type("Celsius", TypeDecl::new("float64"));

        let (text, cursor) = render(&decls);
        assert_eq!(
            text,
            "type Celsius float64\ntype Point struct { X, Y int }\n\n"
        );
        assert_eq!(cursor, None);
    }

    #[test]
    fn test_cursor_in_key_and_in_multiline_definition() {
        let mut decls = Declarations::new();
        decls.add_type(
            "A",
            TypeDecl::new("int").with_cursor(TypeField::Key, Cursor::new(0, 1)),
        );
        let (_, cursor) = render(&decls);
        assert_eq!(cursor, Some(Cursor::new(0, 6)));

        let mut decls = Declarations::new();
        decls.add_type("A", TypeDecl::new("int"));
        decls.add_type(
            "B",
            TypeDecl::new("struct {\n\tName string\n}")
                .with_cursor(TypeField::Definition, Cursor::new(1, 3)),
        );
        let (text, cursor) = render(&decls);
        assert_eq!(text, "type A int\ntype B struct {\n\tName string\n}\n\n");
        // A delta on a later line keeps its own column.
        assert_eq!(cursor, Some(Cursor::new(2, 3)));
    }
}
