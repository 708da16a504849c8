use std::io::Write;

use crate::cursor::Cursor;
use crate::decls::{Declarations, Function};
use crate::error::{Phase, Result};
use crate::writer::CursorWriter;

use super::{Composer, FirstFailure};

type Renderer<W> = fn(&Declarations, &mut CursorWriter<W>) -> Option<Cursor>;

impl Composer {
    /// Write a complete file from `decls`, followed by `entry_point` if given.
    ///
    /// Returns where the cursor marked in the declarations landed. Each
    /// category may report one; the last one reported wins.
    ///
    /// A write failure does not stop the remaining categories from running
    /// (they write nothing); the error names the category that hit it.
    pub fn write_declarations<W: Write>(
        &self,
        out: W,
        decls: &Declarations,
        entry_point: Option<&Function>,
    ) -> Result<Option<Cursor>> {
        let mut w = CursorWriter::new(out);
        let mut failure = FirstFailure::default();
        let mut cursor = None;

        self.write_preamble(&mut w);
        failure.check(&w, Phase::Preamble);

        let renderers: [(Phase, Renderer<W>); 5] = [
            (Phase::Imports, Declarations::render_imports),
            (Phase::Types, Declarations::render_types),
            (Phase::Constants, Declarations::render_constants),
            (Phase::Variables, Declarations::render_variables),
            (Phase::Functions, Declarations::render_functions),
        ];
        for (phase, render) in renderers {
            if let Some(mapped) = render(decls, &mut w) {
                cursor = Some(mapped);
            }
            failure.check(&w, phase);
        }

        if let Some(entry_point) = entry_point {
            w.write("\n");
            if let Some(delta) = entry_point.cursor {
                cursor = Some(entry_point_cursor(w.line(), delta));
            }
            writeln!(w, "{}", entry_point.definition);
            failure.check(&w, Phase::EntryPoint);
        }

        tracing::debug!(
            "Composed {} lines from declarations, cursor: {:?}",
            w.line(),
            cursor
        );
        failure.finish(w, cursor)
    }
}

/// Cursor inside the entry point: the recorded line is offset by the current
/// line and the recorded column is kept as is.
///
/// This differs from [`Cursor::plus_delta`], which adds the current column on
/// the first line. The entry point is always written right after a newline,
/// at column 0, where both give the same result.
fn entry_point_cursor(line: usize, delta: Cursor) -> Cursor {
    Cursor::new(line + delta.line, delta.col)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decls::{
        BindingField, ConstBlock, Constant, FunctionKey, Import, ImportField, TypeDecl, Variable,
    };
    use crate::error::Error;
    use crate::testing::FailAfter;

    fn sample() -> Declarations {
        let mut decls = Declarations::new();
        decls.add_import(Import::new("fmt"));
        decls.add_import(Import::new("os"));
        decls.add_type("Celsius", TypeDecl::new("float64"));
        decls.add_const_block(
            ConstBlock::new(vec![
                Constant::new("Low").with_value("iota"),
                Constant::new("High"),
            ])
            .unwrap(),
        );
        decls.add_variable(Variable::new("temp").with_type("Celsius"));
        decls.add_function(
            FunctionKey::named("show"),
            Function::new("func show() {\n\tfmt.Println(temp)\n}"),
        );
        decls
    }

    fn compose(decls: &Declarations, entry_point: Option<&Function>) -> (String, Option<Cursor>) {
        let mut out = Vec::new();
        let cursor = Composer::default()
            .write_declarations(&mut out, decls, entry_point)
            .unwrap();
        (String::from_utf8(out).unwrap(), cursor)
    }

    #[test]
    fn test_full_file_layout() {
        let entry = Function::new("func main() {\n\tshow()\n}");
        let (text, cursor) = compose(&sample(), Some(&entry));

        assert_eq!(
            text,
            "package main\n\n\
             import (\n\t\"fmt\"\n\t\"os\"\n)\n\n\
             type Celsius float64\n\n\
             const (\n\tLow = iota\n\tHigh\n)\n\n\
             var (\n\ttemp Celsius\n)\n\n\
             func show() {\n\tfmt.Println(temp)\n}\n\n\
             \nfunc main() {\n\tshow()\n}\n"
        );
        assert_eq!(cursor, None);
    }

    #[test]
    fn test_empty_declarations_write_only_preamble() {
        let (text, cursor) = compose(&Declarations::new(), None);
        assert_eq!(text, "package main\n\n");
        assert_eq!(cursor, None);
    }

    #[test]
    fn test_same_model_same_bytes() {
        let mut decls = sample();
        for name in ["zeta", "alpha", "mid", "beta", "omega"] {
            decls.add_variable(Variable::new(name).with_value("1"));
            decls.add_import(Import::new(format!("example.com/{}", name)).with_alias(name));
        }
        let first = compose(&decls, None).0;

        // Rebuild the maps in a different insertion order.
        let mut shuffled = Declarations::new();
        let mut imports: Vec<_> = decls.imports.clone().into_iter().collect();
        imports.reverse();
        shuffled.imports = imports.into_iter().collect();
        let mut variables: Vec<_> = decls.variables.clone().into_iter().collect();
        variables.reverse();
        shuffled.variables = variables.into_iter().collect();
        shuffled.types = decls.types.clone();
        shuffled.constants = decls.constants.clone();
        shuffled.functions = decls.functions.clone();

        assert_eq!(first, compose(&shuffled, None).0);
        assert_eq!(first, compose(&decls, None).0);
    }

    #[test]
    fn test_cursor_from_variable() {
        let mut decls = sample();
        decls.add_variable(
            Variable::new("unit")
                .with_value("\"C\"")
                .with_cursor(BindingField::Value, Cursor::new(0, 1)),
        );
        let (text, cursor) = compose(&decls, None);

        let line = text.lines().position(|l| l == "\tunit = \"C\"").unwrap();
        assert_eq!(cursor, Some(Cursor::new(line, 9)));
    }

    #[test]
    fn test_later_phase_cursor_wins() {
        let mut decls = sample();
        decls.add_import(Import::new("strings").with_cursor(ImportField::Path, Cursor::new(0, 1)));
        decls.add_function(
            FunctionKey::named("zz"),
            Function::new("func zz() {}").with_cursor(Cursor::new(0, 5)),
        );
        let (text, cursor) = compose(&decls, None);

        let line = text.lines().position(|l| l == "func zz() {}").unwrap();
        assert_eq!(cursor, Some(Cursor::new(line, 5)));
    }

    #[test]
    fn test_entry_point_cursor() {
        let entry = Function::new("func main() {\n\tshow()\n}").with_cursor(Cursor::new(1, 3));
        let (text, cursor) = compose(&sample(), Some(&entry));

        let line = text.lines().position(|l| l == "\tshow()").unwrap();
        assert_eq!(cursor, Some(Cursor::new(line, 3)));
    }

    #[test]
    fn test_entry_point_cursor_on_first_line() {
        let entry = Function::new("func main() { show() }").with_cursor(Cursor::new(0, 14));
        let (text, cursor) = compose(&Declarations::new(), Some(&entry));

        assert_eq!(text, "package main\n\n\nfunc main() { show() }\n");
        assert_eq!(cursor, Some(Cursor::new(3, 14)));
    }

    #[test]
    fn test_write_failure_names_phase_and_stops_output() {
        let decls = sample();
        let (full, _) = compose(&decls, None);
        // Fail a few bytes into the type declarations.
        let budget = full.find("type Celsius").unwrap() + 3;

        let mut sink = FailAfter::new(budget);
        let err = Composer::default()
            .write_declarations(&mut sink, &decls, None)
            .unwrap_err();

        assert!(matches!(err, Error::Write { phase: Phase::Types, .. }));
        assert!(err.to_string().contains("types"));
        assert_eq!(sink.written(), &full.as_bytes()[..budget]);
    }

    #[test]
    fn test_write_failure_keeps_mapped_cursor() {
        let mut decls = sample();
        decls.add_import(Import::new("os").with_cursor(ImportField::Path, Cursor::new(0, 1)));
        let (full, _) = compose(&decls, None);
        let budget = full.find("type Celsius").unwrap() + 3;

        let mut sink = FailAfter::new(budget);
        let err = Composer::default()
            .write_declarations(&mut sink, &decls, None)
            .unwrap_err();

        match err {
            Error::Write { phase, cursor, .. } => {
                assert_eq!(phase, Phase::Types);
                assert_eq!(cursor, Some(Cursor::new(4, 2)));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_failure_in_entry_point() {
        let decls = sample();
        let entry = Function::new("func main() {}");
        let (full, _) = compose(&decls, Some(&entry));

        let mut sink = FailAfter::new(full.len() - 2);
        let err = Composer::default()
            .write_declarations(&mut sink, &decls, Some(&entry))
            .unwrap_err();
        assert!(matches!(err, Error::Write { phase: Phase::EntryPoint, .. }));
    }

    #[test]
    fn test_render_error_wins_over_close_error() {
        let mut sink = FailAfter::new(4).failing_close();
        let err = Composer::default()
            .declarations_into(&mut sink, &sample(), None)
            .unwrap_err();

        assert!(matches!(err, Error::Write { phase: Phase::Preamble, .. }));
        assert!(sink.closed());
    }

    #[test]
    fn test_close_error_reported_alone() {
        let mut sink = FailAfter::new(usize::MAX).failing_close();
        let err = Composer::default()
            .declarations_into(&mut sink, &sample(), None)
            .unwrap_err();
        assert!(matches!(err, Error::Close { .. }));
    }
}
