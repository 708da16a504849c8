//! Renderers for each declaration category.
//!
//! Every renderer writes its entries sorted by key, so the same declarations
//! always produce the same bytes. An empty category writes nothing and maps
//! no cursor. When an entry marks the cursor, the renderer maps it at the
//! moment the marked sub-text is written, and reports the last such mapping.

mod constants;
mod functions;
mod imports;
mod types;
mod variables;

use std::io::Write;

use rustc_hash::FxHashMap;

use crate::cursor::Cursor;
use crate::decls::{Binding, BindingField};
use crate::writer::CursorWriter;

/// Map entries in key order.
fn sorted<K: Ord, V>(map: &FxHashMap<K, V>) -> Vec<(&K, &V)> {
    let mut entries: Vec<_> = map.iter().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
    entries
}

/// `NAME [TYPE] [= VALUE]`, shared by `var` and `const` entries.
fn render_binding<W: Write>(
    w: &mut CursorWriter<W>,
    binding: &Binding,
    cursor: &mut Option<Cursor>,
) {
    let mark = binding.cursor.as_ref();

    if let Some(delta) = mark.and_then(|m| m.delta_in(BindingField::Name)) {
        *cursor = Some(w.cursor_plus_delta(delta));
    }
    w.write(&binding.name);

    if let Some(type_definition) = non_empty(&binding.type_definition) {
        w.write(" ");
        if let Some(delta) = mark.and_then(|m| m.delta_in(BindingField::Type)) {
            *cursor = Some(w.cursor_plus_delta(delta));
        }
        w.write(type_definition);
    }

    if let Some(value_definition) = non_empty(&binding.value_definition) {
        w.write(" = ");
        if let Some(delta) = mark.and_then(|m| m.delta_in(BindingField::Value)) {
            *cursor = Some(w.cursor_plus_delta(delta));
        }
        w.write(value_definition);
    }
}

/// An optional part that is absent or blank is left out of the output.
fn non_empty(part: &Option<String>) -> Option<&str> {
    part.as_deref().filter(|s| !s.is_empty())
}

/// Quote `s` as a Go interpreted string literal, escaping the way `%q` does.
pub(crate) fn quote(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\u{7}' => quoted.push_str("\\a"),
            '\u{8}' => quoted.push_str("\\b"),
            '\u{c}' => quoted.push_str("\\f"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            '\u{b}' => quoted.push_str("\\v"),
            c if c.is_ascii_control() => {
                quoted.push_str(&format!("\\x{:02x}", c as u32));
            }
            c if !is_printable(c) && (c as u32) < 0x10000 => {
                quoted.push_str(&format!("\\u{:04x}", c as u32));
            }
            c if !is_printable(c) => quoted.push_str(&format!("\\U{:08x}", c as u32)),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

/// Go treats every space other than U+0020 as unprintable, along with
/// control and invisible formatting characters.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !(c.is_control()
        || c.is_whitespace()
        || matches!(
            c,
            '\u{ad}'
                | '\u{200b}'..='\u{200f}'
                | '\u{202a}'..='\u{202e}'
                | '\u{2060}'..='\u{2064}'
                | '\u{feff}'
        ))
}
