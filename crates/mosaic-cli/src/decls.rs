//! Decls command: compose a file from parsed declarations.

use std::fs;

use anyhow::Context;
use mosaic_core::{ensure_mapped, Composer, Declarations, Function};
use serde::Deserialize;

use crate::report::{output_path, Report};

/// Declarations handed over by the parser, as JSON.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Input {
    declarations: Declarations,
    entry_point: Option<Function>,
    /// Whether one of the declarations was expected to hold the cursor.
    cursor_requested: bool,
}

pub fn execute(input_path: &str, dir: &str, output: Option<&str>) -> anyhow::Result<()> {
    let json =
        fs::read_to_string(input_path).with_context(|| format!("reading {}", input_path))?;
    let input: Input =
        serde_json::from_str(&json).with_context(|| format!("parsing {}", input_path))?;

    let path = output_path(dir, output)?;
    let mapped = Composer::default()
        .declarations_to_file(&path, &input.declarations, input.entry_point.as_ref())
        .with_context(|| format!("composing {}", path.display()))?;
    let mapped = ensure_mapped(input.cursor_requested, mapped)?;

    Report {
        path: &path,
        cursor: mapped,
    }
    .print()
}
