//! Lines command: compose a file from the raw lines of a cell.

use std::fs;

use anyhow::Context;
use mosaic_core::{ensure_mapped, Composer, Cursor};

use crate::report::{output_path, Report};

/// Compose `cell_path` and print where `cursor` landed.
pub fn execute(
    cell_path: &str,
    cursor: Option<Cursor>,
    dir: &str,
    output: Option<&str>,
) -> anyhow::Result<()> {
    let contents =
        fs::read_to_string(cell_path).with_context(|| format!("reading cell {}", cell_path))?;
    let lines: Vec<&str> = contents.lines().collect();

    let composer = Composer::default();
    let skip = composer.excluded_lines(&lines);
    tracing::debug!("Cell has {} lines, {} excluded", lines.len(), skip.len());

    let path = output_path(dir, output)?;
    let mapped = composer
        .lines_to_file(&path, &lines, &skip, cursor)
        .with_context(|| format!("composing {}", path.display()))?;
    let mapped = ensure_mapped(cursor.is_some(), mapped)?;

    Report {
        path: &path,
        cursor: mapped,
    }
    .print()
}
