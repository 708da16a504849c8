//! Output shared by the compose commands.

use std::path::{Path, PathBuf};

use mosaic_core::{Cursor, ExecDirs};
use serde::Serialize;

/// What a compose command prints on stdout, as one JSON line.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub path: &'a Path,
    pub cursor: Option<Cursor>,
}

impl Report<'_> {
    pub fn print(&self) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string(self)?);
        Ok(())
    }
}

/// Where to write: `output` if given, otherwise the main file of `dir`.
pub fn output_path(dir: &str, output: Option<&str>) -> anyhow::Result<PathBuf> {
    match output {
        Some(output) => Ok(PathBuf::from(output)),
        None => Ok(ExecDirs::from_dir(Path::new(dir))?.main_path()),
    }
}
