//! Execution directory management.
//!
//! Every kernel session composes into the same well-known file, so the
//! compiler step always knows where to look.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Default name of the composed file.
pub const MAIN_FILE: &str = "main.go";

/// Directory where cells are composed and built.
///
/// ```text
/// <exec_dir>/
/// └── main.go   # composed from the current cell
/// ```
#[derive(Debug, Clone)]
pub struct ExecDirs {
    /// The execution directory itself.
    pub exec_dir: PathBuf,

    /// File name of the composed source inside `exec_dir`.
    pub main_file: String,
}

impl ExecDirs {
    /// Use `exec_dir`, creating it if needed.
    ///
    /// # Errors
    /// Returns an error if directory creation fails.
    pub fn from_dir(exec_dir: &Path) -> Result<Self> {
        fs::create_dir_all(exec_dir)?;

        Ok(Self {
            exec_dir: exec_dir.to_path_buf(),
            main_file: MAIN_FILE.to_string(),
        })
    }

    pub fn with_main_file(mut self, main_file: impl Into<String>) -> Self {
        self.main_file = main_file.into();
        self
    }

    /// Path the composed file is written to.
    pub fn main_path(&self) -> PathBuf {
        self.exec_dir.join(&self.main_file)
    }

    /// Remove everything in the execution directory and recreate it.
    pub fn clean(&self) -> Result<()> {
        if self.exec_dir.exists() {
            fs::remove_dir_all(&self.exec_dir)?;
        }
        fs::create_dir_all(&self.exec_dir)?;
        Ok(())
    }
}
