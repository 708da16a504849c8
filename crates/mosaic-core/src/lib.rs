//! Core engine for composing notebook cells into a compilable Go file.
//!
//! This crate provides:
//! - Position tracking through multi-line text emission
//! - A declaration model (imports, types, constant blocks, variables, functions)
//! - Deterministic renderers per declaration category
//! - File composition from declarations or from raw cell lines, mapping the
//!   cell cursor to its position in the composed file

pub mod compose;
pub mod cursor;
pub mod decls;
pub mod error;
pub mod paths;
mod render;
pub mod sink;
pub mod writer;

#[cfg(test)]
mod testing;

pub use compose::{Composer, ComposerConfig};
pub use cursor::Cursor;
pub use decls::{
    Binding, BindingField, ConstBlock, Constant, CursorMark, Declarations, Function, FunctionKey,
    Import, ImportField, TypeDecl, TypeField, Variable,
};
pub use error::{ensure_mapped, Error, Phase, Result};
pub use paths::ExecDirs;
pub use sink::{write_lines_to_file, Sink};
pub use writer::CursorWriter;
