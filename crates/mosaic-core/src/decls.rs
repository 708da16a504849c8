//! Declarations collected from cells, grouped by category.
//!
//! The model is built upstream (one cell or many merged cells) and is only
//! read while composing. Every entry keeps the literal sub-texts it renders
//! from, and may mark one of them as holding the cursor.

use std::cmp::Ordering;
use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cursor::Cursor;
use crate::error::{Error, Result};

/// Marks which sub-text of an entry holds the cursor, and where inside it.
///
/// `delta` is relative to the start of the marked sub-text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorMark<F> {
    pub field: F,
    pub delta: Cursor,
}

impl<F: PartialEq> CursorMark<F> {
    pub fn new(field: F, delta: Cursor) -> Self {
        Self { field, delta }
    }

    /// The delta, if this mark points at `field`.
    pub(crate) fn delta_in(&self, field: F) -> Option<Cursor> {
        (self.field == field).then_some(self.delta)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportField {
    Alias,
    Path,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeField {
    Key,
    Definition,
}

/// Sub-texts of a `var` or `const` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingField {
    Name,
    Type,
    Value,
}

/// `import alias "path"`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Import {
    pub path: String,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub cursor: Option<CursorMark<ImportField>>,
}

impl Import {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn with_cursor(mut self, field: ImportField, delta: Cursor) -> Self {
        self.cursor = Some(CursorMark::new(field, delta));
        self
    }
}

/// `type KEY DEFINITION`; the key is the map key it is stored under.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDecl {
    pub definition: String,
    #[serde(default)]
    pub cursor: Option<CursorMark<TypeField>>,
}

impl TypeDecl {
    pub fn new(definition: impl Into<String>) -> Self {
        Self {
            definition: definition.into(),
            cursor: None,
        }
    }

    pub fn with_cursor(mut self, field: TypeField, delta: Cursor) -> Self {
        self.cursor = Some(CursorMark::new(field, delta));
        self
    }
}

/// Shape shared by `var` and `const` entries: `NAME [TYPE] [= VALUE]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    pub name: String,
    #[serde(default, rename = "type")]
    pub type_definition: Option<String>,
    #[serde(default, rename = "value")]
    pub value_definition: Option<String>,
    #[serde(default)]
    pub cursor: Option<CursorMark<BindingField>>,
}

pub type Variable = Binding;
pub type Constant = Binding;

impl Binding {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_type(mut self, type_definition: impl Into<String>) -> Self {
        self.type_definition = Some(type_definition.into());
        self
    }

    pub fn with_value(mut self, value_definition: impl Into<String>) -> Self {
        self.value_definition = Some(value_definition.into());
        self
    }

    pub fn with_cursor(mut self, field: BindingField, delta: Cursor) -> Self {
        self.cursor = Some(CursorMark::new(field, delta));
        self
    }
}

/// Constants declared together, in declaration order.
///
/// Order matters inside a block (`iota`), so a block is never re-sorted. A
/// block always has at least one entry; its key is the name of the first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Constant>", into = "Vec<Constant>")]
pub struct ConstBlock(Vec<Constant>);

impl ConstBlock {
    pub fn new(entries: Vec<Constant>) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::EmptyConstBlock);
        }
        Ok(Self(entries))
    }

    pub fn single(entry: Constant) -> Self {
        Self(vec![entry])
    }

    pub fn key(&self) -> &str {
        &self.0[0].name
    }

    pub fn entries(&self) -> &[Constant] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl TryFrom<Vec<Constant>> for ConstBlock {
    type Error = Error;

    fn try_from(entries: Vec<Constant>) -> Result<Self> {
        Self::new(entries)
    }
}

impl From<ConstBlock> for Vec<Constant> {
    fn from(block: ConstBlock) -> Self {
        block.0
    }
}

/// Key a function is stored under.
///
/// A cell may define several `init` functions; each is kept as its own init
/// hook. Their definitions already read `func init()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionKey {
    Named(String),
    InitHook(u32),
}

impl FunctionKey {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn is_init_hook(&self) -> bool {
        matches!(self, FunctionKey::InitHook(_))
    }
}

impl fmt::Display for FunctionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionKey::Named(name) => f.write_str(name),
            FunctionKey::InitHook(seq) => write!(f, "init_{}", seq),
        }
    }
}

impl Ord for FunctionKey {
    /// By storage name, so `init_10` sorts before `init_2`. A named function
    /// that happens to be called `init_2` comes before the hook.
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_string()
            .cmp(&other.to_string())
            .then_with(|| self.is_init_hook().cmp(&other.is_init_hook()))
    }
}

impl PartialOrd for FunctionKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A function or method, kept as its full source text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    pub definition: String,
    /// Cursor relative to the start of `definition`.
    #[serde(default)]
    pub cursor: Option<Cursor>,
}

impl Function {
    pub fn new(definition: impl Into<String>) -> Self {
        Self {
            definition: definition.into(),
            cursor: None,
        }
    }

    pub fn with_cursor(mut self, delta: Cursor) -> Self {
        self.cursor = Some(delta);
        self
    }
}

/// All declarations to compose into one file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Declarations {
    pub imports: FxHashMap<String, Import>,
    pub types: FxHashMap<String, TypeDecl>,
    /// Constant blocks, keyed by [`ConstBlock::key`].
    pub constants: FxHashMap<String, ConstBlock>,
    pub variables: FxHashMap<String, Variable>,
    #[serde(with = "function_map")]
    pub functions: FxHashMap<FunctionKey, Function>,
}

impl Declarations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an import under its alias, or its path when it has none (or a
    /// blank one).
    pub fn add_import(&mut self, import: Import) {
        let key = match import.alias.as_deref() {
            Some(alias) if !alias.is_empty() => alias.to_string(),
            _ => import.path.clone(),
        };
        self.imports.insert(key, import);
    }

    pub fn add_type(&mut self, key: impl Into<String>, decl: TypeDecl) {
        self.types.insert(key.into(), decl);
    }

    pub fn add_const_block(&mut self, block: ConstBlock) {
        self.constants.insert(block.key().to_string(), block);
    }

    pub fn add_variable(&mut self, variable: Variable) {
        self.variables.insert(variable.name.clone(), variable);
    }

    pub fn add_function(&mut self, key: FunctionKey, function: Function) {
        self.functions.insert(key, function);
    }

    /// Find a constant by name, whatever block it lives in.
    pub fn constant(&self, name: &str) -> Option<&Constant> {
        self.constants
            .values()
            .flat_map(|block| block.entries())
            .find(|constant| constant.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
            && self.types.is_empty()
            && self.constants.is_empty()
            && self.variables.is_empty()
            && self.functions.is_empty()
    }
}

/// JSON objects need string keys; functions are keyed by `FunctionKey`, so
/// they travel as a list of `{ key, function }` pairs.
mod function_map {
    use super::{Function, FunctionKey};
    use rustc_hash::FxHashMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct Entry {
        key: FunctionKey,
        #[serde(flatten)]
        function: Function,
    }

    pub fn serialize<S: Serializer>(
        map: &FxHashMap<FunctionKey, Function>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut entries: Vec<_> = map
            .iter()
            .map(|(key, function)| Entry {
                key: key.clone(),
                function: function.clone(),
            })
            .collect();
        entries.sort_by(|a, b| a.key.cmp(&b.key));
        entries.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<FxHashMap<FunctionKey, Function>, D::Error> {
        let entries = Vec::<Entry>::deserialize(deserializer)?;
        Ok(entries
            .into_iter()
            .map(|entry| (entry.key, entry.function))
            .collect())
    }
}
