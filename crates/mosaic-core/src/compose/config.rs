//! Composer configuration.

/// What the composers emit around the cell content.
#[derive(Debug, Clone)]
pub struct ComposerConfig {
    /// Package clause written at the top of every file.
    pub package: String,

    /// Name of the function synthesized from a directive line.
    pub entry_point: String,

    /// Statements written at the top of the synthesized function.
    pub wrapper_prologue: Vec<String>,

    /// One level of indentation inside the synthesized function.
    pub indent: String,

    /// Line prefixes that open the synthesized function.
    pub directive_prefixes: Vec<String>,

    /// Line prefixes marking lines that are not source code
    /// (shell escapes, magic commands).
    pub excluded_prefixes: Vec<String>,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            package: "main".to_string(),
            entry_point: "main".to_string(),
            wrapper_prologue: vec!["flag.Parse()".to_string()],
            indent: "\t".to_string(),
            directive_prefixes: vec!["%%".to_string(), "%main".to_string()],
            excluded_prefixes: vec!["!".to_string(), "%".to_string()],
        }
    }
}

impl ComposerConfig {
    /// Does `line` open the synthesized entry point?
    pub fn is_directive(&self, line: &str) -> bool {
        self.directive_prefixes
            .iter()
            .any(|prefix| line.starts_with(prefix.as_str()))
    }

    /// Is `line` left out of the composed file?
    pub fn is_excluded(&self, line: &str) -> bool {
        self.excluded_prefixes
            .iter()
            .any(|prefix| line.starts_with(prefix.as_str()))
    }
}
