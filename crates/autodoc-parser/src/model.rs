use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::range::SourceRange;

/// Name recorded for a class declaration without an identifier.
pub const ANONYMOUS_CLASS: &str = "AnonymousClass";

/// Name recorded for a function without an identifier.
pub const ANONYMOUS_FUNCTION: &str = "AnonymousFunction";

/// Name recorded for parameters that are not a plain identifier.
pub const PLACEHOLDER_PARAM: &str = "arg";

/// Structural record of a single source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedFile {
    /// Path the file was parsed under, as supplied by the caller.
    pub path: PathBuf,
    /// Import declarations in source order.
    pub imports: Vec<ParsedImport>,
    /// Class declarations in the order they were first visited.
    pub classes: Vec<ParsedClass>,
    /// Function declarations and variable-bound functions in visit order.
    pub functions: Vec<ParsedFunction>,
}

impl ParsedFile {
    /// Creates an empty record for `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            imports: Vec::new(),
            classes: Vec::new(),
            functions: Vec::new(),
        }
    }

    /// Returns `true` when no class or function was recognized.
    pub fn is_structurally_empty(&self) -> bool {
        self.classes.is_empty() && self.functions.is_empty()
    }

    pub fn exported_classes(&self) -> impl Iterator<Item = &ParsedClass> {
        self.classes.iter().filter(|class| class.is_exported)
    }

    pub fn exported_functions(&self) -> impl Iterator<Item = &ParsedFunction> {
        self.functions.iter().filter(|function| function.is_exported)
    }

    pub fn internal_functions(&self) -> impl Iterator<Item = &ParsedFunction> {
        self.functions.iter().filter(|function| !function.is_exported)
    }
}

/// An `import` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedImport {
    /// Module specifier exactly as written (`"./utils"`, `"react"`).
    pub source: String,
    /// Local binding names introduced by the import, in declaration order.
    pub specifiers: Vec<String>,
}

impl ParsedImport {
    pub fn new(source: impl Into<String>, specifiers: Vec<String>) -> Self {
        Self {
            source: source.into(),
            specifiers,
        }
    }

    /// Whether the specifier points into the local corpus (`./x`, `../x`).
    pub fn is_relative(&self) -> bool {
        is_relative_specifier(&self.source)
    }
}

/// A class declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedClass {
    pub name: String,
    /// Names of method and constructor members, in member order.
    pub methods: Vec<String>,
    pub is_exported: bool,
    /// Span of the export wrapper when exported, otherwise of the class itself.
    pub range: SourceRange,
}

/// A function declaration or a function/arrow expression bound to a variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedFunction {
    pub name: String,
    pub params: Vec<String>,
    #[serde(rename = "async")]
    pub is_async: bool,
    pub is_exported: bool,
    /// Span of the export wrapper when exported, otherwise of the declaration.
    pub range: SourceRange,
}

/// Returns `true` for specifiers that start with a relative-path marker.
///
/// Anything else (`react`, `@scope/pkg`, `node:fs`) is a bare specifier.
pub fn is_relative_specifier(specifier: &str) -> bool {
    specifier.starts_with('.')
}
