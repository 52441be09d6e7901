use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Raised when a source file cannot be turned into a syntax tree.
#[derive(Debug, Error, Diagnostic)]
pub enum ParseError {
    /// The parser reported diagnostics for the file.
    #[error("failed to parse source '{}': {message}", path.display())]
    #[diagnostic(
        code(autodoc::parser::syntax),
        help("structural analysis is skipped for this file; its raw content is still usable")
    )]
    Syntax {
        /// Path the source was parsed under.
        path: PathBuf,
        /// Aggregated parser diagnostics.
        message: String,
    },
}

impl ParseError {
    /// Helper to create a syntax error from multiple diagnostic strings.
    pub fn syntax(path: impl Into<PathBuf>, diagnostics: &[String]) -> Self {
        Self::Syntax {
            path: path.into(),
            message: diagnostics.join("; "),
        }
    }

    /// Path of the file that failed to parse.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Syntax { path, .. } => path,
        }
    }
}
