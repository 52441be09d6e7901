//! Resolution options for relative import specifiers.

use serde::{Deserialize, Serialize};

/// Suffixes tried, in order, when a relative specifier does not name an input
/// file exactly.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".ts", ".js", ".tsx", ".jsx", "/index.ts", "/index.js"];

/// Options controlling how relative imports are matched to input files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveOptions {
    /// Suffixes appended to the unresolved candidate path. The first suffix that
    /// names an input file wins.
    pub extensions: Vec<String>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| (*ext).to_string()).collect(),
        }
    }
}

impl ResolveOptions {
    /// Options with a custom suffix list.
    pub fn with_extensions<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extensions: extensions.into_iter().map(Into::into).collect(),
        }
    }
}
