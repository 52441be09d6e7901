use std::fmt;

use autodoc_parser::SourceRange;
use serde::{Deserialize, Serialize};

/// What a chunk was cut from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkKind {
    /// A class declaration.
    Class,
    /// A function declaration or a function bound to a variable.
    Function,
    /// Leading text of a file with no recognizable structure.
    Module,
    /// Anything else a consumer chooses to chunk.
    Other,
}

impl ChunkKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Function => "function",
            Self::Module => "module",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ChunkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named slice of a source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeChunk {
    #[serde(rename = "type")]
    pub kind: ChunkKind,
    /// Entity name, or the file path for module chunks.
    pub name: String,
    /// Exact text of `range` within the raw file content.
    pub content: String,
    /// Byte range the content was taken from.
    pub range: SourceRange,
}

impl CodeChunk {
    pub fn new(
        kind: ChunkKind,
        name: impl Into<String>,
        content: impl Into<String>,
        range: SourceRange,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            content: content.into(),
            range,
        }
    }
}

/// Options for chunk extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkOptions {
    /// Character budget of the module fallback chunk.
    pub max_chunk_size: usize,
}

impl ChunkOptions {
    pub const DEFAULT_MAX_CHUNK_SIZE: usize = 4000;
}

impl Default for ChunkOptions {
    fn default() -> Self {
        Self {
            max_chunk_size: Self::DEFAULT_MAX_CHUNK_SIZE,
        }
    }
}
