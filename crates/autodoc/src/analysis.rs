//! Results of analyzing a set of source files.

use std::path::{Path, PathBuf};

use autodoc_chunk::CodeChunk;
use autodoc_graph::{DependencyGraph, resolve::normalize};
use autodoc_parser::{ParseError, ParsedFile, ParsedFunction};
use rustc_hash::FxHashMap as HashMap;
use serde::{Deserialize, Serialize};

/// One input file: its path and full text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    pub path: PathBuf,
    pub content: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// A file that could not be parsed. It still gets a module chunk.
#[derive(Debug)]
pub struct ParseFailure {
    pub path: PathBuf,
    pub error: ParseError,
}

/// Chunks cut from one input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChunks {
    pub path: PathBuf,
    pub chunks: Vec<CodeChunk>,
}

/// Structural context of a single file, as rendered into file documentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSummary {
    pub path: PathBuf,
    pub classes: Vec<ClassSummary>,
    pub exported_functions: Vec<String>,
    pub internal_functions: Vec<String>,
    /// Imported input files, one entry per resolved import.
    pub dependencies: Vec<PathBuf>,
    /// Input files importing this one.
    pub dependents: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSummary {
    pub name: String,
    pub methods: Vec<String>,
}

/// Everything [`Engine::analyze`](crate::Engine::analyze) produced.
///
/// Path lookups normalize their argument like the graph does. When the same
/// path was supplied more than once, lookups return the first occurrence.
#[derive(Debug)]
pub struct Analysis {
    parsed: Vec<ParsedFile>,
    graph: DependencyGraph,
    chunks: Vec<FileChunks>,
    failures: Vec<ParseFailure>,
    parsed_index: HashMap<PathBuf, usize>,
    chunk_index: HashMap<PathBuf, usize>,
}

impl Analysis {
    pub(crate) fn new(
        parsed: Vec<ParsedFile>,
        graph: DependencyGraph,
        chunks: Vec<FileChunks>,
        failures: Vec<ParseFailure>,
    ) -> Self {
        let parsed_index = first_positions(parsed.iter().map(|file| file.path.as_path()));
        let chunk_index = first_positions(chunks.iter().map(|file| file.path.as_path()));

        Self {
            parsed,
            graph,
            chunks,
            failures,
            parsed_index,
            chunk_index,
        }
    }

    /// Structural records of every file that parsed, in input order.
    pub fn parsed_files(&self) -> &[ParsedFile] {
        &self.parsed
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// Files that failed to parse, in input order.
    pub fn failures(&self) -> &[ParseFailure] {
        &self.failures
    }

    /// Chunks of every input file, in input order.
    pub fn all_chunks(&self) -> &[FileChunks] {
        &self.chunks
    }

    /// Chunks of the file at `path`. Empty if it was not part of the input.
    pub fn chunks(&self, path: impl AsRef<Path>) -> &[CodeChunk] {
        self.chunk_index
            .get(&normalize(path))
            .map(|&idx| self.chunks[idx].chunks.as_slice())
            .unwrap_or_default()
    }

    /// Structural record of `path`, if it parsed.
    pub fn parsed(&self, path: impl AsRef<Path>) -> Option<&ParsedFile> {
        self.parsed_index
            .get(&normalize(path))
            .map(|&idx| &self.parsed[idx])
    }

    /// Structural summary of `path`, if it parsed.
    pub fn summary(&self, path: impl AsRef<Path>) -> Option<FileSummary> {
        let path = path.as_ref();
        let parsed = self.parsed(path)?;

        Some(FileSummary {
            path: parsed.path.clone(),
            classes: parsed
                .classes
                .iter()
                .map(|class| ClassSummary {
                    name: class.name.clone(),
                    methods: class.methods.clone(),
                })
                .collect(),
            exported_functions: function_names(parsed.exported_functions()),
            internal_functions: function_names(parsed.internal_functions()),
            dependencies: owned(self.graph.dependencies(path)),
            dependents: owned(self.graph.dependents(path)),
        })
    }
}

fn first_positions<'a>(paths: impl Iterator<Item = &'a Path>) -> HashMap<PathBuf, usize> {
    let mut index = HashMap::default();
    for (pos, path) in paths.enumerate() {
        index.entry(normalize(path)).or_insert(pos);
    }
    index
}

fn function_names<'a>(functions: impl Iterator<Item = &'a ParsedFunction>) -> Vec<String> {
    functions.map(|function| function.name.clone()).collect()
}

fn owned(paths: Vec<&Path>) -> Vec<PathBuf> {
    paths.into_iter().map(Path::to_path_buf).collect()
}
