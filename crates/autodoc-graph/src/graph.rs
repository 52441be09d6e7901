//! Arena-backed dependency graph.

use std::path::{Path, PathBuf};

use autodoc_parser::ParsedFile;
use rustc_hash::FxHashMap as HashMap;
use serde::Serialize;

use crate::options::ResolveOptions;
use crate::resolve::{normalize, resolve_relative};

/// Dense index of a node in a [`DependencyGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FileId(u32);

impl FileId {
    /// Largest number of distinct files one graph can hold.
    pub const MAX_NODES: usize = u32::MAX as usize;

    fn new(index: usize) -> Self {
        debug_assert!(
            index < Self::MAX_NODES,
            "dependency graph exceeds {} nodes",
            Self::MAX_NODES
        );
        Self(u32::try_from(index).unwrap_or(u32::MAX))
    }

    /// Position of the node in [`DependencyGraph::nodes`].
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One input file and its resolved edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileNode {
    /// Normalized path, unique within the graph.
    pub path: PathBuf,
    /// Files this one imports, once per resolved import statement.
    pub imports: Vec<FileId>,
    /// Files importing this one, each listed once.
    pub imported_by: Vec<FileId>,
}

impl FileNode {
    fn new(path: PathBuf) -> Self {
        Self {
            path,
            imports: Vec::new(),
            imported_by: Vec::new(),
        }
    }
}

/// File-level dependency graph over a fixed set of parsed files.
///
/// Built once from [`ParsedFile`] records and read-only afterwards. Only
/// relative imports that resolve to another input file produce edges; package
/// imports and unresolved paths are dropped.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DependencyGraph {
    nodes: Vec<FileNode>,
    #[serde(skip)]
    index: HashMap<PathBuf, FileId>,
}

impl DependencyGraph {
    /// Build the graph for `files`.
    ///
    /// Files whose paths normalize to the same value share one node. Building
    /// never fails; imports that cannot be matched are skipped.
    ///
    /// At most [`FileId::MAX_NODES`] distinct paths are supported. Past that
    /// limit debug builds panic and release builds saturate the id.
    pub fn build(files: &[ParsedFile], options: &ResolveOptions) -> Self {
        let mut graph = Self::default();

        let owners: Vec<FileId> = files
            .iter()
            .map(|file| graph.intern(normalize(&file.path)))
            .collect();

        let mut edges = Vec::new();
        let mut unresolved = 0usize;
        for (file, &from) in files.iter().zip(&owners) {
            let importer = &graph.nodes[from.index()].path;

            for import in file.imports.iter().filter(|import| import.is_relative()) {
                match resolve_relative(importer, &import.source, &options.extensions, |path| {
                    graph.index.get(path).copied()
                }) {
                    Some(to) => edges.push((from, to)),
                    None => {
                        unresolved += 1;
                        tracing::trace!(
                            importer = %importer.display(),
                            specifier = %import.source,
                            "relative import did not resolve to an input file"
                        );
                    }
                }
            }
        }

        for (from, to) in edges {
            graph.link(from, to);
        }

        tracing::debug!(
            files = files.len(),
            nodes = graph.nodes.len(),
            edges = graph.edge_count(),
            unresolved,
            "built dependency graph"
        );

        graph
    }

    fn intern(&mut self, path: PathBuf) -> FileId {
        if let Some(&id) = self.index.get(&path) {
            return id;
        }
        let id = FileId::new(self.nodes.len());
        self.index.insert(path.clone(), id);
        self.nodes.push(FileNode::new(path));
        id
    }

    fn link(&mut self, from: FileId, to: FileId) {
        self.nodes[from.index()].imports.push(to);

        let imported_by = &mut self.nodes[to.index()].imported_by;
        if !imported_by.contains(&from) {
            imported_by.push(from);
        }
    }

    fn lookup(&self, path: &Path) -> Option<FileId> {
        self.index.get(&normalize(path)).copied()
    }

    fn paths<'g>(&'g self, ids: &'g [FileId]) -> impl Iterator<Item = &'g Path> + 'g {
        ids.iter().map(move |id| self.nodes[id.index()].path.as_path())
    }

    /// Files imported by `path`, one entry per resolved import statement.
    ///
    /// Returns an empty list for paths that are not in the graph.
    pub fn dependencies(&self, path: impl AsRef<Path>) -> Vec<&Path> {
        self.node(path)
            .map(|node| self.paths(&node.imports).collect())
            .unwrap_or_default()
    }

    /// Files importing `path`, each listed once.
    ///
    /// Returns an empty list for paths that are not in the graph.
    pub fn dependents(&self, path: impl AsRef<Path>) -> Vec<&Path> {
        self.node(path)
            .map(|node| self.paths(&node.imported_by).collect())
            .unwrap_or_default()
    }

    /// Node for `path`, normalized the same way input paths are.
    pub fn node(&self, path: impl AsRef<Path>) -> Option<&FileNode> {
        self.lookup(path.as_ref()).map(|id| &self.nodes[id.index()])
    }

    /// Id assigned to `path`, if it is part of the graph.
    pub fn id(&self, path: impl AsRef<Path>) -> Option<FileId> {
        self.lookup(path.as_ref())
    }

    /// Path of the node with `id`.
    pub fn path(&self, id: FileId) -> Option<&Path> {
        self.nodes.get(id.index()).map(|node| node.path.as_path())
    }

    /// All nodes in first-seen input order.
    pub fn nodes(&self) -> impl Iterator<Item = &FileNode> {
        self.nodes.iter()
    }

    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.lookup(path.as_ref()).is_some()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of forward edges, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|node| node.imports.len()).sum()
    }
}
