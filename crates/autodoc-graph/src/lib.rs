//! # autodoc-graph
//!
//! File-level dependency graph for JavaScript/TypeScript projects.
//!
//! [`DependencyGraph::build`] takes the [`ParsedFile`](autodoc_parser::ParsedFile)
//! records of a project and links each file to the input files its relative
//! imports point at. Resolution is purely lexical: paths are normalized with
//! `path-clean` and matched against the input set, trying the suffixes in
//! [`ResolveOptions::extensions`] when the specifier omits them.
//!
//! ```rust
//! use autodoc_graph::{DependencyGraph, ResolveOptions};
//! use autodoc_parser::{ParsedFile, ParsedImport};
//! use std::path::Path;
//!
//! let mut a = ParsedFile::new("/p/a.ts");
//! a.imports.push(ParsedImport::new("./b", vec!["helper".into()]));
//! a.imports.push(ParsedImport::new("react", vec!["React".into()]));
//! let b = ParsedFile::new("/p/b.ts");
//!
//! let graph = DependencyGraph::build(&[a, b], &ResolveOptions::default());
//! assert_eq!(graph.dependencies("/p/a.ts"), [Path::new("/p/b.ts")]);
//! assert_eq!(graph.dependents("/p/b.ts"), [Path::new("/p/a.ts")]);
//! assert_eq!(graph.len(), 2);
//! ```

pub mod graph;
pub mod options;
pub mod resolve;

pub use graph::{DependencyGraph, FileId, FileNode};
pub use options::{DEFAULT_EXTENSIONS, ResolveOptions};
